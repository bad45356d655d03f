//! Built-in demo data source.
//!
//! Serves a fixed list of links without touching the network, for trying
//! the UI out before wiring up a real spreadsheet.

use anyhow::Result;

use super::{DataSource, LinkItem};

/// A data source backed by a fixed in-memory list.
pub struct MockSource;

/// The demo link list: (title, url) pairs mapped to items on each fetch.
const DEMO_LINKS: &[(&str, &str)] = &[
    (
        "Introducing the new React documentation",
        "https://react.dev",
    ),
    (
        "The Ultimate Guide to Web Performance in 2025",
        "https://example.com/web-performance",
    ),
    ("Announcing TensorFlow 3.0", "https://example.com/tensorflow-3"),
    (
        "Revolutionizing Code Reviews with AI",
        "https://example.com/ai-code-reviews",
    ),
    (
        "The Future of Remote Work",
        "https://example.com/remote-work-2025",
    ),
];

impl DataSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn fetch(&self) -> Result<Vec<LinkItem>> {
        Ok(DEMO_LINKS
            .iter()
            .enumerate()
            .map(|(index, (title, url))| {
                LinkItem::at_index(index, Some((*title).into()), Some((*url).into()))
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
