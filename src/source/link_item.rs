//! The core data type shared across all link sources.
//!
//! `LinkItem` represents a single entry from any data source (a spreadsheet
//! row, mock data, etc.).  Every source implementation converts its native
//! format into `LinkItem`s so the rest of the application can stay
//! source-agnostic.
//!
//! ## For contributors
//!
//! If you are adding a new data source you do **not** need to modify this file
//! unless your source requires extra fields.  Just construct `LinkItem` values
//! in your source's `fetch()` implementation.

/// A single link entry, normalised from any data source.
///
/// All sources convert their native rows into this struct so that the
/// application logic (state tracking, rendering) doesn't need to know which
/// source type produced the item.
///
/// ## Ordering
///
/// Items carry no sort key: display order is the order the source returned
/// them in, and `id` records that position.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LinkItem {
    /// Stable identifier within one fetch result.
    ///
    /// For tabular sources this is the zero-based row index rendered as a
    /// string, so it is positional: reordering the backing data changes ids.
    pub id: String,

    /// Human-readable link title.
    ///
    /// `None` means the source row had no title cell; the UI renders a
    /// placeholder instead.
    pub title: Option<String>,

    /// Target URL.
    ///
    /// `None` means the row had a title but no url cell; such items render
    /// as dead entries rather than being rejected.
    pub url: Option<String>,
}

impl LinkItem {
    /// Build an item from its position in the source sequence.
    ///
    /// `index` becomes the item's `id`; id assignment is deterministic given
    /// identical input order.
    pub fn at_index(index: usize, title: Option<String>, url: Option<String>) -> Self {
        Self {
            id: index.to_string(),
            title,
            url,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_index_renders_position_as_id() {
        let item = LinkItem::at_index(0, Some("A".into()), Some("http://x".into()));
        assert_eq!(item.id, "0");

        let item = LinkItem::at_index(41, None, None);
        assert_eq!(item.id, "41");
    }

    #[test]
    fn ids_are_unique_per_position() {
        let items: Vec<LinkItem> = (0..5)
            .map(|i| LinkItem::at_index(i, Some(format!("t{i}")), None))
            .collect();

        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.id, i.to_string());
        }
    }
}
