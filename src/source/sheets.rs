//! Spreadsheet-backed tabular data source.
//!
//! This module shows how to implement the [`DataSource`] trait for a remote
//! tabular API.  Use it as a template when adding support for another
//! backend (a TSV export, a JSON API, etc.).
//!
//! ## For contributors — adding a new source type
//!
//! 1. Create a new file under `src/source/` (e.g. `tsv.rs`).
//! 2. Define a struct that holds any configuration your source needs (URL,
//!    API key, etc.).
//! 3. Implement [`DataSource`] for your struct — `name()` returns a label and
//!    `fetch()` returns `Vec<LinkItem>`.
//! 4. Re-export your struct from `src/source/mod.rs`.
//! 5. Wire it into the source selection in `main.rs`.
//!
//! The sheets implementation below is a complete worked example.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use super::{DataSource, LinkItem};

/// Identifies which remote tabular resource to read.
///
/// Treated as immutable input per fetch call; the source holds no other
/// state across calls.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SourceConfig {
    /// Endpoint URL with `{range}` and `{key}` placeholders.
    pub endpoint_template: String,
    /// Access credential substituted for `{key}`.
    pub credential_token: String,
    /// Subset of the tabular data to retrieve (e.g. `Sheet1!A2:B`),
    /// substituted for `{range}`.
    pub range: String,
}

impl SourceConfig {
    /// Construct the concrete request target from the template.
    pub fn request_url(&self) -> String {
        self.endpoint_template
            .replace("{range}", &self.range)
            .replace("{key}", &self.credential_token)
    }
}

/// Expected success response body: an object optionally containing a
/// `values` field, itself a sequence of rows of cells.
///
/// The schema is explicit so that any shape mismatch surfaces as a parse
/// error instead of silently reading missing fields.
#[derive(Debug, Deserialize)]
struct ValuesBody {
    #[serde(default)]
    values: Option<Vec<Vec<Value>>>,
}

/// A spreadsheet range data source.
///
/// Issues a single HTTP GET per fetch using [`reqwest::blocking`]; no
/// retries or timeouts beyond what the transport enforces.
pub struct SheetsSource {
    /// Where to fetch from.
    pub config: SourceConfig,
    /// A human-readable label shown in the UI and in error messages.
    pub label: String,
}

impl SheetsSource {
    /// Create a new sheets source.
    pub fn new(config: SourceConfig, label: impl Into<String>) -> Self {
        Self {
            config,
            label: label.into(),
        }
    }

    /// The Google Sheets v4 values endpoint for `sheet_id`, with the
    /// `{range}` and `{key}` placeholders left for [`SourceConfig`].
    pub fn endpoint_for(sheet_id: &str) -> String {
        format!(
            "https://sheets.googleapis.com/v4/spreadsheets/{sheet_id}/values/{{range}}?key={{key}}"
        )
    }

    /// Parse an already-fetched response body into [`LinkItem`]s.
    ///
    /// This is a pure function (no I/O) so that tests can exercise the
    /// parsing logic without hitting the network.
    ///
    /// A missing or empty `values` field yields `Ok(vec![])` — an explicit
    /// "no items" result, not an error.  Rows shorter than two cells yield
    /// items with the missing fields set to `None` rather than rejecting
    /// the whole response.
    pub fn parse_body(body: &str) -> Result<Vec<LinkItem>> {
        let body: ValuesBody =
            serde_json::from_str(body).context("response is not the expected tabular shape")?;

        let rows = body.values.unwrap_or_default();

        Ok(rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let title = row.first().and_then(cell_to_string);
                let url = row.get(1).and_then(cell_to_string);
                LinkItem::at_index(index, title, url)
            })
            .collect())
    }
}

/// Coerce one cell to display text.
///
/// Cells are expected to be strings, but the backend may serve whatever the
/// user typed: numbers and booleans coerce to their JSON rendering, null
/// counts as an absent cell.  Composite values (arrays, objects) have no
/// sensible single-cell rendering and are treated as absent too.
fn cell_to_string(cell: &Value) -> Option<String> {
    match cell {
        Value::String(s) => Some(s.clone()),
        Value::Number(_) | Value::Bool(_) => Some(cell.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl DataSource for SheetsSource {
    fn name(&self) -> &str {
        &self.label
    }

    fn fetch(&self) -> Result<Vec<LinkItem>> {
        let url = self.config.request_url();
        let body = reqwest::blocking::get(&url)?.text()?;
        Self::parse_body(&body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
