//! Data source abstraction layer.
//!
//! This module defines the [`DataSource`] trait, the common [`LinkItem`]
//! type, and the [`FetchState`] value the UI consumes.  Concrete source
//! implementations live in sub-modules ([`sheets`] and [`mock`]).
//!
//! ## For contributors — adding a new source
//!
//! 1. Create a new file in this directory (e.g. `tsv.rs`).
//! 2. Define a struct (e.g. `TsvSource`) and implement [`DataSource`] for it.
//! 3. Add `mod tsv;` below and re-export your struct in the `pub use` block.
//! 4. Construct an instance in `main.rs` and hand it to the fetch worker.
//!
//! That's it — the fetch worker, state handling, and UI are all
//! source-agnostic.

mod fetch_state;
mod link_item;
mod mock;
mod sheets;

// Re-export the public API of this module so callers can write
// `use crate::source::{DataSource, FetchState, LinkItem, SheetsSource};`
pub use fetch_state::FetchState;
pub use link_item::LinkItem;
pub use mock::MockSource;
pub use sheets::{SheetsSource, SourceConfig};

use anyhow::Result;

/// Trait that every data source must implement.
///
/// The fetch worker calls [`fetch()`](DataSource::fetch) on a background
/// thread, so implementations must be [`Send`].
///
/// ## Implementing a new source
///
/// ```ignore
/// pub struct MySource { /* config fields */ }
///
/// impl DataSource for MySource {
///     fn name(&self) -> &str { "my-source" }
///
///     fn fetch(&self) -> Result<Vec<LinkItem>> {
///         // Perform HTTP / IO, then convert into LinkItem values.
///         todo!()
///     }
/// }
/// ```
pub trait DataSource: Send {
    /// Human-readable label shown in the status bar and in error messages.
    fn name(&self) -> &str;

    /// Fetch the list of links.
    ///
    /// Implementations should perform their own HTTP/IO work and return
    /// normalised [`LinkItem`] values in display order.  Errors are
    /// converted into [`FetchState::Failed`] at the worker boundary, never
    /// propagated past it.
    fn fetch(&self) -> Result<Vec<LinkItem>>;
}
