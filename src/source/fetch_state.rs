//! The tri-state outcome of a synchronization attempt.
//!
//! `FetchState` is the single value the UI consumes: exactly one variant
//! holds at any time, so "loading", "error" and "data" can never get out of
//! sync the way three independent flags could.

use super::{DataSource, LinkItem};

/// Result of one fetch invocation.
///
/// Transitions are `Pending → Ready` or `Pending → Failed`, terminal once
/// resolved for a given invocation.  A fresh invocation resets to `Pending`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FetchState {
    /// A fetch is in flight; no result yet.
    Pending,
    /// The fetch succeeded.  An empty list is a valid "no items" result,
    /// distinct from failure.
    Ready(Vec<LinkItem>),
    /// The fetch failed with a human-readable reason.
    Failed(String),
}

impl FetchState {
    /// Run one fetch against `source` and convert the outcome.
    ///
    /// This is the fault-conversion boundary: transport and parse errors
    /// alike are rendered into the [`Failed`](FetchState::Failed) variant,
    /// never re-raised to the caller.
    pub fn resolve(source: &dyn DataSource) -> Self {
        match source.fetch() {
            Ok(items) => FetchState::Ready(items),
            // `{:#}` renders the whole anyhow context chain on one line.
            Err(e) => FetchState::Failed(format!("{}: {e:#}", source.name())),
        }
    }

    /// Items if this state is `Ready`, otherwise an empty slice.
    pub fn items(&self) -> &[LinkItem] {
        match self {
            FetchState::Ready(items) => items,
            _ => &[],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};

    struct StubSource(Result<Vec<LinkItem>, String>);

    impl DataSource for StubSource {
        fn name(&self) -> &str {
            "stub"
        }

        fn fetch(&self) -> Result<Vec<LinkItem>> {
            match &self.0 {
                Ok(items) => Ok(items.clone()),
                Err(msg) => Err(anyhow!("{msg}")),
            }
        }
    }

    #[test]
    fn resolve_converts_ok_to_ready() {
        let src = StubSource(Ok(vec![LinkItem::at_index(0, Some("A".into()), None)]));
        let state = FetchState::resolve(&src);

        assert_eq!(
            state,
            FetchState::Ready(vec![LinkItem::at_index(0, Some("A".into()), None)])
        );
    }

    #[test]
    fn resolve_converts_empty_ok_to_ready_not_failed() {
        let src = StubSource(Ok(vec![]));
        assert_eq!(FetchState::resolve(&src), FetchState::Ready(vec![]));
    }

    #[test]
    fn resolve_converts_err_to_failed_with_nonempty_reason() {
        let src = StubSource(Err("connection refused".into()));
        match FetchState::resolve(&src) {
            FetchState::Failed(reason) => {
                assert!(!reason.is_empty());
                assert!(reason.contains("connection refused"));
                assert!(reason.starts_with("stub"), "reason names the source");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn resolve_is_idempotent_for_identical_source_data() {
        let src = StubSource(Ok(vec![
            LinkItem::at_index(0, Some("A".into()), Some("http://x".into())),
            LinkItem::at_index(1, Some("B".into()), Some("http://y".into())),
        ]));

        assert_eq!(FetchState::resolve(&src), FetchState::resolve(&src));
    }

    #[test]
    fn items_is_empty_unless_ready() {
        assert!(FetchState::Pending.items().is_empty());
        assert!(FetchState::Failed("x".into()).items().is_empty());

        let ready = FetchState::Ready(vec![LinkItem::at_index(0, None, None)]);
        assert_eq!(ready.items().len(), 1);
    }
}
