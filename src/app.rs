use ratatui::widgets::ListState;

use crate::source::{FetchState, LinkItem};

pub struct App {
    /// The one synchronization outcome the UI renders.  Assigned wholesale
    /// per fetch resolution, never as separate loading/error/data flags.
    pub state: FetchState,
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Set by input handling; the main loop drains it into the fetch worker.
    refresh_requested: bool,
    /// Last status message.
    pub status: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: FetchState::Pending,
            list_state: ListState::default(),
            quit: false,
            refresh_requested: false,
            status: "Starting…".into(),
        }
    }

    /// Items in the current state (empty unless Ready).
    pub fn items(&self) -> &[LinkItem] {
        self.state.items()
    }

    /// Replace the current state with a freshly resolved one.
    ///
    /// The whole list is replaced, not merged: each fetch result stands on
    /// its own, and the latest to arrive wins.  The selection is clamped to
    /// the new list, or cleared if the new state has no items.
    pub fn apply(&mut self, state: FetchState) {
        match &state {
            FetchState::Ready(items) => {
                self.status = format!("Fetched {} links", items.len());
                self.list_state.select(match self.list_state.selected() {
                    Some(i) if !items.is_empty() => Some(i.min(items.len() - 1)),
                    _ => None,
                });
            }
            FetchState::Failed(reason) => {
                self.status = format!("Error: {reason}");
                self.list_state.select(None);
            }
            FetchState::Pending => {
                self.status = "Loading links…".into();
                self.list_state.select(None);
            }
        }
        self.state = state;
    }

    /// Reset to Pending and flag that the worker should fetch again.
    pub fn request_refresh(&mut self) {
        self.refresh_requested = true;
        self.apply(FetchState::Pending);
    }

    /// Consume the pending refresh flag, if set.
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        let len = self.items().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.items().is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.items().is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let len = self.items().len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(index: usize, title: &str) -> LinkItem {
        LinkItem::at_index(index, Some(title.to_string()), Some("http://x".into()))
    }

    fn sample_items() -> Vec<LinkItem> {
        vec![make_item(0, "A"), make_item(1, "B"), make_item(2, "C")]
    }

    fn ready_app() -> App {
        let mut app = App::new();
        app.apply(FetchState::Ready(sample_items()));
        app
    }

    // -- construction --------------------------------------------------------

    #[test]
    fn new_app_starts_pending_and_empty() {
        let app = App::new();
        assert_eq!(app.state, FetchState::Pending);
        assert!(app.items().is_empty());
        assert!(!app.quit);
        assert!(app.list_state.selected().is_none());
    }

    // -- apply ---------------------------------------------------------------

    #[test]
    fn apply_ready_replaces_items_and_updates_status() {
        let mut app = App::new();
        app.apply(FetchState::Ready(sample_items()));

        assert_eq!(app.items().len(), 3);
        assert_eq!(app.status, "Fetched 3 links");
    }

    #[test]
    fn apply_ready_replaces_rather_than_merges() {
        let mut app = ready_app();
        app.apply(FetchState::Ready(vec![make_item(0, "only")]));

        assert_eq!(app.items().len(), 1);
        assert_eq!(app.items()[0].title.as_deref(), Some("only"));
    }

    #[test]
    fn apply_failed_clears_selection_and_sets_status() {
        let mut app = ready_app();
        app.select_first();

        app.apply(FetchState::Failed("boom".into()));

        assert_eq!(app.state, FetchState::Failed("boom".into()));
        assert!(app.list_state.selected().is_none());
        assert_eq!(app.status, "Error: boom");
    }

    #[test]
    fn apply_clamps_selection_to_shorter_list() {
        let mut app = ready_app();
        app.select_last(); // index 2

        app.apply(FetchState::Ready(vec![make_item(0, "only")]));
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn apply_empty_ready_clears_selection() {
        let mut app = ready_app();
        app.select_first();

        app.apply(FetchState::Ready(vec![]));
        assert!(app.list_state.selected().is_none());
        assert_eq!(app.status, "Fetched 0 links");
    }

    // -- refresh -------------------------------------------------------------

    #[test]
    fn request_refresh_resets_to_pending_and_sets_flag() {
        let mut app = ready_app();
        app.request_refresh();

        assert_eq!(app.state, FetchState::Pending);
        assert!(app.take_refresh_request());
        // Flag is single-shot.
        assert!(!app.take_refresh_request());
    }

    // -- navigation ----------------------------------------------------------

    #[test]
    fn select_next_on_empty_is_noop() {
        let mut app = App::new();
        app.select_next();
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn select_previous_on_empty_is_noop() {
        let mut app = App::new();
        app.select_previous();
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn select_first_on_empty_is_noop() {
        let mut app = App::new();
        app.select_first();
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn select_last_on_empty_is_noop() {
        let mut app = App::new();
        app.select_last();
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn select_next_starts_at_zero_then_advances() {
        let mut app = ready_app();

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(1));

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(2));
    }

    #[test]
    fn select_next_clamps_at_last_item() {
        let mut app = ready_app();

        app.select_last();
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(2));
    }

    #[test]
    fn select_previous_clamps_at_zero() {
        let mut app = ready_app();

        app.select_first();
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn select_previous_moves_up() {
        let mut app = ready_app();

        app.select_last(); // index 2
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(1));
    }

    #[test]
    fn select_first_jumps_to_zero() {
        let mut app = ready_app();

        app.select_last();
        app.select_first();
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn select_last_jumps_to_end() {
        let mut app = ready_app();

        app.select_last();
        assert_eq!(app.list_state.selected(), Some(2));
    }
}
