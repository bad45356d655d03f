//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  This makes it easy to change the
//! visual layout without touching business logic.
//!
//! ## For contributors
//!
//! * The screen follows the fetch state: a loading banner while Pending, an
//!   error panel on Failed, and a scrollable link list once Ready.
//! * A one-line status bar sits at the bottom in every state.
//! * Colours and styles are defined inline — feel free to extract them into
//!   constants or a theme struct if the palette grows.
//! * [`ratatui`] is the TUI framework; see its docs for widget details.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::source::FetchState;

/// Draw the complete UI for one frame.
///
/// Called once per tick from the main loop.  The main area renders whichever
/// of the three fetch states currently holds.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [main_area, status_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    match &app.state {
        FetchState::Pending => draw_loading(frame, main_area),
        FetchState::Failed(reason) => draw_error(reason, frame, main_area),
        FetchState::Ready(_) => draw_link_list(app, frame, main_area),
    }

    draw_status_bar(app, frame, status_area);
}

/// Render the Pending banner.
fn draw_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new("Loading links…")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().title(" My Links ").borders(Borders::ALL));
    frame.render_widget(loading, area);
}

/// Render the Failed panel with the fault description.
fn draw_error(reason: &str, frame: &mut Frame, area: Rect) {
    let error = Paragraph::new(Line::from(vec![
        Span::styled("Error loading links: ", Style::default().fg(Color::Red)),
        Span::raw(reason),
    ]))
    .block(Block::default().title(" My Links ").borders(Borders::ALL));
    frame.render_widget(error, area);
}

/// Render the scrollable link list.
fn draw_link_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = app
        .items()
        .iter()
        .map(|item| {
            let title = item.title.as_deref().unwrap_or("(untitled)");
            let url = item.url.as_deref().unwrap_or("(no url)");

            let line = Line::from(vec![
                Span::styled(title.to_string(), Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled(url.to_string(), Style::default().fg(Color::Cyan)),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(list_items)
        .block(Block::default().title(" My Links ").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let status = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(&app.status, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(
            format!("{} links", app.items().len()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  q: quit  r: refresh  ↑/↓: scroll  Home/End: jump"),
    ]));
    frame.render_widget(status, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
