//! linkboard — a terminal display for a user-curated list of links.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐ FetchState  ┌──────────┐  draw()  ┌──────────┐
//! │ fetch.rs │ ──────────► │  app.rs  │ ───────► │  ui.rs   │
//! │ (thread) │  (channel)  │ (state)  │          │ (render) │
//! └──────────┘             └──────────┘          └──────────┘
//!                               ▲
//!                               │ handle_key_event()
//!                          ┌──────────┐
//!                          │ input.rs │
//!                          └──────────┘
//! ```
//!
//! * **`source/`** — the `DataSource` trait and concrete implementations
//!   (a spreadsheet-backed API and built-in mock data).
//! * **`fetch`** — spawns a background thread that fetches on demand.
//! * **`app`** — owns all application state (fetch state, scroll position).
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations.
//! * **`main`** — wires everything together: parse args, set up the terminal,
//!   and run the event loop.

mod app;
mod fetch;
mod input;
mod source;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use source::{DataSource, MockSource, SheetsSource, SourceConfig};

/// Range fetched when none is given: all title/url rows below the header.
const DEFAULT_RANGE: &str = "Sheet1!A2:B";

// ---------------------------------------------------------------------------
// RAII terminal guard — idiomatic cleanup even on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen.  When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal.  This prevents the common TUI bug where a panic leaves the
/// terminal in a broken state.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.  Without this, a panic inside the event loop would leave
/// raw mode enabled and the alternate screen active.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

/// Pick the data source from the command line.
///
/// `linkboard SHEET_ID API_KEY [RANGE]` reads from the spreadsheet API.
/// With no arguments the built-in mock list is shown instead.
fn select_source(mut args: impl Iterator<Item = String>) -> Box<dyn DataSource> {
    match (args.next(), args.next()) {
        (Some(sheet_id), Some(api_key)) => {
            let config = SourceConfig {
                endpoint_template: SheetsSource::endpoint_for(&sheet_id),
                credential_token: api_key,
                range: args.next().unwrap_or_else(|| DEFAULT_RANGE.into()),
            };
            Box::new(SheetsSource::new(config, "sheet"))
        }
        _ => Box::new(MockSource),
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    install_panic_hook();

    // -- configure the data source -------------------------------------------
    let source = select_source(std::env::args().skip(1));

    // -- start the background fetch worker -----------------------------------
    let (refresh_tx, state_rx) = fetch::spawn(source);

    // -- terminal setup (RAII — Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new();

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Each iteration:
    //   1. Drain any resolved states from the fetch worker.
    //   2. Forward a refresh request if the user asked for one.
    //   3. Render the UI.
    //   4. Poll for keyboard input (non-blocking, up to tick_rate).
    let tick_rate = Duration::from_millis(100);

    loop {
        // 1. Process resolved fetch states (the latest applied wins)
        while let Ok(state) = state_rx.try_recv() {
            app.apply(state);
        }

        // 2. Forward refresh requests to the worker
        if app.take_refresh_request() {
            // Worker gone means nothing left to refresh; keep running so
            // the user can still read the last state.
            let _ = refresh_tx.send(());
        }

        // 3. Render
        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        // 4. Handle input
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(&mut app, key);
            }
        }

        if app.quit {
            break;
        }
    }

    // `guard` is dropped here, restoring the terminal.
    Ok(())
}
