//! Background fetch worker.
//!
//! Runs on a dedicated thread that owns the data source, performing one
//! fetch at startup and one per refresh request, and sending each resolved
//! [`FetchState`] to the UI thread over an [`mpsc`] channel.
//!
//! ## For contributors
//!
//! The worker is intentionally simple: requests are served one at a time in
//! arrival order, with no de-duplication or cancellation.  If the user mashes
//! refresh, the results arrive in order and the last one wins on the UI side.

use std::sync::mpsc;
use std::thread;

use crate::source::{DataSource, FetchState};

/// Spawn the background fetch thread.
///
/// Returns the refresh-request sender and the state receiver.  The worker
/// fetches once immediately, then once per `()` received on the request
/// channel.  It exits when either channel's far end is dropped.
pub fn spawn(source: Box<dyn DataSource>) -> (mpsc::Sender<()>, mpsc::Receiver<FetchState>) {
    let (req_tx, req_rx) = mpsc::channel::<()>();
    let (state_tx, state_rx) = mpsc::channel::<FetchState>();

    thread::spawn(move || {
        // Initial fetch so the UI leaves Pending without user input.
        if state_tx.send(FetchState::resolve(source.as_ref())).is_err() {
            return;
        }

        // One fetch per refresh request; recv() fails once the UI thread
        // drops its sender, which is the shutdown signal.
        while req_rx.recv().is_ok() {
            if state_tx.send(FetchState::resolve(source.as_ref())).is_err() {
                return;
            }
        }
    });

    (req_tx, state_rx)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
