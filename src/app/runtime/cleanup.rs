use std::sync::atomic::Ordering;

use crate::state::AppState;

use super::background::Channels;

/// What: Clean up on exit.
///
/// Inputs:
/// - `app`: Application state (logged for diagnostics)
/// - `channels`: Runtime channels
///
/// Details:
/// - Signals the event thread to stop; no state is persisted between runs.
pub fn cleanup_on_exit(app: &AppState, channels: &Channels) {
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    tracing::info!(
        route = %app.route,
        history = app.history.len(),
        "main loop exited"
    );
}
