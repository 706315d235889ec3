use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::{sync::mpsc, time::Duration};

/// Interval of the tick worker.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Poll timeout of the event thread; bounds how long cancellation takes.
const EVENT_POLL: std::time::Duration = std::time::Duration::from_millis(50);

/// What: Channels between the event thread, the tick worker, and the main loop.
pub struct Channels {
    /// Terminal events from the event thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving end drained by the main loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the event thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Periodic ticks (status expiry, redraw).
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiving end of the ticks.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// Create all channels with the cancellation flag cleared.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            tick_tx,
            tick_rx,
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}

/// What: Spawn the tick worker.
///
/// Details:
/// - Sends `()` every [`TICK_INTERVAL`] until the receiver is dropped.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the event reading thread for terminal input.
///
/// Inputs:
/// - `headless`: When `true`, skip spawning the thread
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Flag that stops the thread
///
/// Details:
/// - A blocking thread polls crossterm with a 50 ms timeout so cancellation is noticed promptly.
/// - Read errors are transient and ignored; a closed channel ends the thread.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(EVENT_POLL) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        continue;
                    };
                    if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
        tracing::debug!("event thread stopped");
    });
}
