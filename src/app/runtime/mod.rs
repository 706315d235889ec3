use std::path::PathBuf;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::nav::Route;
use crate::ui::ui;

use super::Result;
use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod cleanup;
pub mod init;

use background::{Channels, spawn_event_thread, spawn_tick_worker};
use cleanup::cleanup_on_exit;
use init::initialize_app_state;

/// How long a footer status message stays visible.
const STATUS_TTL: std::time::Duration = std::time::Duration::from_secs(4);

/// Startup options collected from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Page opened first.
    pub start: Route,
    /// External pack replacing the method catalog.
    pub content: Option<PathBuf>,
    /// Query typed into the start page's search input.
    pub search: Option<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            start: Route::Home,
            content: None,
            search: None,
        }
    }
}

/// Whether `REFDECK_TEST_HEADLESS=1` asks to skip the terminal.
fn is_headless() -> bool {
    std::env::var("REFDECK_TEST_HEADLESS").ok().as_deref() == Some("1")
}

/// What: Run the browser end-to-end.
///
/// Inputs:
/// - `opts`: Start page, optional content pack, optional initial query
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - Terminal: raw mode and alternate screen unless headless (`REFDECK_TEST_HEADLESS=1`).
/// - Workers: a blocking event thread forwards crossterm events; a tick worker expires
///   status messages and drives redraws.
/// - Loop: redraw, then wait for the next event or tick; exit chords end the loop.
/// - Cleanup: stops the event thread and restores terminal modes.
///
/// # Errors
/// - Entering or leaving raw mode or the alternate screen fails
/// - The terminal backend cannot be created
pub async fn run(opts: RunOptions) -> Result<()> {
    let headless = is_headless();
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = initialize_app_state(opts);
    let mut channels = Channels::new();
    spawn_tick_worker(channels.tick_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, &mut app))
        {
            tracing::warn!(error = %e, "draw failed");
        }
        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(&ev, &mut app) {
                    break;
                }
            }
            Some(()) = channels.tick_rx.recv() => {
                app.expire_status(STATUS_TTL);
            }
            else => break,
        }
    }

    cleanup_on_exit(&app, &channels);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
