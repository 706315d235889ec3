//! refdeck binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use refdeck::{app, args};

/// Local-time log timestamps.
struct RefdeckTimer;

impl tracing_subscriber::fmt::time::FormatTime for RefdeckTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        // "YYYY-MM-DD-THH:MM:SS"
        let ts = chrono::Local::now().format("%Y-%m-%d-T%H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Build the log filter from `RUST_LOG` or the resolved CLI level.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// What: Initialize tracing, writing to `<config>/logs/refdeck.log`.
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened so startup never blocks.
fn init_logging(level: &str) {
    let mut log_path = refdeck::theme::logs_dir();
    log_path.push("refdeck.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(RefdeckTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(RefdeckTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let opts = args::process_args(&cli);
    tracing::info!(start = %opts.start, content = ?opts.content, "refdeck starting");
    if let Err(err) = app::run(opts).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("refdeck exited");
}
