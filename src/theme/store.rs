use std::sync::{OnceLock, RwLock};

use super::config::{ParsedConfig, ensure_config_file, load_config};
use super::paths::config_path;
use super::types::{Settings, Theme};

/// Process-wide theme and settings with live-reload capability.
static CONFIG_STORE: OnceLock<RwLock<ParsedConfig>> = OnceLock::new();

/// Load `refdeck.conf`, writing the skeleton first when it is missing.
fn load_initial() -> ParsedConfig {
    let path = config_path();
    ensure_config_file(&path);
    load_config(&path)
}

/// Store, initialized from disk on first access.
fn store() -> &'static RwLock<ParsedConfig> {
    CONFIG_STORE.get_or_init(|| RwLock::new(load_initial()))
}

/// Current theme palette.
///
/// A poisoned store falls back to the built-in palette.
pub fn theme() -> Theme {
    store().read().map_or_else(|_| Theme::default(), |c| c.theme)
}

/// Current settings (cloned).
pub fn settings() -> Settings {
    store()
        .read()
        .map_or_else(|_| Settings::default(), |c| c.settings.clone())
}

/// What: Re-read `refdeck.conf` and replace theme and settings.
///
/// Output:
/// - `Ok(n)` with the number of ignored lines, or `Err(msg)` when the store is unavailable.
///
/// Details:
/// - A missing file is not an error; defaults are installed.
pub fn reload_config() -> Result<usize, String> {
    let parsed = load_config(&config_path());
    let problems = parsed.diagnostics.len();
    let mut guard = store()
        .write()
        .map_err(|_| "configuration store poisoned".to_string())?;
    *guard = parsed;
    tracing::info!(problems, "reloaded configuration");
    Ok(problems)
}
