//! Theme, settings and key bindings.
//!
//! Everything is read from a single `refdeck.conf`; the store keeps the
//! parsed result for the lifetime of the process and supports live reload.

/// Configuration parsing and the default skeleton.
mod config;
/// Value parsers for colors, chords and lists.
mod parsing;
/// Config and log directory resolution.
mod paths;
/// Process-wide store.
mod store;
/// Theme, settings and keymap types.
mod types;

pub use config::{CONFIG_SKELETON, ParsedConfig, ensure_config_file, load_config, parse_config};
pub use paths::{config_dir, config_path, logs_dir};
pub use store::{reload_config, settings, theme};
pub use types::{KeyChord, KeyMap, Settings, Theme, any_matches};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize env-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
