use std::env;
use std::path::{Path, PathBuf};

/// File name of the combined theme/settings/keybinds configuration.
pub(crate) const CONFIG_FILE_NAME: &str = "refdeck.conf";

/// What: Resolve the configuration directory without creating it.
///
/// Output:
/// - `$XDG_CONFIG_HOME/refdeck` when set and non-empty, else `$HOME/.config/refdeck`,
///   else `./refdeck` as a last resort.
pub(crate) fn config_base_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME")
        && !xdg.trim().is_empty()
    {
        return Path::new(&xdg).join("refdeck");
    }
    env::var("HOME").map_or_else(
        |_| PathBuf::from("refdeck"),
        |home| Path::new(&home).join(".config").join("refdeck"),
    )
}

/// Configuration directory, created on demand.
#[must_use]
pub fn config_dir() -> PathBuf {
    let dir = config_base_dir();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::debug!(path = %dir.display(), error = %e, "could not create config dir");
    }
    dir
}

/// Path of `refdeck.conf` inside [`config_dir`].
#[must_use]
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Logs directory under config: `<config>/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
