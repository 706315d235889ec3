//! Terminal application: setup, event thread, main loop, teardown.

/// Runtime event loop and its helpers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

/// Error type of the runtime layer.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use runtime::init::{initialize_app_state, load_library};
pub use runtime::{RunOptions, run};
