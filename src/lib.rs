//! Library entry for refdeck exposing the browser core for integration tests.
//!
//! - [`content`]: bundled and external catalogs of methods, utility types, and guide topics.
//! - [`logic`]: the filter and pagination engine.
//! - [`text`]: prose tokenizing and code example classification.
//! - [`app`]: the terminal runtime.

pub mod app;
pub mod args;
pub mod content;
pub mod events;
pub mod logic;
pub mod nav;
pub mod state;
pub mod text;
pub mod theme;
pub mod ui;
