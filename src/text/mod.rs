//! Text-to-styled-fragment conversion for card content.

pub mod code;
pub mod prose;

pub use code::{ExampleLine, Token, TokenKind, classify, example_lines, format_example};
pub use prose::{ExcludeSet, Fragment, highlight_lines, to_lines, tokenize};
