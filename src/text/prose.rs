//! Prose highlighting for descriptions, error notes and guide text.
//!
//! The source text carries no markup. Word-like runs of ASCII letters are
//! emphasized unless they appear in an exclusion list; everything else passes
//! through untouched and newlines become line breaks.

use std::collections::HashSet;
use std::sync::LazyLock;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use regex::Regex;

/// One renderable piece of a tokenized text block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Literal text without styling.
    Plain(&'a str),
    /// A word that should be emphasized.
    Highlight(&'a str),
    /// A `\n` in the source.
    LineBreak,
}

impl<'a> Fragment<'a> {
    /// Source text this fragment covers (`"\n"` for a line break).
    #[must_use]
    pub const fn text(&self) -> &'a str {
        match self {
            Self::Plain(s) | Self::Highlight(s) => s,
            Self::LineBreak => "\n",
        }
    }
}

/// Case-insensitive set of words that are never highlighted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExcludeSet(HashSet<String>);

impl ExcludeSet {
    /// What: Build the set from configured words.
    ///
    /// Inputs:
    /// - `words`: Any iterable of words; blanks are skipped
    ///
    /// Output:
    /// - Set holding the trimmed lowercase form of each word.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        )
    }

    /// Whether `word` is excluded, ignoring case.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        !self.0.is_empty() && self.0.contains(&word.to_lowercase())
    }

    /// Number of excluded words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is excluded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Word-or-newline pattern, compiled once; `None` only if the pattern fails to compile.
static WORD_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9'_]*|\n").ok());

/// What: Split prose into plain, highlighted and line-break fragments.
///
/// Inputs:
/// - `text`: Source text
/// - `exclude`: Words that stay plain
///
/// Output:
/// - Fragments in source order whose texts concatenate back to `text`.
///
/// Details:
/// - Gaps between matches (punctuation, digits, non-Latin scripts, spaces) become `Plain`.
/// - No empty fragment is ever produced.
#[must_use]
pub fn tokenize<'a>(text: &'a str, exclude: &ExcludeSet) -> Vec<Fragment<'a>> {
    let mut out = Vec::new();
    let Some(re) = WORD_RE.as_ref() else {
        tracing::warn!("word pattern unavailable; text left unhighlighted");
        if !text.is_empty() {
            out.push(Fragment::Plain(text));
        }
        return out;
    };
    let mut last = 0usize;
    for m in re.find_iter(text) {
        if m.start() > last {
            out.push(Fragment::Plain(&text[last..m.start()]));
        }
        let word = m.as_str();
        if word == "\n" {
            out.push(Fragment::LineBreak);
        } else if exclude.contains(word) {
            out.push(Fragment::Plain(word));
        } else {
            out.push(Fragment::Highlight(word));
        }
        last = m.end();
    }
    if last < text.len() {
        out.push(Fragment::Plain(&text[last..]));
    }
    out
}

/// What: Turn fragments into ratatui lines.
///
/// Inputs:
/// - `fragments`: Output of [`tokenize`]
/// - `base`: Style for plain text
/// - `highlight`: Style for highlighted words
///
/// Output:
/// - One `Line` per source line; a trailing line break yields a trailing empty line.
#[must_use]
pub fn to_lines<'a>(fragments: &[Fragment<'a>], base: Style, highlight: Style) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'a>> = Vec::new();
    for f in fragments {
        match f {
            Fragment::Plain(s) => current.push(Span::styled(*s, base)),
            Fragment::Highlight(s) => current.push(Span::styled(*s, highlight)),
            Fragment::LineBreak => lines.push(Line::from(std::mem::take(&mut current))),
        }
    }
    lines.push(Line::from(current));
    lines
}

/// Tokenize and render in one step.
#[must_use]
pub fn highlight_lines<'a>(
    text: &'a str,
    exclude: &ExcludeSet,
    base: Style,
    highlight: Style,
) -> Vec<Line<'a>> {
    to_lines(&tokenize(text, exclude), base, highlight)
}
