//! Lexical classification of code examples for syntax coloring.
//!
//! A flat single pass over the characters of one line. No parsing, no state
//! beyond "was the previous token a dot".

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::Theme;

/// Coloring class of one code token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of whitespace.
    Whitespace,
    /// Quoted string literal including its quotes.
    Str,
    /// Control-flow keyword.
    Control,
    /// Declaration keyword.
    Declaration,
    /// Type-system keyword or built-in utility type.
    TypeKeyword,
    /// Primitive type name.
    Primitive,
    /// Class-related keyword.
    ClassKeyword,
    /// Module keyword.
    Module,
    /// `true` / `false`.
    Boolean,
    /// Identifier directly after a `.`.
    Method,
    /// Well-known global identifier.
    Global,
    /// Numeric literal.
    Number,
    /// `//` line comment.
    Comment,
    /// Anything else (identifiers, punctuation, dots).
    Plain,
}

/// A classified slice of the source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Coloring class.
    pub kind: TokenKind,
    /// Source text.
    pub text: &'a str,
}

const CONTROL: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "break", "continue", "return", "try",
    "catch", "finally", "throw",
];
const DECLARATION: &[&str] = &["let", "const", "var", "function", "yield", "await", "async"];
const TYPE_KEYWORDS: &[&str] = &[
    "type",
    "interface",
    "enum",
    "namespace",
    "module",
    "declare",
    "implements",
    "extends",
    "infer",
    "keyof",
    "typeof",
    "instanceof",
    "readonly",
    "Uppercase",
    "Lowercase",
    "Capitalize",
    "Uncapitalize",
    "Partial",
    "Required",
    "Readonly",
    "Pick",
    "Omit",
    "Record",
    "Exclude",
    "Extract",
    "NonNullable",
    "Parameters",
    "ReturnType",
    "ConstructorParameters",
    "InstanceType",
    "Awaited",
    "NoInfer",
];
const PRIMITIVES: &[&str] = &[
    "string",
    "number",
    "boolean",
    "any",
    "void",
    "delete",
    "in",
    "never",
    "unknown",
    "object",
    "symbol",
    "bigint",
    "null",
    "undefined",
];
const CLASS_KEYWORDS: &[&str] = &[
    "class",
    "constructor",
    "super",
    "public",
    "private",
    "protected",
    "static",
    "new",
];
const MODULE_KEYWORDS: &[&str] = &["import", "export", "from", "as", "default", "require", "module"];
const BOOLEANS: &[&str] = &["true", "false"];
const GLOBALS: &[&str] = &[
    "setTimeout",
    "setInterval",
    "clearTimeout",
    "clearInterval",
    "Promise",
    "then",
    "catch",
    "finally",
    "console",
    "JSON",
    "Math",
    "Number",
    "String",
    "Symbol",
    "Function",
    "Boolean",
    "Array",
    "Date",
    "Object",
    "RegExp",
    "Error",
    "Map",
    "Set",
    "WeakMap",
    "WeakSet",
    "Proxy",
    "Reflect",
];

/// Characters that may appear in an identifier or number run.
const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Whether `word` looks like an identifier (not starting with a digit).
fn is_identifier(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
}

/// What: Whether `word` is a numeric literal.
///
/// Details:
/// - `Infinity`, `NaN`, or ASCII digits with an optional `.digits` fraction.
fn is_number(word: &str) -> bool {
    if matches!(word, "Infinity" | "-Infinity" | "NaN") {
        return true;
    }
    let (int, frac) = match word.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (word, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    digits(int) && frac.is_none_or(digits)
}

/// What: Classify one identifier-or-number run.
///
/// Inputs:
/// - `word`: Run of word characters
/// - `after_dot`: Whether the previous token was `.`
///
/// Output:
/// - First matching class in priority order, `Plain` when nothing matches.
#[must_use]
pub fn classify_word(word: &str, after_dot: bool) -> TokenKind {
    let tables: [(&[&str], TokenKind); 7] = [
        (CONTROL, TokenKind::Control),
        (DECLARATION, TokenKind::Declaration),
        (TYPE_KEYWORDS, TokenKind::TypeKeyword),
        (PRIMITIVES, TokenKind::Primitive),
        (CLASS_KEYWORDS, TokenKind::ClassKeyword),
        (MODULE_KEYWORDS, TokenKind::Module),
        (BOOLEANS, TokenKind::Boolean),
    ];
    if let Some((_, kind)) = tables.iter().find(|(table, _)| table.contains(&word)) {
        return *kind;
    }
    if after_dot && is_identifier(word) {
        return TokenKind::Method;
    }
    if GLOBALS.contains(&word) {
        return TokenKind::Global;
    }
    if is_number(word) {
        return TokenKind::Number;
    }
    TokenKind::Plain
}

/// Byte offset just past the end of a string literal opened at `start`.
fn string_end(code: &str, start: usize, quote: char) -> usize {
    let mut chars = code[start + quote.len_utf8()..].char_indices();
    let base = start + quote.len_utf8();
    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            if chars.next().is_none() {
                return code.len();
            }
        } else if c == quote {
            return base + i + c.len_utf8();
        }
    }
    code.len()
}

/// What: Tokenize one line of example code.
///
/// Inputs:
/// - `code`: Source line without its newline
///
/// Output:
/// - Tokens whose texts concatenate to `code`.
///
/// Details:
/// - Precedence: whitespace run, quoted string (`"`, `'`, backtick; backslash escapes; an
///   unterminated string runs to end of line), `.`, word run, single character.
/// - Only a dot arms the method rule; whitespace keeps it armed, anything else clears it.
#[must_use]
pub fn classify(code: &str) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    let mut after_dot = false;
    let mut i = 0usize;
    while let Some(c) = code[i..].chars().next() {
        let end = if c.is_whitespace() {
            let len = code[i..]
                .find(|ch: char| !ch.is_whitespace())
                .unwrap_or(code.len() - i);
            out.push(Token {
                kind: TokenKind::Whitespace,
                text: &code[i..i + len],
            });
            i + len
        } else if matches!(c, '"' | '\'' | '`') {
            let end = string_end(code, i, c);
            out.push(Token {
                kind: TokenKind::Str,
                text: &code[i..end],
            });
            after_dot = false;
            end
        } else if c == '.' {
            out.push(Token {
                kind: TokenKind::Plain,
                text: ".",
            });
            after_dot = true;
            i + 1
        } else if is_word_char(c) {
            let len = code[i..]
                .find(|ch: char| !is_word_char(ch))
                .unwrap_or(code.len() - i);
            let word = &code[i..i + len];
            out.push(Token {
                kind: classify_word(word, after_dot),
                text: word,
            });
            after_dot = false;
            i + len
        } else {
            let end = i + c.len_utf8();
            out.push(Token {
                kind: TokenKind::Plain,
                text: &code[i..end],
            });
            after_dot = false;
            end
        };
        i = end;
    }
    out
}

/// One formatted line of an example block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExampleLine<'a> {
    /// Source line was empty.
    Blank,
    /// Classified tokens, a trailing `//` comment included.
    Code(Vec<Token<'a>>),
}

/// What: Split an example into classified lines.
///
/// Inputs:
/// - `example`: Multi-line example text
///
/// Output:
/// - One entry per `\n`-separated line; empty input yields no lines.
///
/// Details:
/// - The first `//` on a line starts a comment; only the part before it is classified.
#[must_use]
pub fn format_example(example: &str) -> Vec<ExampleLine<'_>> {
    if example.is_empty() {
        return Vec::new();
    }
    example
        .split('\n')
        .map(|line| {
            if line.is_empty() {
                return ExampleLine::Blank;
            }
            match line.find("//") {
                Some(idx) => {
                    let mut tokens = classify(&line[..idx]);
                    tokens.push(Token {
                        kind: TokenKind::Comment,
                        text: &line[idx..],
                    });
                    ExampleLine::Code(tokens)
                }
                None => ExampleLine::Code(classify(line)),
            }
        })
        .collect()
}

/// What: Style for a token kind under the active theme.
///
/// Inputs:
/// - `kind`: Token class
/// - `th`: Theme palette
///
/// Output:
/// - Foreground color (and italics for comments).
#[must_use]
pub fn style_for(kind: TokenKind, th: &Theme) -> Style {
    let fg = match kind {
        TokenKind::Whitespace | TokenKind::Plain => th.text,
        TokenKind::Str => th.green,
        TokenKind::Control | TokenKind::ClassKeyword => th.mauve,
        TokenKind::Declaration | TokenKind::Module => th.red,
        TokenKind::TypeKeyword => th.yellow,
        TokenKind::Primitive => th.sapphire,
        TokenKind::Boolean | TokenKind::Number => th.peach,
        TokenKind::Method => th.blue,
        TokenKind::Global => th.lavender,
        TokenKind::Comment => th.overlay1,
    };
    let style = Style::default().fg(fg);
    if kind == TokenKind::Comment {
        style.add_modifier(Modifier::ITALIC)
    } else {
        style
    }
}

/// What: Render an example as ratatui lines.
///
/// Inputs:
/// - `example`: Example text
/// - `th`: Theme palette
///
/// Output:
/// - One `Line` per source line, blank lines kept.
#[must_use]
pub fn example_lines<'a>(example: &'a str, th: &Theme) -> Vec<Line<'a>> {
    format_example(example)
        .into_iter()
        .map(|line| match line {
            ExampleLine::Blank => Line::default(),
            ExampleLine::Code(tokens) => Line::from(
                tokens
                    .into_iter()
                    .map(|t| Span::styled(t.text, style_for(t.kind, th)))
                    .collect::<Vec<_>>(),
            ),
        })
        .collect()
}
