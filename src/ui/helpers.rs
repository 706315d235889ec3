//! Layout helpers shared by the page renderers.
//!
//! - Centering overlay boxes
//! - Width-aware word wrapping of styled lines
//! - Truncating labels to a column budget

use ratatui::{
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

/// What: Center a box of at most `max_w` by `max_h` inside `area`.
///
/// Inputs:
/// - `area`: Outer rectangle
/// - `max_w`, `max_h`: Upper bounds for the box
///
/// Output:
/// - Rectangle leaving a margin of 4 columns and 2 rows where space allows.
#[must_use]
pub fn centered_rect(area: Rect, max_w: u16, max_h: u16) -> Rect {
    let w = area.width.saturating_sub(8).min(max_w).max(area.width.min(20));
    let h = area.height.saturating_sub(4).min(max_h).max(area.height.min(5));
    Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    }
}

/// Rounded panel with a title, highlighted when it has focus.
#[must_use]
pub fn panel<'a>(title: impl Into<Line<'a>>, focused: bool, th: &Theme) -> Block<'a> {
    let (title_fg, border_fg) = if focused {
        (th.mauve, th.mauve)
    } else {
        (th.overlay1, th.surface1)
    };
    Block::default()
        .title(title.into().style(Style::default().fg(title_fg)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_fg))
        .style(Style::default().bg(th.base))
}

/// Bold section label used inside cards and topics.
#[must_use]
pub fn section_label(label: &str, th: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        label.to_string(),
        Style::default()
            .fg(th.subtext1)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

/// What: Prefix every line with `indent` spaces.
///
/// Output:
/// - The same lines, each starting with an unstyled indentation span.
#[must_use]
pub fn indent_lines(lines: Vec<Line<'_>>, indent: usize) -> Vec<Line<'_>> {
    lines
        .into_iter()
        .map(|mut l| {
            l.spans.insert(0, Span::raw(" ".repeat(indent)));
            l
        })
        .collect()
}

/// What: Truncate `s` to at most `max` display columns.
///
/// Output:
/// - `s` unchanged when it fits, otherwise a prefix ending in `…`.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let cw = ch.width().unwrap_or(0);
        if used + cw > max - 1 {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    out
}

/// What: Word-wrap a styled line to `width` display columns.
///
/// Inputs:
/// - `line`: Styled source line
/// - `width`: Available columns
///
/// Output:
/// - One or more owned lines; span styles are preserved across breaks.
///
/// Details:
/// - Breaks after spaces; words wider than `width` are split by character.
/// - Wrapping ahead of rendering keeps line counts exact for scroll tracking.
#[must_use]
pub fn wrap_line(line: &Line<'_>, width: usize) -> Vec<Line<'static>> {
    let mut out: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;
    let flush = |out: &mut Vec<Line<'static>>, current: &mut Vec<Span<'static>>| {
        out.push(Line::from(std::mem::take(current)).style(line.style));
    };
    for span in &line.spans {
        for piece in span.content.split_inclusive(' ') {
            let w = piece.width();
            if width == 0 || w <= width {
                if used > 0 && width > 0 && used + w > width {
                    flush(&mut out, &mut current);
                    used = 0;
                }
                current.push(Span::styled(piece.to_string(), span.style));
                used += w;
                continue;
            }
            let mut chunk = String::new();
            for ch in piece.chars() {
                let cw = ch.width().unwrap_or(0);
                if used + cw > width && used > 0 {
                    if !chunk.is_empty() {
                        current.push(Span::styled(std::mem::take(&mut chunk), span.style));
                    }
                    flush(&mut out, &mut current);
                    used = 0;
                }
                chunk.push(ch);
                used += cw;
            }
            if !chunk.is_empty() {
                current.push(Span::styled(chunk, span.style));
            }
        }
    }
    flush(&mut out, &mut current);
    out
}

/// Wrap every line; see [`wrap_line`].
#[must_use]
pub fn wrap_lines(lines: &[Line<'_>], width: usize) -> Vec<Line<'static>> {
    lines.iter().flat_map(|l| wrap_line(l, width)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    /// What: Lines break between words and keep all text.
    ///
    /// Inputs:
    /// - "alpha beta gamma" wrapped at 11 columns.
    ///
    /// Output:
    /// - "alpha beta " then "gamma".
    fn wraps_at_word_boundaries() {
        let line = Line::from("alpha beta gamma");
        let wrapped = wrap_line(&line, 11);
        assert_eq!(wrapped.len(), 2);
        assert_eq!(text_of(&wrapped[0]), "alpha beta ");
        assert_eq!(text_of(&wrapped[1]), "gamma");
    }

    #[test]
    /// What: Overlong words split by character; styles survive.
    ///
    /// Inputs:
    /// - A bold 10-character word wrapped at 4 columns.
    ///
    /// Output:
    /// - Three lines, every span bold.
    fn splits_long_words() {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let line = Line::from(Span::styled("abcdefghij", bold));
        let wrapped = wrap_line(&line, 4);
        let texts: Vec<String> = wrapped.iter().map(text_of).collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ij"]);
        assert!(wrapped.iter().flat_map(|l| &l.spans).all(|s| s.style == bold));
    }

    #[test]
    /// What: Empty lines survive wrapping; width 0 disables it.
    ///
    /// Inputs:
    /// - Empty line; a long line at width 0.
    ///
    /// Output:
    /// - One empty line; the long line untouched.
    fn empty_and_zero_width() {
        assert_eq!(wrap_line(&Line::default(), 10).len(), 1);
        assert_eq!(wrap_line(&Line::from("a b c d e"), 0).len(), 1);
    }

    #[test]
    /// What: Truncation respects wide characters.
    ///
    /// Inputs:
    /// - ASCII and CJK labels.
    ///
    /// Output:
    /// - Width never exceeds the budget and ends with an ellipsis when cut.
    fn truncate_respects_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
        let cut = truncate_to_width("日本語テキスト", 6);
        assert!(cut.width() <= 6);
        assert!(cut.ends_with('…'));
    }

    #[test]
    /// What: Centered boxes stay inside the area.
    ///
    /// Inputs:
    /// - 100x40 and 10x6 areas.
    ///
    /// Output:
    /// - Box fits in both.
    fn centered_rect_fits() {
        let big = centered_rect(Rect::new(0, 0, 100, 40), 60, 20);
        assert_eq!((big.width, big.height), (60, 20));
        assert_eq!(big.x, 20);
        let small = centered_rect(Rect::new(0, 0, 10, 6), 60, 20);
        assert!(small.width <= 10 && small.height <= 6);
    }
}
