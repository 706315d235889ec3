//! Card list rendering for the method and utility type pages.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::content::{Catalog, Method, Named, UtilityType};
use crate::logic::compute_view;
use crate::state::PageState;
use crate::text::{ExcludeSet, example_lines, highlight_lines};
use crate::theme::Theme;

use super::helpers::{indent_lines, panel, section_label, wrap_lines};

/// Text shown when no card matches the filters.
pub const EMPTY_STATE: &str = "No entries match this query";

/// Columns cards are indented by when expanded.
const BODY_INDENT: usize = 4;

/// What: Style pair for highlighted prose.
///
/// Output:
/// - `(base, highlight)`: body text and emphasized identifiers.
#[must_use]
pub fn prose_styles(th: &Theme) -> (Style, Style) {
    (
        Style::default().fg(th.text),
        Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
    )
}

/// Content of an expanded card.
pub trait CardBody: Named {
    /// Lines shown under the card header when it is expanded.
    fn body_lines<'a>(&'a self, exclude: &ExcludeSet, th: &Theme) -> Vec<Line<'a>>;
}

impl CardBody for Method {
    fn body_lines<'a>(&'a self, exclude: &ExcludeSet, th: &Theme) -> Vec<Line<'a>> {
        let (base, hl) = prose_styles(th);
        let mut lines = vec![section_label("Syntax", th)];
        lines.extend(example_lines(&self.syntax, th));
        if !self.parameters.is_empty() {
            lines.push(Line::default());
            lines.push(section_label("Parameters", th));
            for p in &self.parameters {
                let mut desc = p.description.split('\n');
                let name = Span::styled(
                    format!("{}: ", p.name),
                    Style::default().fg(th.peach).add_modifier(Modifier::BOLD),
                );
                let first = desc.next().unwrap_or_default();
                lines.push(Line::from(vec![name, Span::styled(first, base)]));
                lines.extend(desc.map(|rest| Line::from(Span::styled(rest, base))));
            }
        }
        lines.push(Line::default());
        lines.push(section_label("Description", th));
        lines.extend(highlight_lines(&self.description, exclude, base, hl));
        if let Some(spec) = &self.specification {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("Specification: ", Style::default().fg(th.subtext1)),
                Span::styled(
                    spec.as_str(),
                    Style::default().fg(th.blue).add_modifier(Modifier::UNDERLINED),
                ),
            ]));
        }
        if let Some(errors) = self.errors.as_deref().filter(|e| !e.is_empty()) {
            lines.push(Line::default());
            lines.push(section_label("Errors", th));
            lines.extend(highlight_lines(
                errors,
                exclude,
                base,
                Style::default().fg(th.red).add_modifier(Modifier::BOLD),
            ));
        }
        if !self.example.is_empty() {
            lines.push(Line::default());
            lines.push(section_label("Example", th));
            lines.extend(example_lines(&self.example, th));
        }
        lines
    }
}

impl CardBody for UtilityType {
    fn body_lines<'a>(&'a self, exclude: &ExcludeSet, th: &Theme) -> Vec<Line<'a>> {
        let (base, hl) = prose_styles(th);
        let mut lines = vec![section_label("Signature", th)];
        lines.extend(example_lines(&self.signature, th));
        lines.push(Line::default());
        lines.push(section_label("Description", th));
        lines.extend(highlight_lines(&self.description, exclude, base, hl));
        if !self.syntax_breakdown.is_empty() {
            lines.push(Line::default());
            lines.push(section_label("Syntax breakdown", th));
            let code_w = self
                .syntax_breakdown
                .iter()
                .map(|b| unicode_width::UnicodeWidthStr::width(b.code.as_str()))
                .max()
                .unwrap_or(0);
            for item in &self.syntax_breakdown {
                let pad = code_w
                    .saturating_sub(unicode_width::UnicodeWidthStr::width(item.code.as_str()));
                lines.push(Line::from(vec![
                    Span::styled(item.code.as_str(), Style::default().fg(th.yellow)),
                    Span::raw(" ".repeat(pad + 2)),
                    Span::styled(item.description.as_str(), Style::default().fg(th.subtext0)),
                ]));
            }
        }
        if !self.example.is_empty() {
            lines.push(Line::default());
            lines.push(section_label("Example", th));
            lines.extend(example_lines(&self.example, th));
        }
        lines
    }
}

/// Rendered card list plus the line range of the highlighted card.
#[derive(Debug, Default)]
pub struct CardLayout {
    /// Wrapped lines of every visible card.
    pub lines: Vec<Line<'static>>,
    /// First and last line (inclusive) of the card under the cursor.
    pub cursor_lines: Option<(usize, usize)>,
}

/// What: Lay out the visible cards of a page.
///
/// Inputs:
/// - `catalog`: Page catalog (items and category labels)
/// - `page`: Filters, cursor, and expanded cards
/// - `exclude`: Words never emphasized in prose
/// - `th`: Theme palette
/// - `width`: Columns available for wrapping
/// - `focused`: Whether the list has keyboard focus
///
/// Output:
/// - [`CardLayout`] with a category header before each group and a footer while more cards exist.
///
/// Details:
/// - An empty view yields only [`EMPTY_STATE`].
#[must_use]
pub fn layout_cards<T: CardBody>(
    catalog: &Catalog<T>,
    page: &PageState,
    exclude: &ExcludeSet,
    th: &Theme,
    width: usize,
    focused: bool,
) -> CardLayout {
    let view = compute_view(catalog.map(), &page.filter);
    let mut out = CardLayout::default();
    if view.is_empty() {
        out.lines.push(Line::from(Span::styled(
            EMPTY_STATE,
            Style::default().fg(th.overlay1).add_modifier(Modifier::ITALIC),
        )));
        return out;
    }
    let mut index = 0usize;
    for (category, items) in &view.items {
        if index > 0 {
            out.lines.push(Line::default());
        }
        out.lines.push(Line::from(Span::styled(
            format!("{} ({})", catalog.label(category), items.len()),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )));
        for item in items {
            let start = out.lines.len();
            let expanded = page.is_expanded(category, item.name());
            let selected = index == page.cursor;
            let mut header_style = Style::default().fg(th.text).add_modifier(Modifier::BOLD);
            if selected && focused {
                header_style = header_style.fg(th.crust).bg(th.lavender);
            } else if selected {
                header_style = header_style.fg(th.lavender);
            }
            let header = Line::from(vec![
                Span::styled(
                    if expanded { "  ▾ " } else { "  ▸ " },
                    Style::default().fg(th.overlay1),
                ),
                Span::styled(item.name().to_string(), header_style),
            ]);
            out.lines.extend(wrap_lines(&[header], width));
            if expanded {
                let body = indent_lines(item.body_lines(exclude, th), BODY_INDENT);
                out.lines.extend(wrap_lines(&body, width));
                out.lines.push(Line::default());
            }
            if selected {
                out.cursor_lines = Some((start, out.lines.len().saturating_sub(1)));
            }
            index += 1;
        }
    }
    if view.has_more {
        out.lines.push(Line::default());
        out.lines.push(Line::from(Span::styled(
            format!(
                "Showing {} of {} (move down to load more)",
                view.visible_len(),
                view.total_count
            ),
            Style::default().fg(th.overlay1),
        )));
    }
    out
}

/// What: Scroll offset that keeps the highlighted card on screen.
///
/// Inputs:
/// - `scroll`: Current first line
/// - `cursor_lines`: Line range of the highlighted card
/// - `height`: Visible rows
///
/// Output:
/// - Adjusted first line; the card header wins when the card is taller than the view.
#[must_use]
pub fn follow_cursor(scroll: usize, cursor_lines: Option<(usize, usize)>, height: usize) -> usize {
    let Some((start, end)) = cursor_lines else {
        return 0;
    };
    if height == 0 || start < scroll {
        return start;
    }
    if end >= scroll + height {
        return start.min(end + 1 - height);
    }
    scroll
}

/// What: Render the cards of one page into `area`.
///
/// Details:
/// - Updates `page.scroll` so the highlighted card stays visible.
pub fn render_cards<T: CardBody>(
    f: &mut Frame,
    area: Rect,
    catalog: &Catalog<T>,
    page: &mut PageState,
    exclude: &ExcludeSet,
    th: &Theme,
    focused: bool,
) {
    let block = panel(" Entries ", focused, th);
    let inner = block.inner(area);
    let layout = layout_cards(
        catalog,
        page,
        exclude,
        th,
        usize::from(inner.width),
        focused,
    );
    let scroll = follow_cursor(
        usize::from(page.scroll),
        layout.cursor_lines,
        usize::from(inner.height),
    );
    page.scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    let para = Paragraph::new(layout.lines)
        .block(block)
        .scroll((page.scroll, 0));
    f.render_widget(para, area);
}
