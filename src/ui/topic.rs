use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::content::Topic;
use crate::state::{AppState, Focus, TopicState};
use crate::text::{ExcludeSet, example_lines, highlight_lines};
use crate::theme::{Theme, theme};

use super::cards::{follow_cursor, prose_styles};
use super::helpers::{indent_lines, panel, section_label, wrap_lines};

/// What: Lines of a topic page, one block for the introduction and one per section.
///
/// Inputs:
/// - `topic`: Topic record
/// - `exclude`: Words never emphasized
/// - `th`: Theme palette
/// - `state`: Highlighted section and the sections whose examples are shown
///
/// Output:
/// - Block 0 is the introduction; block `i + 1` is section `i` (title, content,
///   addition, and example block or hint).
///
/// Details:
/// - Introduction and addition emphasize identifiers in bold body color; section content
///   uses the accent color.
#[must_use]
pub fn topic_blocks<'a>(
    topic: &'a Topic,
    exclude: &ExcludeSet,
    th: &Theme,
    state: &TopicState,
) -> Vec<Vec<Line<'a>>> {
    let (base, accent) = prose_styles(th);
    let strong = Style::default().fg(th.text).add_modifier(Modifier::BOLD);
    let mut blocks = vec![highlight_lines(&topic.introduction, exclude, base, strong)];
    for (i, section) in topic.sections.iter().enumerate() {
        let selected = i == state.section;
        let marker = if selected { "▸ " } else { "  " };
        let mut lines = vec![
            Line::default(),
            Line::from(vec![
                Span::styled(marker, Style::default().fg(th.sapphire)),
                Span::styled(
                    section.title.as_str(),
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ),
            ]),
        ];
        lines.extend(highlight_lines(&section.content, exclude, base, accent));
        if let Some(addition) = &section.addition {
            lines.push(Line::default());
            lines.extend(highlight_lines(addition, exclude, Style::default().fg(th.subtext1), strong));
        }
        if let Some(examples) = &section.examples {
            lines.push(Line::default());
            if state.examples_shown(i) {
                lines.push(section_label("Example", th));
                lines.extend(indent_lines(example_lines(examples, th), 2));
            } else {
                let hint = if selected {
                    "Example hidden (Enter to show)"
                } else {
                    "Example hidden"
                };
                lines.push(Line::from(Span::styled(
                    hint,
                    Style::default().fg(th.overlay1).add_modifier(Modifier::ITALIC),
                )));
            }
        }
        blocks.push(lines);
    }
    blocks
}

/// What: Wrap topic blocks to `width`.
///
/// Output:
/// - Wrapped lines plus the `(first, last)` line of each section.
fn layout_topic(blocks: &[Vec<Line<'_>>], width: usize) -> (Vec<Line<'static>>, Vec<(usize, usize)>) {
    let mut lines = Vec::new();
    let mut sections = Vec::new();
    for (i, block) in blocks.iter().enumerate() {
        let first = lines.len();
        lines.extend(wrap_lines(block, width));
        if i > 0 {
            sections.push((first, lines.len().saturating_sub(1).max(first)));
        }
    }
    (lines, sections)
}

/// What: Render the topic reader for `value`.
///
/// Details:
/// - After section movement the scroll follows the highlighted section; otherwise
///   `app.topic_scroll` is only clamped so the last line can reach the bottom of the view.
/// - Unknown topic values render a short notice instead of failing.
pub fn render_topic(f: &mut Frame, app: &mut AppState, area: Rect, value: &str) {
    let th = theme();
    let focused = app.focus == Focus::Content;
    let block = panel(" Topic ", focused, &th);
    let inner = block.inner(area);
    let height = usize::from(inner.height);
    let (lines, sections) = match app.find_topic(value) {
        Some((_, topic)) => layout_topic(
            &topic_blocks(topic, &app.exclude, &th, &app.topic),
            usize::from(inner.width),
        ),
        None => (
            vec![Line::from(Span::styled(
                format!("Topic '{value}' was not found"),
                Style::default().fg(th.red),
            ))],
            Vec::new(),
        ),
    };
    if std::mem::take(&mut app.topic.follow) {
        let scroll = follow_cursor(
            usize::from(app.topic_scroll),
            sections.get(app.topic.section).copied(),
            height,
        );
        app.topic_scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    }
    let max_scroll = lines.len().saturating_sub(height);
    app.topic_scroll = app
        .topic_scroll
        .min(u16::try_from(max_scroll).unwrap_or(u16::MAX));
    let para = Paragraph::new(lines)
        .block(block)
        .scroll((app.topic_scroll, 0));
    f.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Library;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn flat(blocks: &[Vec<Line<'_>>]) -> Vec<String> {
        blocks.iter().flatten().map(text_of).collect()
    }

    #[test]
    /// What: Each section's examples toggle independently.
    ///
    /// Inputs:
    /// - A bundled topic with examples in a section; that section shown, then another one.
    ///
    /// Output:
    /// - Only the shown section renders its example block; the others keep the hint.
    fn examples_toggle_per_section() {
        let lib = Library::bundled().expect("bundled content");
        let topic = lib
            .topics
            .map()
            .iter()
            .flat_map(|g| g.items.iter())
            .find(|t| t.sections.iter().filter(|s| s.examples.is_some()).count() >= 2)
            .expect("a topic with two example sections");
        let with_examples: Vec<usize> = topic
            .sections
            .iter()
            .enumerate()
            .filter(|(_, s)| s.examples.is_some())
            .map(|(i, _)| i)
            .collect();
        let th = Theme::default();
        let ex = ExcludeSet::default();
        let mut state = TopicState::default();

        let hidden = topic_blocks(topic, &ex, &th, &state);
        assert_eq!(hidden.len(), topic.sections.len() + 1);
        assert!(flat(&hidden).iter().all(|l| l != "Example"));
        assert!(text_of(&hidden[0][0]).starts_with(topic.introduction.lines().next().unwrap_or("")));

        state.section = with_examples[0];
        assert!(state.toggle_examples());
        let one = topic_blocks(topic, &ex, &th, &state);
        let shown_in = |blocks: &[Vec<Line<'_>>], i: usize| {
            blocks[i + 1].iter().any(|l| text_of(l) == "Example")
        };
        assert!(shown_in(&one, with_examples[0]));
        assert!(!shown_in(&one, with_examples[1]));

        state.section = with_examples[1];
        state.toggle_examples();
        state.section = with_examples[0];
        assert!(!state.toggle_examples());
        let other = topic_blocks(topic, &ex, &th, &state);
        assert!(!shown_in(&other, with_examples[0]));
        assert!(shown_in(&other, with_examples[1]));
    }

    #[test]
    /// What: Section line ranges account for wrapping.
    ///
    /// Inputs:
    /// - An introduction block and two one-line sections, width 5 with a long first section.
    ///
    /// Output:
    /// - Ranges start after the introduction and cover the wrapped rows.
    fn section_ranges_follow_wrapping() {
        let blocks = vec![
            vec![Line::from("intro")],
            vec![Line::from("aaaa bbbb cccc")],
            vec![Line::from("dd")],
        ];
        let (lines, sections) = layout_topic(&blocks, 5);
        assert_eq!(sections, vec![(1, 3), (4, 4)]);
        assert_eq!(lines.len(), 5);
    }
}
