use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, Modal};
use crate::theme::{KeyChord, KeyMap, Theme, theme};

use super::helpers::centered_rect;

/// What: Render the active modal overlay, if any.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (modal, keymap)
/// - `area`: Full screen area; modals are centered within it
///
/// Details:
/// - Clears the area behind the modal and draws a double-bordered box on the mantle background.
/// - Help reflects the active keymap.
pub fn render_modals(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    match &app.modal {
        Modal::None => {}
        Modal::Help => {
            let lines = help_lines(&app.keymap, &th);
            let h = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
            draw_box(f, centered_rect(area, 64, h), " Help ", lines, &th);
        }
        Modal::Alert { message } => {
            let mut lines = vec![Line::from(Span::styled(
                "Something went wrong",
                Style::default().fg(th.red).add_modifier(Modifier::BOLD),
            ))];
            lines.push(Line::default());
            lines.extend(
                message
                    .lines()
                    .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(th.text)))),
            );
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Press Enter or Esc to close",
                Style::default().fg(th.overlay1),
            )));
            let h = u16::try_from(lines.len() + 4).unwrap_or(u16::MAX);
            draw_box(f, centered_rect(area, 80, h), " Alert ", lines, &th);
        }
    }
}

/// Draw a cleared, double-bordered box with wrapped lines.
fn draw_box(f: &mut Frame, rect: Rect, title: &str, lines: Vec<Line<'static>>, th: &Theme) {
    f.render_widget(Clear, rect);
    let para = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    title.to_string(),
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(para, rect);
}

/// What: Lines of the help overlay.
///
/// Output:
/// - One line per action listing all of its chords.
#[must_use]
pub fn help_lines(km: &KeyMap, th: &Theme) -> Vec<Line<'static>> {
    fn fmt(chords: &[KeyChord]) -> String {
        chords
            .iter()
            .map(KeyChord::label)
            .collect::<Vec<_>>()
            .join(" / ")
    }
    let rows: [(&str, &[KeyChord]); 14] = [
        ("Help", &km.help),
        ("Quit", &km.exit),
        ("Reload config", &km.reload_config),
        ("Next focus", &km.focus_next),
        ("Previous focus", &km.focus_prev),
        ("Up", &km.move_up),
        ("Down", &km.move_down),
        ("Page up", &km.page_up),
        ("Page down", &km.page_down),
        ("Open / toggle", &km.activate),
        ("Search", &km.search),
        ("Back", &km.back),
        ("Toggle sidebar", &km.toggle_sidebar),
        ("Clear filters", &km.clear_filters),
    ];
    rows.into_iter()
        .map(|(action, chords)| {
            Line::from(vec![
                Span::styled(
                    format!("{action:<16}"),
                    Style::default().fg(th.subtext1),
                ),
                Span::styled(
                    fmt(chords),
                    Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect()
}
