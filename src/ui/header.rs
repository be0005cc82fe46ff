use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::UiMode;

const ACTIVE: Color = Color::Rgb(255, 220, 80);
const INACTIVE: Color = Color::Rgb(110, 110, 130);
const RULE: Color = Color::Rgb(60, 60, 80);

/// Status line above the court: which overlay is up and which key flips it.
pub fn render_header(frame: &mut Frame, mode: UiMode, area: Rect) {
    let mut spans = vec![Span::styled(
        " PONG ",
        Style::default().fg(Color::Black).bg(ACTIVE).add_modifier(Modifier::BOLD),
    )];
    for m in UiMode::in_game() {
        let (marker, style) = if *m == mode {
            ("● ", Style::default().fg(ACTIVE).add_modifier(Modifier::BOLD))
        } else {
            ("○ ", Style::default().fg(INACTIVE))
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("{marker}{}", m.name()), style));
    }
    spans.push(Span::styled("   [G] switch", Style::default().fg(INACTIVE)));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(RULE)),
    );
    frame.render_widget(header, area);
}
