use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::geometry::Ball;
use crate::ui::Ui;

const HELP_TEXT: &str = "Press F11 to toggle fullscreen and G to toggle UI mode";

const RAYWHITE: Color = Color::Rgb(245, 245, 245);
const GREEN: Color = Color::Rgb(0, 228, 48);
// Dim enough to stay out of the way on the black court
const HELP_COLOR: Color = Color::Rgb(80, 80, 80);

/// 3x5 block glyphs for the scoreboard digits
const DIGITS: [[&str; 5]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    [" █ ", "██ ", " █ ", " █ ", "███"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

/// Rows of block glyphs spelling `value`.
pub fn big_number(value: u32) -> Vec<String> {
    let digits: Vec<usize> = value
        .to_string()
        .bytes()
        .map(|b| (b - b'0') as usize)
        .collect();
    (0..5)
        .map(|row| {
            digits
                .iter()
                .map(|d| DIGITS[*d][row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn header_lines(ui: &Ui) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(HELP_TEXT, Style::default().fg(HELP_COLOR))),
        Line::from(Span::styled(ui.mode().name(), Style::default().fg(GREEN))),
    ]
}

fn render_score(frame: &mut Frame, area: Rect, center_x: u16, top: u16, score: u32, color: Color) {
    let rows = big_number(score);
    let width = rows[0].chars().count() as u16;
    let rect = Rect::new(center_x.saturating_sub(width / 2), top, width, rows.len() as u16)
        .intersection(area);
    let lines: Vec<Line> = rows
        .into_iter()
        .map(|row| Line::from(Span::styled(row, Style::default().fg(color).add_modifier(Modifier::BOLD))))
        .collect();
    frame.render_widget(Paragraph::new(lines), rect);
}

impl Ui {
    /// Scoreboard overlay: left score at a quarter of the width, right score at
    /// three quarters.
    pub fn draw_game_ui(&self, frame: &mut Frame, area: Rect, right_score: u32, left_score: u32) {
        let top = area.y + area.height / 11;
        render_score(frame, area, area.x + area.width / 4, top, left_score, Color::White);
        render_score(frame, area, area.x + 3 * area.width / 4, top, right_score, RAYWHITE);

        let header = Rect::new(area.x, area.y, area.width, 2).intersection(area);
        frame.render_widget(Paragraph::new(header_lines(self)), header);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_debug_ui(
        &self,
        frame: &mut Frame,
        area: Rect,
        targeted_y_pos: f32,
        ball: &Ball,
        right_score: u32,
        left_score: u32,
        fps: f32,
    ) {
        let value = Style::default().fg(RAYWHITE);
        let mut lines = header_lines(self);
        lines.extend([
            Line::from(Span::styled(format!("Predicted AI y position: {targeted_y_pos:.6}"), value)),
            Line::from(Span::styled(format!("Current ball speed: {:.6}", ball.speed), value)),
            Line::from(Span::styled(format!("Left player score: {left_score}"), value)),
            Line::from(Span::styled(format!("Right player score: {right_score}"), value)),
            Line::from(Span::styled(
                format!("{} FPS", fps.round() as u32),
                Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
            )),
        ]);

        let panel = Rect::new(area.x, area.y, area.width, lines.len() as u16).intersection(area);
        frame.render_widget(Paragraph::new(lines), panel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::UiMode;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_big_number_rows() {
        assert_eq!(big_number(7), vec!["███", "  █", "  █", "  █", "  █"]);
        let ten = big_number(10);
        assert_eq!(ten.len(), 5);
        assert_eq!(ten[0], " █  ███");
    }

    #[test]
    fn test_debug_ui_lists_values() {
        let ui = Ui::new(UiMode::GameDebug);
        let mut ball = Ball::new(16.0, Color::Gray);
        ball.speed = 512.5;
        let mut terminal = Terminal::new(TestBackend::new(70, 10)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                ui.draw_debug_ui(frame, area, 300.25, &ball, 2, 4, 59.6);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("GAME_DEBUG VIEW"));
        assert!(text.contains("Predicted AI y position: 300.250000"));
        assert!(text.contains("Current ball speed: 512.500000"));
        assert!(text.contains("Left player score: 4"));
        assert!(text.contains("Right player score: 2"));
        assert!(text.contains("60 FPS"));
    }

    #[test]
    fn test_game_ui_shows_mode_name() {
        let ui = Ui::new(UiMode::GameScoreboard);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                ui.draw_game_ui(frame, area, 3, 1);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("GAME_SCOREBOARD"));
        assert!(text.contains("███"));
    }
}
