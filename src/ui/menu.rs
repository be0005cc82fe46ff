use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::ui::Ui;

const BANNER: &str = r#"
 ██████╗  ██████╗ ███╗   ██╗ ██████╗
 ██╔══██╗██╔═══██╗████╗  ██║██╔════╝
 ██████╔╝██║   ██║██╔██╗ ██║██║  ███╗
 ██╔═══╝ ██║   ██║██║╚██╗██║██║   ██║
 ██║     ╚██████╔╝██║ ╚████║╚██████╔╝
 ╚═╝      ╚═════╝ ╚═╝  ╚═══╝ ╚═════╝ "#;

const ORANGE: Color = Color::Rgb(255, 161, 0);
const RED: Color = Color::Rgb(230, 41, 55);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Start,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 2] = [MenuOption::Start, MenuOption::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Start => "Start",
            MenuOption::Exit => "Exit",
        }
    }
}

/// The text shown for an option, with a marker on the selected one.
pub fn render_label(option: MenuOption, selected: bool) -> String {
    if selected {
        format!("{}  <", option.label())
    } else {
        option.label().to_string()
    }
}

impl Ui {
    /// # Panics
    /// If `options` is empty or `current_selection` is out of range.
    pub fn draw_menu_ui(
        &self,
        frame: &mut Frame,
        area: Rect,
        current_selection: usize,
        options: &[MenuOption],
        last_result: Option<(u32, u32)>,
    ) {
        assert!(!options.is_empty(), "menu has no options");
        assert!(
            current_selection < options.len(),
            "menu selection {current_selection} out of range for {} options",
            options.len()
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                         // Selection index
                Constraint::Length(8),                         // Banner
                Constraint::Percentage(35),                    // Spacer down to mid-screen
                Constraint::Length(options.len() as u16 * 2),  // Options
                Constraint::Length(2),                         // Last match
                Constraint::Min(0),
                Constraint::Length(1),                         // Footer
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Span::styled(current_selection.to_string(), Style::default().fg(RED))),
            chunks[0],
        );

        let banner = Paragraph::new(BANNER)
            .style(Style::default().fg(ORANGE).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[1]);

        let mut lines: Vec<Line> = Vec::new();
        for (i, option) in options.iter().enumerate() {
            let selected = i == current_selection;
            let style = if selected {
                Style::default()
                    .fg(Color::Rgb(255, 220, 80))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Rgb(245, 245, 245))
            };
            lines.push(Line::from(Span::styled(render_label(*option, selected), style)));
            lines.push(Line::from(""));
        }
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[3]);

        if let Some((left, right)) = last_result {
            let result = Paragraph::new(Line::from(vec![
                Span::styled("Last match  ", Style::default().fg(Color::Rgb(120, 120, 140))),
                Span::styled(
                    format!("Left {left} - {right} Right"),
                    Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD),
                ),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(result, chunks[4]);
        }

        let footer = Paragraph::new(Line::from(vec![
            Span::styled(" ↑↓ ", Style::default().fg(Color::Rgb(80, 200, 255))),
            Span::styled("Select ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Enter ", Style::default().fg(Color::Rgb(80, 200, 255))),
            Span::styled("Confirm ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("F11 ", Style::default().fg(Color::Rgb(80, 200, 255))),
            Span::styled("Fullscreen ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Esc ", Style::default().fg(Color::Rgb(80, 200, 255))),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[6]);
    }
}
