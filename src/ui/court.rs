use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Painter, Shape};
use ratatui::widgets::*;

use crate::game::geometry::{Ball, Bounds};
use crate::game::{PongGame, Side};

/// Solid rectangle in canvas coordinates (y up).
#[derive(Debug, Clone, Copy)]
pub struct FilledRect {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
    pub color: Color,
}

impl Shape for FilledRect {
    fn draw(&self, painter: &mut Painter) {
        let Some((x0, y0)) = painter.get_point(self.left, self.top) else { return };
        let Some((x1, y1)) = painter.get_point(self.right, self.bottom) else { return };
        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                painter.paint(x, y, self.color);
            }
        }
    }
}

/// Solid disc in canvas coordinates, painted by sampling its bounding square.
#[derive(Debug, Clone, Copy)]
pub struct FilledCircle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

const CIRCLE_SAMPLES: i32 = 8;

impl Shape for FilledCircle {
    fn draw(&self, painter: &mut Painter) {
        let step = self.radius / CIRCLE_SAMPLES as f64;
        for i in -CIRCLE_SAMPLES..=CIRCLE_SAMPLES {
            for j in -CIRCLE_SAMPLES..=CIRCLE_SAMPLES {
                if i * i + j * j > CIRCLE_SAMPLES * CIRCLE_SAMPLES {
                    continue;
                }
                let x = self.x + i as f64 * step;
                let y = self.y + j as f64 * step;
                if let Some((px, py)) = painter.get_point(x, y) {
                    painter.paint(px, py, self.color);
                }
            }
        }
    }
}

/// Maps court space (origin top-left, y down) onto the canvas (y up).
#[derive(Debug, Clone, Copy)]
pub struct CourtSpace {
    pub width: f64,
    pub height: f64,
}

impl CourtSpace {
    pub fn of(game: &PongGame) -> Self {
        Self {
            width: game.court_width() as f64,
            height: game.court_height() as f64,
        }
    }

    /// The visible part of `bounds`, or `None` when it lies off the court.
    pub fn rect(&self, bounds: &Bounds, color: Color) -> Option<FilledRect> {
        let left = (bounds.x as f64).clamp(0.0, self.width);
        let right = (bounds.right() as f64).clamp(0.0, self.width);
        let top = (self.height - bounds.y as f64).clamp(0.0, self.height);
        let bottom = (self.height - bounds.bottom() as f64).clamp(0.0, self.height);
        if left >= right || bottom >= top {
            return None;
        }
        Some(FilledRect { left, bottom, right, top, color })
    }

    pub fn circle(&self, ball: &Ball) -> FilledCircle {
        FilledCircle {
            x: ball.center.x as f64,
            y: self.height - ball.center.y as f64,
            radius: ball.radius as f64,
            color: ball.color,
        }
    }
}

/// Draws the court and returns the area it occupies inside its border.
pub fn render_court(frame: &mut Frame, area: Rect, game: &PongGame) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 60, 80)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let space = CourtSpace::of(game);
    let [top_wall, ..] = game.walls();
    let line_color = top_wall.color;

    let canvas = Canvas::default()
        .marker(Marker::HalfBlock)
        .background_color(Color::Black)
        .x_bounds([0.0, space.width])
        .y_bounds([0.0, space.height])
        .paint(move |ctx| {
            ctx.draw(&CanvasLine::new(
                space.width / 2.0,
                0.0,
                space.width / 2.0,
                space.height,
                line_color,
            ));
            for wall in game.walls() {
                if let Some(rect) = space.rect(&wall.bounds, wall.color) {
                    ctx.draw(&rect);
                }
            }
            for side in [Side::Left, Side::Right] {
                let paddle = game.paddle(side);
                if let Some(rect) = space.rect(&paddle.bounds, paddle.color) {
                    ctx.draw(&rect);
                }
            }
            ctx.draw(&space.circle(game.ball()));
        });
    frame.render_widget(canvas, inner);

    inner
}
