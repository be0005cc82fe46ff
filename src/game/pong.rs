use glam::Vec2;
use ratatui::style::Color;

use crate::config::PongConfig;
use crate::game::ai::calculate_ai_y_pos;
use crate::game::geometry::{percent_of, Ball, Bounds, Wall};
use crate::game::Side;

const WALL_COLOR: Color = Color::Rgb(160, 186, 168);
// Barely visible; colliders only trigger scoring
const COLLIDER_COLOR: Color = Color::Rgb(40, 6, 6);
const PADDLE_COLOR: Color = Color::Rgb(245, 245, 245);
const BALL_COLOR: Color = Color::Rgb(200, 200, 200);

pub struct PongGame {
    court_width: f32,
    court_height: f32,
    top_wall: Wall,
    bottom_wall: Wall,
    left_collider: Wall,
    right_collider: Wall,
    left_paddle: Wall,
    right_paddle: Wall,
    ball: Ball,
    game_started: bool,
    left_player_score: u32,
    right_player_score: u32,
    targeted_y_pos: f32,
    config: PongConfig,
}

impl PongGame {
    pub fn new(width: f32, height: f32, config: PongConfig) -> Self {
        let mut game = Self {
            court_width: width,
            court_height: height,
            top_wall: Wall::new(WALL_COLOR),
            bottom_wall: Wall::new(WALL_COLOR),
            left_collider: Wall::new(COLLIDER_COLOR),
            right_collider: Wall::new(COLLIDER_COLOR),
            left_paddle: Wall::new(PADDLE_COLOR),
            right_paddle: Wall::new(PADDLE_COLOR),
            ball: Ball::new(0.0, BALL_COLOR),
            game_started: false,
            left_player_score: 0,
            right_player_score: 0,
            targeted_y_pos: height / 2.0,
            config,
        };
        game.position_walls(width, height);
        game.init_match();
        game
    }

    /// Derives walls, colliders and paddle sizes from the court dimensions.
    ///
    /// Paddle y and the ball keep their positions until the next
    /// [`init_match`](Self::init_match), so after a shrink they may briefly sit
    /// outside the court.
    pub fn position_walls(&mut self, width: f32, height: f32) {
        assert!(
            width > 0.0 && height > 0.0,
            "court dimensions must be positive, got {width}x{height}"
        );
        self.court_width = width;
        self.court_height = height;

        let wall_thickness = percent_of(height, 1.0);
        self.top_wall.bounds = Bounds::new(0.0, 0.0, width, wall_thickness);
        self.bottom_wall.bounds = Bounds::new(0.0, height - wall_thickness, width, wall_thickness);

        let collider_thickness = percent_of(width, 1.0);
        self.left_collider.bounds = Bounds::new(0.0, 0.0, collider_thickness, height);
        self.right_collider.bounds =
            Bounds::new(width - collider_thickness, 0.0, collider_thickness, height);

        let paddle_width = percent_of(width, 1.0);
        let paddle_height = percent_of(height, 15.0);
        let paddle_inset = percent_of(width, 2.0);
        for paddle in [&mut self.left_paddle, &mut self.right_paddle] {
            paddle.bounds.width = paddle_width;
            paddle.bounds.height = paddle_height;
        }
        self.left_paddle.bounds.x = paddle_inset;
        self.right_paddle.bounds.x = width - paddle_inset - paddle_width;

        self.ball.radius = percent_of(width, 1.0);
    }

    /// Recenters paddles and ball and stops the rally.
    pub fn init_match(&mut self) {
        self.game_started = false;

        let mid_y = percent_of(self.court_height, 50.0);
        self.right_paddle.bounds.y = mid_y - self.right_paddle.bounds.height / 2.0;
        self.left_paddle.bounds.y = mid_y - self.left_paddle.bounds.height / 2.0;

        self.ball.center = Vec2::new(self.court_width / 2.0, self.court_height / 2.0);
        self.ball.velocity = Vec2::ZERO;
        self.ball.speed = 0.0;
    }

    /// Launches the ball in the direction `(r1, r2)`.
    ///
    /// Returns false and leaves the game untouched when the pair has no
    /// direction (zero length or non-finite) or no horizontal component, since
    /// a purely vertical ball can never reach a goal; the caller should draw
    /// again.
    #[must_use]
    pub fn start_game(&mut self, r1: f32, r2: f32) -> bool {
        let Some(direction) = Vec2::new(r1, r2).try_normalize() else {
            return false;
        };
        if direction.x.abs() <= f32::EPSILON {
            return false;
        }
        self.ball.velocity = direction;
        self.ball.speed = self.config.initial_ball_speed;
        self.game_started = true;
        true
    }

    /// Moves a paddle vertically. A move that would push any part of the
    /// paddle outside the court is reverted entirely.
    pub fn move_paddle(&mut self, side: Side, delta_y: f32) {
        let court_height = self.court_height;
        let paddle = self.paddle_mut(side);
        let old_y = paddle.bounds.y;
        paddle.translate(Vec2::new(0.0, delta_y));
        if paddle.bounds.y < 0.0 || paddle.bounds.bottom() > court_height {
            paddle.bounds.y = old_y;
        }
    }

    /// Moves a paddle one full `speed` step toward `target_y`.
    pub fn move_opponent_paddle_towards_y(&mut self, side: Side, target_y: f32, speed: f32) {
        let paddle_center_y = self.paddle(side).bounds.center().y;
        if paddle_center_y > target_y {
            self.move_paddle(side, -speed);
        } else {
            self.move_paddle(side, speed);
        }
    }

    /// Advances the rally by `dt` seconds. Returns the side that scored, if any.
    pub fn step(&mut self, dt: f32) -> Option<Side> {
        if !self.game_started {
            return None;
        }

        self.ball.velocity = self.ball.velocity.normalize_or_zero();
        self.ball.center += self.ball.velocity * self.ball.speed * dt;

        // Scoring. A fast ball can skip a collider within one tick, so a
        // center past the court edge also counts.
        let center_x = self.ball.center.x;
        if self.ball.overlaps(&self.left_collider) || center_x < self.left_collider.bounds.x {
            self.right_player_score += 1;
            self.init_match();
            return Some(Side::Right);
        }
        if self.ball.overlaps(&self.right_collider) || center_x > self.right_collider.bounds.right() {
            self.left_player_score += 1;
            self.init_match();
            return Some(Side::Left);
        }

        // Bounces
        if self.ball.overlaps(&self.top_wall) || self.ball.overlaps(&self.bottom_wall) {
            self.ball.velocity.y = -self.ball.velocity.y;
        }
        if self.ball.overlaps(&self.right_paddle) || self.ball.overlaps(&self.left_paddle) {
            self.ball.velocity.x = -self.ball.velocity.x;
        }
        // Tunnelled through a wall: put it back on the court side, heading in
        if self.ball.center.y < self.top_wall.bounds.y {
            self.ball.center.y = self.top_wall.bounds.bottom() + self.ball.radius;
            self.ball.velocity.y = self.ball.velocity.y.abs();
        } else if self.ball.center.y > self.bottom_wall.bounds.bottom() {
            self.ball.center.y = self.bottom_wall.bounds.y - self.ball.radius;
            self.ball.velocity.y = -self.ball.velocity.y.abs();
        }

        // Opponent tracks the predicted intercept at its leading edge
        let paddle_x = self.left_paddle.bounds.right();
        if let Some(y) = calculate_ai_y_pos(self.config.ai_error, &self.ball, paddle_x) {
            self.targeted_y_pos = y;
        }
        self.move_opponent_paddle_towards_y(
            Side::Left,
            self.targeted_y_pos,
            self.config.paddle_speed * dt,
        );

        self.ball.speed = self.ball.speed.powf(self.config.ball_speed_increase_rate);
        None
    }

    pub fn is_match_over(&self, winning_score: u32) -> bool {
        self.left_player_score >= winning_score || self.right_player_score >= winning_score
    }

    pub fn reset_scores(&mut self) {
        self.left_player_score = 0;
        self.right_player_score = 0;
    }

    pub fn paddle(&self, side: Side) -> &Wall {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    fn paddle_mut(&mut self, side: Side) -> &mut Wall {
        match side {
            Side::Left => &mut self.left_paddle,
            Side::Right => &mut self.right_paddle,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_player_score,
            Side::Right => self.right_player_score,
        }
    }

    pub fn court_width(&self) -> f32 {
        self.court_width
    }

    pub fn court_height(&self) -> f32 {
        self.court_height
    }

    pub fn game_started(&self) -> bool {
        self.game_started
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn targeted_y_pos(&self) -> f32 {
        self.targeted_y_pos
    }

    pub fn config(&self) -> &PongConfig {
        &self.config
    }

    /// Top wall, bottom wall, left collider, right collider
    pub fn walls(&self) -> [&Wall; 4] {
        [
            &self.top_wall,
            &self.bottom_wall,
            &self.left_collider,
            &self.right_collider,
        ]
    }

    #[cfg(test)]
    pub(crate) fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    #[cfg(test)]
    pub(crate) fn set_scores(&mut self, left: u32, right: u32) {
        self.left_player_score = left;
        self.right_player_score = right;
    }
}
