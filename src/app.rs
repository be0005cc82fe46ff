use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::config::{PongConfig, WindowDimension};
use crate::game::{PongGame, Side};
use crate::input::{Input, Key, Keyboard};
use crate::ui::menu::MenuOption;
use crate::ui::{Ui, UiMode};

pub struct App {
    pub should_quit: bool,
    pub ui: Ui,
    pub game: PongGame,
    pub menu_selection: usize,
    pub fullscreen: bool,
    pub fps: f32,
    keyboard: Keyboard,
    rng: StdRng,
    accumulator: f32,
}

impl App {
    pub fn new(reports_key_releases: bool) -> Self {
        Self::with_rng(PongConfig::default(), StdRng::from_entropy(), reports_key_releases)
    }

    pub fn with_rng(config: PongConfig, rng: StdRng, reports_key_releases: bool) -> Self {
        let dim = WindowDimension::for_fullscreen(false);
        Self {
            should_quit: false,
            ui: Ui::new(UiMode::MainMenu),
            game: PongGame::new(dim.width, dim.height, config),
            menu_selection: 0,
            fullscreen: false,
            fps: 0.0,
            keyboard: Keyboard::new(reports_key_releases),
            rng,
            accumulator: 0.0,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Release {
            // Ctrl+C and Esc close the game from anywhere
            let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl_c || key.code == KeyCode::Esc {
                log::info!("close requested");
                self.should_quit = true;
                return;
            }
        }
        self.keyboard.handle_key(key, now);
    }

    /// Runs one frame of `dt` seconds using the keys seen since the last frame.
    pub fn on_frame(&mut self, dt: f32, fps: f32, now: Instant) {
        self.fps = fps;
        let input = self.keyboard.snapshot(now);
        self.keyboard.end_frame();
        self.update(&input, dt);
    }

    pub fn update(&mut self, input: &Input, dt: f32) {
        match self.ui.mode() {
            UiMode::MainMenu => self.menu_loop(input),
            UiMode::GameScoreboard | UiMode::GameDebug => self.game_loop(input, dt),
        }
    }

    fn menu_loop(&mut self, input: &Input) {
        let count = MenuOption::ALL.len();

        if input.is_pressed(Key::F11) {
            self.toggle_fullscreen();
        }
        if input.is_pressed(Key::Down) {
            self.menu_selection = (self.menu_selection + 1) % count;
        }
        if input.is_pressed(Key::Up) {
            self.menu_selection = (self.menu_selection + count - 1) % count;
        }
        if input.is_pressed(Key::Enter) {
            match MenuOption::ALL[self.menu_selection] {
                MenuOption::Start => {
                    // A finished match keeps its scores on the menu; starting
                    // again clears them instead of waiting for a restart, or
                    // the game routine would send us straight back here.
                    if self.game.is_match_over(self.game.config().winning_score) {
                        log::info!("starting a new match");
                        self.game.reset_scores();
                        self.game.init_match();
                    }
                    self.accumulator = 0.0;
                    self.ui.set_mode(UiMode::GameScoreboard);
                }
                MenuOption::Exit => {
                    log::info!("exit selected");
                    self.should_quit = true;
                }
            }
        }
    }

    fn game_loop(&mut self, input: &Input, dt: f32) {
        // First to the winning score ends the match; scores are kept for the menu
        let winning_score = self.game.config().winning_score;
        if self.game.is_match_over(winning_score) {
            log::info!(
                "match over: left {} - {} right",
                self.game.score(Side::Left),
                self.game.score(Side::Right)
            );
            self.ui.set_mode(UiMode::MainMenu);
            return;
        }

        if input.is_pressed(Key::G) {
            self.ui.toggle_scoreboard_menu_modes();
        }
        if input.is_pressed(Key::F11) {
            self.toggle_fullscreen();
        }
        if input.is_pressed(Key::Space) && !self.game.game_started() {
            self.serve();
        }

        // Player paddle
        let paddle_step = self.game.config().paddle_speed * dt;
        if input.is_down(Key::Up) {
            self.game.move_paddle(Side::Right, -paddle_step);
        }
        if input.is_down(Key::Down) {
            self.game.move_paddle(Side::Right, paddle_step);
        }

        self.advance(dt);
    }

    /// Steps the simulation in fixed increments covering `dt`.
    fn advance(&mut self, dt: f32) {
        self.accumulator += dt;
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            if let Some(side) = self.game.step(SIM_DT) {
                log::info!(
                    "{} player scores: left {} - {} right",
                    side.name(),
                    self.game.score(Side::Left),
                    self.game.score(Side::Right)
                );
            }
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = 0.0;
        }
    }

    /// Launches the ball in a random direction, redrawing pairs with no
    /// direction.
    fn serve(&mut self) {
        loop {
            let r1: f32 = self.rng.gen_range(-1.0..=1.0);
            let r2: f32 = self.rng.gen_range(-1.0..=1.0);
            if self.game.start_game(r1, r2) {
                log::info!("rally started, direction ({r1:.3}, {r2:.3})");
                return;
            }
            log::debug!("degenerate serve direction ({r1}, {r2}), redrawing");
        }
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        let dim = WindowDimension::for_fullscreen(self.fullscreen);
        log::debug!(
            "fullscreen {} -> court {}x{}",
            if self.fullscreen { "on" } else { "off" },
            dim.width,
            dim.height
        );
        self.game.position_walls(dim.width, dim.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn new_app() -> App {
        App::with_rng(PongConfig::default(), StdRng::seed_from_u64(7), false)
    }

    fn in_game_app() -> App {
        let mut app = new_app();
        app.update(&Input::default().with_pressed(Key::Enter), SIM_DT);
        assert_eq!(app.ui.mode(), UiMode::GameScoreboard);
        app
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_starts_in_menu() {
        let app = new_app();
        assert_eq!(app.ui.mode(), UiMode::MainMenu);
        assert_eq!(app.menu_selection, 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_menu_selection_wraps() {
        let mut app = new_app();
        app.update(&Input::default().with_pressed(Key::Up), SIM_DT);
        assert_eq!(app.menu_selection, 1);
        app.update(&Input::default().with_pressed(Key::Down), SIM_DT);
        assert_eq!(app.menu_selection, 0);
        app.update(&Input::default().with_pressed(Key::Down), SIM_DT);
        app.update(&Input::default().with_pressed(Key::Down), SIM_DT);
        assert_eq!(app.menu_selection, 0);
    }

    #[test]
    fn test_exit_option_quits() {
        let mut app = new_app();
        app.update(&Input::default().with_pressed(Key::Down), SIM_DT);
        app.update(&Input::default().with_pressed(Key::Enter), SIM_DT);
        assert!(app.should_quit);
    }

    #[test]
    fn test_space_serves_and_ball_moves() {
        let mut app = in_game_app();
        app.update(&Input::default().with_pressed(Key::Space), SIM_DT);

        assert!(app.game.game_started());
        assert_eq!(app.game.ball().speed, 500.0_f32.powf(1.0001));
        assert!((app.game.ball().velocity.length() - 1.0).abs() < 1e-5);
        assert_ne!(app.game.ball().center, glam::Vec2::new(800.0, 450.0));
    }

    #[test]
    fn test_g_toggles_overlay() {
        let mut app = in_game_app();
        app.update(&Input::default().with_pressed(Key::G), SIM_DT);
        assert_eq!(app.ui.mode(), UiMode::GameDebug);
        app.update(&Input::default().with_pressed(Key::G), SIM_DT);
        assert_eq!(app.ui.mode(), UiMode::GameScoreboard);
    }

    #[test]
    fn test_held_up_moves_player_paddle() {
        let mut app = in_game_app();
        let before = app.game.paddle(Side::Right).bounds.y;
        app.update(&Input::default().with_down(Key::Up), 0.1);
        let after = app.game.paddle(Side::Right).bounds.y;
        assert!((before - after - 50.0).abs() < 1e-3);
        // AI paddle is idle until the rally starts
        assert_eq!(app.game.paddle(Side::Left).bounds.center().y, 450.0);
    }

    #[test]
    fn test_match_end_returns_to_menu_without_reset() {
        let mut app = in_game_app();
        app.game.set_scores(5, 2);
        // Pressing G on the same frame must not trip the in-game toggle
        app.update(&Input::default().with_pressed(Key::G), SIM_DT);

        assert_eq!(app.ui.mode(), UiMode::MainMenu);
        assert_eq!(app.game.score(Side::Left), 5);
        assert_eq!(app.game.score(Side::Right), 2);
    }

    #[test]
    fn test_start_after_finished_match_begins_fresh() {
        let mut app = in_game_app();
        app.game.set_scores(2, 5);
        app.update(&Input::default(), SIM_DT);
        assert_eq!(app.ui.mode(), UiMode::MainMenu);

        app.update(&Input::default().with_pressed(Key::Enter), SIM_DT);
        assert_eq!(app.ui.mode(), UiMode::GameScoreboard);
        assert_eq!(app.game.score(Side::Left), 0);
        assert_eq!(app.game.score(Side::Right), 0);
    }

    #[test]
    fn test_fullscreen_toggle_keeps_state() {
        let mut app = in_game_app();
        app.game.set_scores(1, 1);
        app.update(&Input::default().with_pressed(Key::Space), SIM_DT);
        let center = app.game.ball().center;

        app.update(&Input::default().with_pressed(Key::F11), 0.0);

        assert!(app.fullscreen);
        assert_eq!(app.game.ball().center, center);
        assert_eq!(app.game.score(Side::Left), 1);
        assert!(app.game.game_started());
        assert_eq!(app.game.court_width(), 1600.0);
    }

    #[test]
    fn test_substeps_are_capped() {
        let mut app = in_game_app();
        app.update(&Input::default().with_pressed(Key::Space), 0.0);
        let start = app.game.ball().center;

        // A one second stall only advances MAX_SUBSTEPS ticks
        app.update(&Input::default(), 1.0);
        let travelled = app.game.ball().center.distance(start);
        assert!(travelled < 600.0 * SIM_DT * MAX_SUBSTEPS as f32);
        assert_eq!(app.accumulator, 0.0);
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let now = Instant::now();
        let mut app = new_app();
        app.on_key(key(KeyCode::Esc, KeyModifiers::NONE), now);
        assert!(app.should_quit);

        let mut app = new_app();
        app.on_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL), now);
        assert!(app.should_quit);
    }

    #[test]
    fn test_on_frame_consumes_presses() {
        let now = Instant::now();
        let mut app = new_app();
        app.on_key(key(KeyCode::Down, KeyModifiers::NONE), now);
        app.on_frame(SIM_DT, 60.0, now);
        assert_eq!(app.menu_selection, 1);
        assert_eq!(app.fps, 60.0);

        // Same key still held, but it is no longer a fresh press
        app.on_frame(SIM_DT, 60.0, now);
        assert_eq!(app.menu_selection, 1);
    }
}
