pub mod court;
pub mod header;
pub mod menu;
pub mod overlay;

use ratatui::prelude::*;

use crate::app::App;
use crate::game::Side;
use menu::MenuOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    GameScoreboard,
    GameDebug,
    MainMenu,
}

const MODE_NAMES: [&str; 3] = ["GAME_SCOREBOARD", "GAME_DEBUG VIEW", "MAINMENU"];

impl UiMode {
    pub fn in_game() -> &'static [UiMode] {
        &[UiMode::GameScoreboard, UiMode::GameDebug]
    }

    pub fn name(self) -> &'static str {
        MODE_NAMES[self as usize]
    }

    pub fn is_in_game(self) -> bool {
        matches!(self, UiMode::GameScoreboard | UiMode::GameDebug)
    }
}

/// Presentation state. Holds no game data; draw routines borrow it.
#[derive(Debug)]
pub struct Ui {
    mode: UiMode,
}

impl Ui {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: UiMode) {
        if mode != self.mode {
            log::debug!("ui mode {} -> {}", self.mode.name(), mode.name());
        }
        self.mode = mode;
    }

    /// Flips between the scoreboard and debug overlays.
    ///
    /// # Panics
    /// If called while the main menu is showing.
    pub fn toggle_scoreboard_menu_modes(&mut self) {
        let next = match self.mode {
            UiMode::GameScoreboard => UiMode::GameDebug,
            UiMode::GameDebug => UiMode::GameScoreboard,
            UiMode::MainMenu => panic!("overlay toggle is only valid in game, not in {}", self.mode.name()),
        };
        self.set_mode(next);
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let game = &app.game;

    match app.ui.mode() {
        UiMode::MainMenu => {
            let last_result = (game.score(Side::Left) + game.score(Side::Right) > 0)
                .then(|| (game.score(Side::Left), game.score(Side::Right)));
            app.ui.draw_menu_ui(frame, area, app.menu_selection, &MenuOption::ALL, last_result);
        }
        mode => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2), // Header
                    Constraint::Min(0),    // Court
                ])
                .split(area);

            header::render_header(frame, mode, chunks[0]);
            let court_area = court::render_court(frame, chunks[1], game);

            let right = game.score(Side::Right);
            let left = game.score(Side::Left);
            if mode == UiMode::GameScoreboard {
                app.ui.draw_game_ui(frame, court_area, right, left);
            } else {
                app.ui.draw_debug_ui(frame, court_area, game.targeted_y_pos(), game.ball(), right, left, app.fps);
            }
        }
    }
}
