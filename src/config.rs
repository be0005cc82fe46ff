//! Game tuning and court presets

use std::time::Duration;

pub mod consts {
    use super::Duration;

    /// Render/input frame rate
    pub const TARGET_FPS: u32 = 60;
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// How long a key counts as held after its last press/repeat event when
    /// the terminal does not report key releases. Must exceed the terminal's
    /// auto-repeat delay.
    pub const KEY_HOLD_WINDOW: Duration = Duration::from_millis(500);

    pub const LOG_FILE_NAME: &str = "term-pong.log";
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowDimension {
    pub width: f32,
    pub height: f32,
}

pub const WINDOWED_DIM: WindowDimension = WindowDimension { width: 1600.0, height: 900.0 };
pub const FULLSCREEN_DIM: WindowDimension = WindowDimension { width: 1600.0, height: 900.0 };

impl WindowDimension {
    pub fn for_fullscreen(fullscreen: bool) -> Self {
        if fullscreen { FULLSCREEN_DIM } else { WINDOWED_DIM }
    }
}

/// Gameplay tuning shared by the simulation and the app loop.
#[derive(Debug, Clone, PartialEq)]
pub struct PongConfig {
    /// Paddle speed in court units per second (player and AI)
    pub paddle_speed: f32,
    /// Ball speed at the start of each rally
    pub initial_ball_speed: f32,
    /// Exponent applied to the ball speed every tick. Must be >= 1.0 with an
    /// initial speed >= 1.0 for the speed to grow.
    pub ball_speed_increase_rate: f32,
    /// Bias added to the AI's predicted intercept
    pub ai_error: f32,
    /// Points that end a match and return to the menu
    pub winning_score: u32,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            paddle_speed: 500.0,
            initial_ball_speed: 500.0,
            ball_speed_increase_rate: 1.0001,
            ai_error: 0.0,
            winning_score: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_match() {
        assert_eq!(WindowDimension::for_fullscreen(false), WINDOWED_DIM);
        assert_eq!(WindowDimension::for_fullscreen(true), FULLSCREEN_DIM);
        assert_eq!(WINDOWED_DIM.width, 1600.0);
        assert_eq!(WINDOWED_DIM.height, 900.0);
    }

    #[test]
    fn test_default_speed_grows() {
        let config = PongConfig::default();
        assert!(config.initial_ball_speed >= 1.0);
        assert!(config.ball_speed_increase_rate >= 1.0);
        assert_eq!(config.winning_score, 5);
    }
}
