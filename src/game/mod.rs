pub mod ai;
pub mod geometry;
pub mod pong;

pub use pong::PongGame;

/// A player, and the paddle they control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}
