use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::config::consts::KEY_HOLD_WINDOW;

const KEY_COUNT: usize = 6;

/// The keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Space,
    Enter,
    G,
    F11,
}

impl Key {
    const ALL: [Key; KEY_COUNT] = [Key::Up, Key::Down, Key::Space, Key::Enter, Key::G, Key::F11];

    pub fn from_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Char(' ') => Some(Key::Space),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Char('g') | KeyCode::Char('G') => Some(Key::G),
            KeyCode::F(11) => Some(Key::F11),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeySet(u8);

impl KeySet {
    pub fn insert(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn contains(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

/// Keyboard state for one frame. `pressed` is edge-triggered, `down` is
/// level-triggered.
#[derive(Debug, Clone, Copy, Default)]
pub struct Input {
    pressed: KeySet,
    down: KeySet,
}

impl Input {
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(key)
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down.contains(key)
    }

    #[cfg(test)]
    pub fn with_pressed(mut self, key: Key) -> Self {
        self.pressed.insert(key);
        self.down.insert(key);
        self
    }

    #[cfg(test)]
    pub fn with_down(mut self, key: Key) -> Self {
        self.down.insert(key);
        self
    }
}

/// Accumulates terminal key events between frames.
///
/// Terminals that support keyboard enhancement send release events, so a key
/// stays down until it is released. Otherwise a key counts as down for
/// `KEY_HOLD_WINDOW` after its last press or auto-repeat.
#[derive(Debug, Default)]
pub struct Keyboard {
    pressed: KeySet,
    last_seen: [Option<Instant>; KEY_COUNT],
    reports_releases: bool,
}

impl Keyboard {
    pub fn new(reports_releases: bool) -> Self {
        Self {
            reports_releases,
            ..Self::default()
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(game_key) = Key::from_code(key.code) else { return };
        let slot = &mut self.last_seen[game_key as usize];
        match key.kind {
            KeyEventKind::Press => {
                // Repeats of an already held key are not new presses
                if slot.is_none() || !self.reports_releases {
                    self.pressed.insert(game_key);
                }
                *slot = Some(now);
            }
            KeyEventKind::Repeat => *slot = Some(now),
            KeyEventKind::Release => {
                self.reports_releases = true;
                *slot = None;
            }
        }
    }

    pub fn snapshot(&self, now: Instant) -> Input {
        let mut down = self.pressed;
        for key in Key::ALL {
            let Some(seen) = self.last_seen[key as usize] else { continue };
            if self.reports_releases || now.saturating_duration_since(seen) <= KEY_HOLD_WINDOW {
                down.insert(key);
            }
        }
        Input { pressed: self.pressed, down }
    }

    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use std::time::Duration;

    fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_code(KeyCode::Char(' ')), Some(Key::Space));
        assert_eq!(Key::from_code(KeyCode::Char('G')), Some(Key::G));
        assert_eq!(Key::from_code(KeyCode::F(11)), Some(Key::F11));
        assert_eq!(Key::from_code(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_press_is_edge_triggered() {
        let now = Instant::now();
        let mut keyboard = Keyboard::new(false);
        keyboard.handle_key(event(KeyCode::Enter, KeyEventKind::Press), now);

        assert!(keyboard.snapshot(now).is_pressed(Key::Enter));
        keyboard.end_frame();
        assert!(!keyboard.snapshot(now).is_pressed(Key::Enter));
    }

    #[test]
    fn test_hold_window_without_releases() {
        let now = Instant::now();
        let mut keyboard = Keyboard::new(false);
        keyboard.handle_key(event(KeyCode::Up, KeyEventKind::Press), now);
        keyboard.end_frame();

        assert!(keyboard.snapshot(now + Duration::from_millis(50)).is_down(Key::Up));
        assert!(!keyboard.snapshot(now + KEY_HOLD_WINDOW * 2).is_down(Key::Up));
    }

    #[test]
    fn test_hold_outlasts_auto_repeat_delay() {
        let now = Instant::now();
        let mut keyboard = Keyboard::new(false);
        keyboard.handle_key(event(KeyCode::Down, KeyEventKind::Press), now);
        keyboard.end_frame();

        // Terminals wait 250-600ms before the first repeat arrives
        let before_repeat = now + Duration::from_millis(450);
        assert!(keyboard.snapshot(before_repeat).is_down(Key::Down));

        keyboard.handle_key(event(KeyCode::Down, KeyEventKind::Press), before_repeat);
        keyboard.end_frame();
        assert!(keyboard.snapshot(before_repeat + Duration::from_millis(400)).is_down(Key::Down));
    }

    #[test]
    fn test_down_until_release() {
        let now = Instant::now();
        let mut keyboard = Keyboard::new(true);
        keyboard.handle_key(event(KeyCode::Down, KeyEventKind::Press), now);
        keyboard.end_frame();

        let later = now + Duration::from_secs(2);
        assert!(keyboard.snapshot(later).is_down(Key::Down));
        assert!(!keyboard.snapshot(later).is_pressed(Key::Down));

        keyboard.handle_key(event(KeyCode::Down, KeyEventKind::Release), later);
        assert!(!keyboard.snapshot(later).is_down(Key::Down));
    }

    #[test]
    fn test_release_event_switches_mode() {
        let now = Instant::now();
        let mut keyboard = Keyboard::new(false);
        keyboard.handle_key(event(KeyCode::Up, KeyEventKind::Release), now);
        keyboard.handle_key(event(KeyCode::Up, KeyEventKind::Press), now);
        keyboard.end_frame();

        assert!(keyboard.snapshot(now + Duration::from_secs(1)).is_down(Key::Up));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let now = Instant::now();
        let mut keyboard = Keyboard::new(false);
        keyboard.handle_key(event(KeyCode::Char('z'), KeyEventKind::Press), now);
        let input = keyboard.snapshot(now);
        assert!(Key::ALL.iter().all(|key| !input.is_down(*key)));
    }
}
