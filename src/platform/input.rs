//! Keyboard mapping
//!
//! Movement keys are level-triggered: key-down sets a held flag, key-up clears
//! it, and the simulation reads the flags every frame without consuming them.
//! The remaining keys map to one-shot [`Command`]s.

use crate::driver::Command;
use crate::sim::TickInput;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Begin,
    Pause,
    Theme,
}

impl Key {
    /// Map a browser-style `KeyboardEvent.key` name
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            " " => Some(Key::Begin),
            "p" | "P" | "Escape" => Some(Key::Pause),
            "t" | "T" => Some(Key::Theme),
            _ => None,
        }
    }
}

/// Held movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left_held: bool,
    pub right_held: bool,
}

impl InputState {
    /// Record a key press. Returns the command the key triggers, if any.
    pub fn key_down(&mut self, key: Key) -> Option<Command> {
        match key {
            Key::Left => {
                self.left_held = true;
                None
            }
            Key::Right => {
                self.right_held = true;
                None
            }
            Key::Begin => Some(Command::Begin),
            Key::Pause => Some(Command::TogglePause),
            Key::Theme => Some(Command::ToggleTheme),
        }
    }

    /// Record a key release
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = false,
            Key::Right => self.right_held = false,
            _ => {}
        }
    }

    /// Convenience for raw key names; unknown keys are ignored
    pub fn key_down_named(&mut self, name: &str) -> Option<Command> {
        Key::from_key_name(name).and_then(|key| self.key_down(key))
    }

    pub fn key_up_named(&mut self, name: &str) {
        if let Some(key) = Key::from_key_name(name) {
            self.key_up(key);
        }
    }

    /// Forget held keys (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for the next tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left_held,
            right: self.right_held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        for name in ["ArrowLeft", "a", "A"] {
            assert_eq!(Key::from_key_name(name), Some(Key::Left));
        }
        for name in ["ArrowRight", "d", "D"] {
            assert_eq!(Key::from_key_name(name), Some(Key::Right));
        }
        assert_eq!(Key::from_key_name(" "), Some(Key::Begin));
        assert_eq!(Key::from_key_name("Escape"), Some(Key::Pause));
        assert_eq!(Key::from_key_name("x"), None);
    }

    #[test]
    fn test_held_flags_are_level_triggered() {
        let mut input = InputState::default();
        assert_eq!(input.key_down_named("ArrowLeft"), None);
        assert!(input.tick_input().left);
        // Reading does not consume
        assert!(input.tick_input().left);

        input.key_down_named("d");
        assert_eq!(input.tick_input().direction(), 0.0);

        input.key_up_named("a");
        assert_eq!(input.tick_input().direction(), 1.0);
    }

    #[test]
    fn test_commands() {
        let mut input = InputState::default();
        assert_eq!(input.key_down_named(" "), Some(Command::Begin));
        assert_eq!(input.key_down_named("p"), Some(Command::TogglePause));
        assert_eq!(input.key_down_named("T"), Some(Command::ToggleTheme));
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::default();
        input.key_down(Key::Left);
        input.key_down(Key::Right);
        input.release_all();
        assert_eq!(input.tick_input(), TickInput::default());
    }
}
