use std::collections::HashSet;

use glam::Vec2;

use crate::input::KeyAction;

/// Set of currently-held actions, fed by key press/release events.
///
/// winit delivers edge events rather than pollable key state, so held
/// state is tracked here and integrated against frame delta time. OS
/// key-repeat presses are idempotent.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<KeyAction>,
}

impl InputState {
    /// Create an empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press for `action`.
    pub fn press(&mut self, action: KeyAction) {
        let _ = self.held.insert(action);
    }

    /// Record a key release for `action`. Releasing an action that was
    /// never pressed is a no-op.
    pub fn release(&mut self, action: KeyAction) {
        let _ = self.held.remove(&action);
    }

    /// Whether `action` is currently held.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held.contains(&action)
    }

    /// Sum of the pan directions of all held actions. Opposite keys
    /// cancel.
    #[must_use]
    pub fn pan_vector(&self) -> Vec2 {
        self.held
            .iter()
            .filter_map(|action| action.pan_vector())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_pan_keys_accumulate() {
        let mut input = InputState::new();
        input.press(KeyAction::PanUp);
        input.press(KeyAction::PanRight);
        assert_eq!(input.pan_vector(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut input = InputState::new();
        input.press(KeyAction::PanLeft);
        input.press(KeyAction::PanRight);
        assert_eq!(input.pan_vector(), Vec2::ZERO);
    }

    #[test]
    fn key_repeat_is_idempotent() {
        let mut input = InputState::new();
        input.press(KeyAction::PanDown);
        input.press(KeyAction::PanDown);
        assert!(input.is_held(KeyAction::PanDown));
        input.release(KeyAction::PanDown);
        assert!(!input.is_held(KeyAction::PanDown));
        assert_eq!(input.pan_vector(), Vec2::ZERO);
    }

    #[test]
    fn releasing_unpressed_key_is_noop() {
        let mut input = InputState::new();
        input.release(KeyAction::PanUp);
        assert_eq!(input.pan_vector(), Vec2::ZERO);
    }

    #[test]
    fn quit_does_not_pan() {
        let mut input = InputState::new();
        input.press(KeyAction::Quit);
        assert_eq!(input.pan_vector(), Vec2::ZERO);
    }
}
