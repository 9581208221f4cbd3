use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// pan_up = "KeyW"
/// quit = "Escape"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Pan the camera up (+Y).
    PanUp,
    /// Pan the camera left (-X).
    PanLeft,
    /// Pan the camera down (-Y).
    PanDown,
    /// Pan the camera right (+X).
    PanRight,
    /// Close the window.
    Quit,
}

impl KeyAction {
    /// Unit pan direction for this action, or `None` for non-pan actions.
    #[must_use]
    pub fn pan_vector(self) -> Option<Vec2> {
        match self {
            Self::PanUp => Some(Vec2::Y),
            Self::PanLeft => Some(-Vec2::X),
            Self::PanDown => Some(-Vec2::Y),
            Self::PanRight => Some(Vec2::X),
            Self::Quit => None,
        }
    }
}
