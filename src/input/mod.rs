//! Input handling: bindable key actions and held-key state.

/// Bindable key actions and their pan directions.
pub mod keyboard;
/// Held-action tracking fed by key press/release events.
pub mod state;

pub use keyboard::KeyAction;
pub use state::InputState;
