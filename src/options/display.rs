use serde::{Deserialize, Serialize};

/// Window size, title, and clear color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayOptions {
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Background clear color (linear RGB).
    pub clear_color: [f32; 3],
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Vantage".into(),
            clear_color: [0.0, 0.0, 0.0],
        }
    }
}
