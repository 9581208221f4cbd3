//! Small shared utilities.

/// Frame delta-time and smoothed FPS tracking.
pub mod frame_timing;
