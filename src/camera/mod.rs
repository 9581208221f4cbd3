//! Camera system for 2D scene viewing.
//!
//! Provides a panning camera whose view matrix is the inverse of its
//! translation, plus the GPU-facing controller that owns the uniform
//! buffer and integrates key-driven movement.

/// Pan integration and camera GPU resources.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
