//! GPU resource management utilities.
//!
//! Provides the wgpu device/surface initialization shared by the
//! renderer.

/// wgpu device, surface, and queue initialization.
pub mod render_context;
