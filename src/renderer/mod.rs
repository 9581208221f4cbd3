//! Rendering subsystems.
//!
//! One renderer per drawable; the square renderer owns the complete
//! pipeline for the demo's single mesh.

pub mod square;
