//! # View Module
//!
//! Camera and screen-space geometry for the target view.
//!
//! - **Camera** ([`camera`]) - orthographic camera, pinch-zoom and pan
//! - **Picking** ([`picking`]) - reserved button regions that block panning

pub mod camera;
pub mod picking;

// Re-export commonly used types
pub use camera::OrthoCamera;
