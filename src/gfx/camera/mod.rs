pub mod camera_controller;
pub mod ortho_camera;

// Re-export main types
pub use camera_controller::CameraController;
pub use ortho_camera::{OrthoCamera, ViewState, ZoomLimits};
