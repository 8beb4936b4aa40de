//! # GroupScope Prelude
//!
//! Commonly used types in one import.
//!
//! ```rust
//! use groupscope::prelude::*;
//!
//! # fn main() -> groupscope::Result<()> {
//! let mut controller = GestureController::new(GestureConfig::default(), SceneHost::new())?;
//! let frame = InputFrame::new(0.016).with_touches(vec![
//!     TouchPoint::new(0, 540.0, 960.0, TouchPhase::Began).with_tap_count(2),
//! ]);
//! assert_eq!(controller.update(&frame), GestureOutcome::ViewReset);
//! # Ok(())
//! # }
//! ```

// Core controller
pub use crate::controller::{GestureController, GestureOutcome};
pub use crate::config::{GestureConfig, Viewport};
pub use crate::schedule::CadenceTimer;

// Camera and regions
pub use crate::gfx::camera::{OrthoCamera, ViewState};
pub use crate::gfx::picking::HitRegion;

// Input
pub use crate::input::{DeviceOrientation, InputFrame, TouchPhase, TouchPoint, TouchTracker};

// Host side
pub use crate::host::{
    AudioSink, ExitSignal, Host, MarkerFactory, MarkerHandle, SceneHost, UiElement, UiSink,
};
pub use crate::markers::{DerivedPoints, MarkerSet};
pub use crate::ui::ShootingMode;

// Re-export common external dependencies
pub use cgmath::{Vector2, Vector3};
