//! # Input
//!
//! The controller never polls a global input singleton. Hosts build an
//! [`InputFrame`] each frame, either by hand or through a [`TouchTracker`]
//! fed with raw windowing events, and pass it in explicitly.

pub mod touch;
pub mod tracker;

pub use touch::{DeviceOrientation, InputFrame, TouchPhase, TouchPoint};
pub use tracker::{TouchTracker, TrackerSettings, MOUSE_TOUCH_ID};
