// src/lib.rs
//! GroupScope
//!
//! Touch-driven shot group viewer: pinch-zoom and pan over a target, long-press
//! to mark hits, and a live group centroid with its correction point.

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod gfx;
pub mod host;
pub mod input;
pub mod markers;
pub mod prelude;
pub mod schedule;
pub mod ui;

// Re-export main types for convenience
pub use app::GroupScopeApp;
pub use controller::{GestureController, GestureOutcome};
pub use error::{Error, Result};

/// Creates a viewer with the default gesture configuration
pub fn default() -> Result<GroupScopeApp> {
    GroupScopeApp::new(config::GestureConfig::default())
}
