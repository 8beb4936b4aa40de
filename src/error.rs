//! Error types for the fallible edges of the crate.
//!
//! Gesture handling itself never fails: out-of-range zooms, duplicate
//! placements and the like are reported as [`GestureOutcome`] values. Only
//! configuration I/O and the windowed host can produce an [`Error`].
//!
//! [`GestureOutcome`]: crate::controller::GestureOutcome

use std::path::PathBuf;

/// Errors raised while loading configuration or running the viewer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config {}: {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("invalid config value `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("cadence interval must be a positive number, got {0}")]
    InvalidInterval(f32),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

pub type Result<T> = std::result::Result<T, Error>;
