//! Gesture tuning with TOML preset support.
//!
//! Every tweakable constant of the controller lives in [`GestureConfig`].
//! All structs use `#[serde(default)]` so a partial TOML file (for example one
//! that only overrides `zoom_speed`) still loads.

use std::path::Path;

use cgmath::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::gfx::picking::HitRegion;

/// Screen size in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 1920.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GestureConfig {
    /// Zoom change per pixel of pinch travel per second.
    pub zoom_speed: f32,
    /// Pan distance per unit of pointer delta. Negative inverts the drag.
    pub pan_speed: f32,
    /// Seconds a single touch must stay still before a marker is placed.
    pub hold_time: f32,
    /// Seconds after a pinch during which single-touch panning is ignored.
    pub post_zoom_cooldown: f32,
    /// Upper zoom bound is `initial_zoom * max_zoom_factor`.
    pub max_zoom_factor: f32,
    /// Lower zoom bound is `initial_zoom / min_zoom_factor`.
    pub min_zoom_factor: f32,
    /// Distance in front of the camera at which markers are placed.
    pub marker_depth: f32,
    /// Seconds between centroid / mirror point recomputations.
    pub derived_interval: f32,
    /// Reference point the centroid is mirrored through.
    pub center: [f32; 3],
    /// Display depth of the centroid point.
    pub centroid_z: f32,
    /// Display depth of the mirror point.
    pub mirror_z: f32,
    /// Maximum gap in seconds between two taps counted as one sequence.
    pub double_tap_interval: f32,
    /// Maximum distance in pixels between two taps counted as one sequence.
    pub double_tap_slop: f32,
    /// Pixels of primary touch travel to pointer delta units.
    pub pointer_axis_scale: f32,
    /// Orthographic half-height the camera starts at and resets to.
    pub initial_zoom: f32,
    pub initial_position: [f32; 3],
    // TOML tables must follow plain values.
    pub menu_region: HitRegion,
    pub undo_region: HitRegion,
    pub viewport: Viewport,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            zoom_speed: 0.01,
            pan_speed: -0.03,
            hold_time: 0.5,
            post_zoom_cooldown: 0.3,
            max_zoom_factor: 1.2,
            min_zoom_factor: 5.6,
            marker_depth: 100.0,
            derived_interval: 0.2,
            center: [0.0, 0.0, 0.0],
            centroid_z: 90.0,
            mirror_z: 90.0,
            double_tap_interval: 0.3,
            double_tap_slop: 40.0,
            pointer_axis_scale: 0.1,
            initial_zoom: 10.0,
            initial_position: [0.0, 0.0, -10.0],
            menu_region: HitRegion::new([4.0, 8.5], [5.4, 9.9]),
            undo_region: HitRegion::new([-5.4, 8.5], [-4.0, 9.9]),
            viewport: Viewport::default(),
        }
    }
}

impl GestureConfig {
    /// Load a config from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::debug!("Loaded gesture config from {}", path.display());
        Ok(config)
    }

    /// Save the config as pretty-printed TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| Error::ConfigWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| Error::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks the values the controller divides by or compares against.
    pub fn validate(&self) -> Result<()> {
        fn positive(field: &'static str, value: f32) -> Result<()> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(Error::InvalidConfig {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                })
            }
        }

        positive("max_zoom_factor", self.max_zoom_factor)?;
        positive("min_zoom_factor", self.min_zoom_factor)?;
        positive("hold_time", self.hold_time)?;
        positive("derived_interval", self.derived_interval)?;
        positive("initial_zoom", self.initial_zoom)?;
        positive("viewport.width", self.viewport.width)?;
        positive("viewport.height", self.viewport.height)?;

        if self.zoom_speed == 0.0 {
            return Err(Error::InvalidConfig {
                field: "zoom_speed",
                reason: "must not be zero".to_string(),
            });
        }
        if self.pan_speed == 0.0 {
            return Err(Error::InvalidConfig {
                field: "pan_speed",
                reason: "must not be zero".to_string(),
            });
        }
        if self.post_zoom_cooldown < 0.0 {
            return Err(Error::InvalidConfig {
                field: "post_zoom_cooldown",
                reason: "must not be negative".to_string(),
            });
        }
        Ok(())
    }

    pub fn center(&self) -> Vector3<f32> {
        self.center.into()
    }

    pub fn initial_position(&self) -> Vector3<f32> {
        self.initial_position.into()
    }
}
