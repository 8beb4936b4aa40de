use cgmath::*;

use crate::config::Viewport;

/// The mutable part of the camera: what pinch and pan gestures change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Orthographic half-height in world units. Larger shows more.
    pub zoom_level: f32,
    pub position: Vector3<f32>,
}

/// Open interval of zoom levels a pinch may move into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
}

impl ZoomLimits {
    /// Bounds `(orig / min_factor, orig * max_factor)`.
    pub fn around(orig_zoom: f32, min_factor: f32, max_factor: f32) -> Self {
        Self {
            min: orig_zoom / min_factor,
            max: orig_zoom * max_factor,
        }
    }

    /// Strict on both ends: a zoom equal to a bound is rejected.
    pub fn admits(&self, zoom: f32) -> bool {
        zoom > self.min && zoom < self.max
    }
}

/// Orthographic camera looking down +z at the target plane.
#[derive(Debug, Clone, Copy)]
pub struct OrthoCamera {
    pub view: ViewState,
    pub viewport: Viewport,
    original: ViewState,
}

impl OrthoCamera {
    pub fn new(zoom_level: f32, position: Vector3<f32>, viewport: Viewport) -> Self {
        let view = ViewState {
            zoom_level,
            position,
        };
        Self {
            view,
            viewport,
            original: view,
        }
    }

    pub fn zoom_level(&self) -> f32 {
        self.view.zoom_level
    }

    pub fn position(&self) -> Vector3<f32> {
        self.view.position
    }

    /// The view the camera was created with.
    pub fn original(&self) -> ViewState {
        self.original
    }

    pub fn reset_to_default(&mut self) {
        self.view = self.original;
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width as f32, height as f32);
    }

    /// World units covered by one screen pixel at the current zoom.
    pub fn units_per_pixel(&self) -> f32 {
        2.0 * self.view.zoom_level / self.viewport.height
    }

    /// Projects a screen point (pixels, origin bottom-left) onto the plane
    /// `depth` units in front of the camera.
    pub fn screen_to_world(&self, screen: Vector2<f32>, depth: f32) -> Vector3<f32> {
        let scale = self.units_per_pixel();
        let offset = Vector2::new(
            screen.x - self.viewport.width * 0.5,
            screen.y - self.viewport.height * 0.5,
        ) * scale;

        Vector3::new(
            self.view.position.x + offset.x,
            self.view.position.y + offset.y,
            self.view.position.z + depth,
        )
    }

    /// Moves the camera in its own plane.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.view.position.x += dx;
        self.view.position.y += dy;
    }

    /// Zooms by `delta` while shifting the camera so `focal` drifts toward
    /// (zooming in) or away from (zooming out) the screen centre.
    ///
    /// Nothing changes when `zoom + delta` falls outside `limits`; the zoom
    /// is never clamped to the bound. Returns whether the zoom was applied.
    pub fn zoom_towards(&mut self, delta: f32, focal: Vector3<f32>, limits: ZoomLimits) -> bool {
        let candidate = self.view.zoom_level + delta;
        if !limits.admits(candidate) {
            return false;
        }

        let multiplier = delta / self.view.zoom_level;
        let z = self.view.position.z;

        self.view.zoom_level = candidate;
        self.view.position -= (focal - self.view.position) * multiplier;
        self.view.position.z = z;
        true
    }
}
