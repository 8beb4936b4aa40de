//! # Gesture & Marker Controller
//!
//! [`GestureController`] is the whole interactive core: it reads one
//! [`InputFrame`] per frame, turns it into at most one gesture, and reports
//! what happened as a [`GestureOutcome`].
//!
//! ## Gesture precedence
//!
//! Exactly one branch runs per frame, first match wins:
//!
//! 1. one touch, `Began`, tap count 2: reset the view
//! 2. one touch, `Stationary`: accumulate hold time, place a marker once held
//! 3. one touch, `Moved`, pan cooldown elapsed: pan
//! 4. two touches, either `Began`: start a pinch
//! 5. two touches, either `Moved`: pinch-zoom
//!
//! ## Usage
//!
//! ```rust
//! use groupscope::prelude::*;
//!
//! # fn main() -> groupscope::Result<()> {
//! let mut controller = GestureController::new(GestureConfig::default(), SceneHost::new())?;
//! let mut timer = CadenceTimer::new(controller.config().derived_interval)?;
//!
//! // Once per frame
//! let frame = InputFrame::new(1.0 / 60.0);
//! controller.update(&frame);
//! if timer.advance(frame.delta_time) > 0 {
//!     controller.recompute_derived_points();
//! }
//! # Ok(())
//! # }
//! ```

use cgmath::Vector2;

use crate::config::GestureConfig;
use crate::error::Result;
use crate::gfx::camera::{CameraController, OrthoCamera, ViewState};
use crate::host::{Host, MarkerHandle, UiElement};
use crate::input::{InputFrame, TouchPhase, TouchPoint};
use crate::markers::{DerivedPoints, Marker, MarkerSet};
use crate::ui::{OverlayState, ShootingMode};

/// What a single [`GestureController::update`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No gesture branch matched.
    Idle,
    /// Menu panel is open; gestures are not processed.
    Suspended,
    ViewReset,
    /// Long-press in progress, threshold not reached yet.
    Holding,
    MarkerPlaced(MarkerHandle),
    /// Long-press completed where a marker already sits.
    DuplicateSkipped,
    Panned,
    /// Pan step landed in a reserved button region.
    PanBlocked,
    PinchStarted,
    Zoomed,
    /// Zoom would have left the allowed range.
    ZoomRejected,
}

pub struct GestureController<H: Host> {
    config: GestureConfig,
    camera: OrthoCamera,
    camera_controller: CameraController,
    markers: MarkerSet,
    derived: DerivedPoints,
    overlay: OverlayState,
    hold_accumulator: f32,
    host: H,
}

impl<H: Host> GestureController<H> {
    /// Validates `config` before building anything, so a zero viewport or
    /// zoom factor never reaches the camera.
    pub fn new(config: GestureConfig, mut host: H) -> Result<Self> {
        config.validate()?;

        let camera = OrthoCamera::new(
            config.initial_zoom,
            config.initial_position(),
            config.viewport,
        );
        let camera_controller = CameraController::new(&config);
        let overlay = OverlayState::new(&mut host);
        let derived = DerivedPoints::hidden(config.centroid_z, config.mirror_z);

        host.set_visible(UiElement::CentroidPoint, false);
        host.set_visible(UiElement::MirrorPoint, false);

        Ok(Self {
            config,
            camera,
            camera_controller,
            markers: MarkerSet::new(),
            derived,
            overlay,
            hold_accumulator: 0.0,
            host,
        })
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn camera(&self) -> &OrthoCamera {
        &self.camera
    }

    pub fn view(&self) -> ViewState {
        self.camera.view
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn derived_points(&self) -> &DerivedPoints {
        &self.derived
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn hold_accumulator(&self) -> f32 {
        self.hold_accumulator
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Ignored while either side is zero (minimised window).
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.resize_projection(width, height);
    }

    /// Runs one frame.
    pub fn update(&mut self, frame: &InputFrame) -> GestureOutcome {
        if frame.cancel_pressed {
            self.cancel();
        }

        self.overlay.apply_orientation(frame.orientation, &mut self.host);

        if self.overlay.menu_open() {
            return GestureOutcome::Suspended;
        }

        self.overlay
            .set_undo_visible(!self.markers.is_empty(), &mut self.host);

        let dt = frame.delta_time;
        self.camera_controller.tick(dt);

        let outcome = self.dispatch(frame, dt);

        if frame
            .touches
            .first()
            .is_some_and(|t| t.phase == TouchPhase::Ended)
        {
            self.hold_accumulator = 0.0;
        }

        outcome
    }

    fn dispatch(&mut self, frame: &InputFrame, dt: f32) -> GestureOutcome {
        if let Some(touch) = frame.single() {
            if touch.phase == TouchPhase::Began && touch.tap_count == 2 {
                self.reset_view();
                return GestureOutcome::ViewReset;
            }
            if touch.phase == TouchPhase::Stationary {
                return self.place_marker_on_long_press(touch, dt);
            }
            if touch.phase == TouchPhase::Moved && self.camera_controller.can_pan() {
                return self.pan(frame.pointer_delta);
            }
        }

        if let Some((a, b)) = frame.pair() {
            if a.phase == TouchPhase::Began || b.phase == TouchPhase::Began {
                self.pinch_begin(a, b);
                return GestureOutcome::PinchStarted;
            }
            if a.phase == TouchPhase::Moved || b.phase == TouchPhase::Moved {
                return self.pinch_update(a, b, dt);
            }
        }

        GestureOutcome::Idle
    }

    /// Restores the zoom and position the camera started with.
    pub fn reset_view(&mut self) {
        self.camera_controller.reset_view(&mut self.camera);
        log::info!("View reset");
    }

    /// Accumulates hold time for a stationary touch and places a marker under
    /// it once the hold threshold is reached.
    pub fn place_marker_on_long_press(&mut self, touch: &TouchPoint, dt: f32) -> GestureOutcome {
        self.hold_accumulator += dt;
        if self.hold_accumulator < self.config.hold_time {
            return GestureOutcome::Holding;
        }
        self.hold_accumulator = 0.0;

        let position = self
            .camera
            .screen_to_world(touch.screen_position, self.config.marker_depth);

        // The finger is still down after placing, so the next hold lands here again.
        if self.markers.occupies(position) {
            log::debug!("Marker already at {:?}", position);
            return GestureOutcome::DuplicateSkipped;
        }

        self.host.play_placement_sound();
        let handle = self.host.create_marker(position);
        self.markers.push(Marker {
            handle,
            world_position: position,
        });
        log::info!(
            "Placed marker {:?} at ({:.3}, {:.3}), {} total",
            handle,
            position.x,
            position.y,
            self.markers.len()
        );

        GestureOutcome::MarkerPlaced(handle)
    }

    pub fn pan(&mut self, pointer_delta: Vector2<f32>) -> GestureOutcome {
        if self.camera_controller.pan(&mut self.camera, pointer_delta) {
            GestureOutcome::Panned
        } else {
            GestureOutcome::PanBlocked
        }
    }

    pub fn pinch_begin(&mut self, a: &TouchPoint, b: &TouchPoint) {
        self.camera_controller.pinch_begin(a, b);
    }

    pub fn pinch_update(&mut self, a: &TouchPoint, b: &TouchPoint, dt: f32) -> GestureOutcome {
        if self
            .camera_controller
            .pinch_update(&mut self.camera, a, b, dt)
        {
            GestureOutcome::Zoomed
        } else {
            GestureOutcome::ZoomRejected
        }
    }

    /// Removes the most recently placed marker. Does nothing when there are
    /// no markers.
    pub fn undo_last(&mut self) -> Option<MarkerHandle> {
        let marker = self.markers.pop()?;

        self.host.play_removal_sound();
        self.host.destroy_marker(marker.handle);
        log::info!("Removed marker {:?}, {} left", marker.handle, self.markers.len());

        Some(marker.handle)
    }

    /// Destroys every marker without sound, newest first.
    pub fn clear_markers(&mut self) {
        let removed = self.markers.drain_newest_first();
        for marker in &removed {
            self.host.destroy_marker(marker.handle);
        }
        if !removed.is_empty() {
            log::info!("Cleared {} markers", removed.len());
        }
    }

    /// Updates the centroid and mirror points. Meant to run on a fixed
    /// cadence, see [`CadenceTimer`](crate::schedule::CadenceTimer).
    pub fn recompute_derived_points(&mut self) {
        self.derived
            .recompute(&self.markers, self.config.center());

        if self.derived.visible {
            self.host
                .move_display_point(UiElement::CentroidPoint, self.derived.centroid);
            self.host
                .move_display_point(UiElement::MirrorPoint, self.derived.mirror);
        }
        self.host
            .set_visible(UiElement::CentroidPoint, self.derived.visible);
        self.host
            .set_visible(UiElement::MirrorPoint, self.derived.visible);
    }

    pub fn toggle_menu(&mut self) {
        self.overlay.toggle_menu(&mut self.host);
    }

    pub fn set_archery(&mut self) {
        self.overlay.set_mode(ShootingMode::Archery, &mut self.host);
    }

    pub fn set_airgun(&mut self) {
        self.overlay.set_mode(ShootingMode::Airgun, &mut self.host);
    }

    /// Back / cancel key: closes the menu if open, otherwise asks to exit.
    pub fn cancel(&mut self) {
        if self.overlay.menu_open() {
            self.toggle_menu();
        } else {
            self.host.request_exit();
        }
    }
}
