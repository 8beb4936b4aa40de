use cgmath::{InnerSpace, Vector2};

use super::ortho_camera::{OrthoCamera, ZoomLimits};
use crate::config::GestureConfig;
use crate::gfx::picking::{hits_any, HitRegion};
use crate::input::TouchPoint;

/// Drives an [`OrthoCamera`] from single-finger drags and two-finger pinches.
pub struct CameraController {
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub limits: ZoomLimits,
    reserved: [HitRegion; 2],
    post_zoom_cooldown: f32,
    previous_pinch_distance: f32,
    cooldown_remaining: f32,
}

impl CameraController {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            zoom_speed: config.zoom_speed,
            pan_speed: config.pan_speed,
            limits: ZoomLimits::around(
                config.initial_zoom,
                config.min_zoom_factor,
                config.max_zoom_factor,
            ),
            reserved: [config.menu_region, config.undo_region],
            post_zoom_cooldown: config.post_zoom_cooldown,
            previous_pinch_distance: 0.0,
            cooldown_remaining: 0.0,
        }
    }

    /// Counts down the post-pinch pan suppression.
    pub fn tick(&mut self, delta_time: f32) {
        self.cooldown_remaining -= delta_time;
    }

    /// Panning is suppressed for a short while after every pinch update so
    /// the finger left on screen after a pinch does not drag the view.
    pub fn can_pan(&self) -> bool {
        self.cooldown_remaining <= 0.0
    }

    pub fn previous_pinch_distance(&self) -> f32 {
        self.previous_pinch_distance
    }

    pub fn reset_view(&self, camera: &mut OrthoCamera) {
        camera.reset_to_default();
    }

    /// Moves the camera by the scaled pointer delta unless the pan step lands
    /// in a reserved button region. Returns whether the camera moved.
    pub fn pan(&self, camera: &mut OrthoCamera, pointer_delta: Vector2<f32>) -> bool {
        let step = pointer_delta * self.pan_speed;

        if hits_any(&self.reserved, step) {
            log::debug!("Pan step {:?} hits a reserved region, skipped", step);
            return false;
        }

        camera.translate(step.x, step.y);
        true
    }

    pub fn pinch_begin(&mut self, a: &TouchPoint, b: &TouchPoint) {
        self.previous_pinch_distance = (a.screen_position - b.screen_position).magnitude();
    }

    /// Zooms toward the pinch midpoint by the change in finger separation.
    ///
    /// The stored distance and the pan cooldown are refreshed whether or not
    /// the zoom stays within limits. Returns whether the zoom was applied.
    pub fn pinch_update(
        &mut self,
        camera: &mut OrthoCamera,
        a: &TouchPoint,
        b: &TouchPoint,
        delta_time: f32,
    ) -> bool {
        let distance = (a.screen_position - b.screen_position).magnitude();
        let pinch_amount = (self.previous_pinch_distance - distance) * self.zoom_speed * delta_time;

        let midpoint = (a.screen_position + b.screen_position) / 2.0;
        let focal = camera.screen_to_world(midpoint, 0.0);

        let applied = camera.zoom_towards(pinch_amount, focal, self.limits);
        if !applied {
            log::debug!(
                "Zoom {} + {} outside ({}, {}), rejected",
                camera.zoom_level(),
                pinch_amount,
                self.limits.min,
                self.limits.max
            );
        }

        self.previous_pinch_distance = distance;
        self.cooldown_remaining = self.post_zoom_cooldown;
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Viewport;
    use crate::input::TouchPhase;
    use cgmath::{AbsDiffEq, Vector3};

    fn setup(config: &GestureConfig) -> (OrthoCamera, CameraController) {
        let camera = OrthoCamera::new(
            config.initial_zoom,
            config.initial_position(),
            config.viewport,
        );
        (camera, CameraController::new(config))
    }

    fn touch(id: u64, x: f32, y: f32) -> TouchPoint {
        TouchPoint::new(id, x, y, TouchPhase::Moved)
    }

    #[test]
    fn test_pan_is_inverted_drag() {
        let config = GestureConfig {
            menu_region: HitRegion::new([50.0, 50.0], [60.0, 60.0]),
            undo_region: HitRegion::new([70.0, 70.0], [80.0, 80.0]),
            ..Default::default()
        };
        let (mut camera, controller) = setup(&config);
        let start = camera.position();

        assert!(controller.pan(&mut camera, Vector2::new(10.0, -20.0)));
        let moved = camera.position() - start;
        assert!(moved.abs_diff_eq(&Vector3::new(-0.3, 0.6, 0.0), 1e-6));
    }

    #[test]
    fn test_pan_into_reserved_region_is_skipped() {
        let config = GestureConfig {
            menu_region: HitRegion::new([2.0, 2.0], [4.0, 4.0]),
            ..Default::default()
        };
        let (mut camera, controller) = setup(&config);
        let start = camera.view;

        // Step is (3, 3): inside the menu region
        assert!(!controller.pan(&mut camera, Vector2::new(-100.0, -100.0)));
        assert_eq!(camera.view, start);
    }

    #[test]
    fn test_pinch_sets_cooldown_even_when_rejected() {
        let config = GestureConfig {
            zoom_speed: 1000.0,
            ..Default::default()
        };
        let (mut camera, mut controller) = setup(&config);
        assert!(controller.can_pan());

        controller.pinch_begin(&touch(0, 0.0, 0.0), &touch(1, 100.0, 0.0));
        let applied = controller.pinch_update(
            &mut camera,
            &touch(0, 0.0, 0.0),
            &touch(1, 10.0, 0.0),
            1.0,
        );

        assert!(!applied);
        assert_eq!(camera.zoom_level(), config.initial_zoom);
        assert_eq!(controller.previous_pinch_distance(), 10.0);
        assert!(!controller.can_pan());

        controller.tick(0.2);
        assert!(!controller.can_pan());
        controller.tick(0.15);
        assert!(controller.can_pan());
    }

    #[test]
    fn test_spreading_fingers_zooms_in() {
        let config = GestureConfig {
            viewport: Viewport::new(200.0, 200.0),
            initial_zoom: 100.0,
            initial_position: [0.0, 0.0, -10.0],
            zoom_speed: 0.1,
            ..Default::default()
        };
        let (mut camera, mut controller) = setup(&config);

        controller.pinch_begin(&touch(0, 50.0, 100.0), &touch(1, 150.0, 100.0));
        assert!(controller.pinch_update(
            &mut camera,
            &touch(0, 0.0, 100.0),
            &touch(1, 200.0, 100.0),
            1.0,
        ));

        // (100 - 200) * 0.1 * 1.0
        assert_eq!(camera.zoom_level(), 90.0);
        // Midpoint is the screen centre, so the camera does not shift
        assert_eq!(camera.position(), Vector3::new(0.0, 0.0, -10.0));
    }
}
