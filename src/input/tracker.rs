//! Builds per-frame [`InputFrame`] snapshots from a raw touch event stream.
//!
//! Windowing backends report touches as discrete Started / Moved / Ended
//! events. The controller instead wants a polled view: every active touch
//! once per frame with a phase, including touches that simply stayed put, and
//! a tap count for double-tap detection. [`TouchTracker`] bridges the two.

use cgmath::{InnerSpace, Vector2, Zero};
use winit::event::TouchPhase as RawPhase;

use super::touch::{DeviceOrientation, InputFrame, TouchPhase, TouchPoint};
use crate::config::GestureConfig;

/// Touch id used when the mouse stands in for a finger.
pub const MOUSE_TOUCH_ID: u64 = u64::MAX;

#[derive(Debug, Clone, Copy)]
struct TrackedTouch {
    id: u64,
    position: Vector2<f32>,
    origin: Vector2<f32>,
    began_at: f32,
    tap_count: u32,
    frame_delta: Vector2<f32>,
    began: bool,
    moved: bool,
    ended: bool,
}

#[derive(Debug, Clone, Copy)]
struct LastTap {
    position: Vector2<f32>,
    time: f32,
    count: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct TrackerSettings {
    pub double_tap_interval: f32,
    pub double_tap_slop: f32,
    pub pointer_axis_scale: f32,
}

impl From<&GestureConfig> for TrackerSettings {
    fn from(config: &GestureConfig) -> Self {
        Self {
            double_tap_interval: config.double_tap_interval,
            double_tap_slop: config.double_tap_slop,
            pointer_axis_scale: config.pointer_axis_scale,
        }
    }
}

pub struct TouchTracker {
    settings: TrackerSettings,
    viewport_height: f32,
    touches: Vec<TrackedTouch>,
    clock: f32,
    last_tap: Option<LastTap>,
    orientation: DeviceOrientation,
    cancel_pending: bool,
    cursor: Vector2<f32>,
    mouse_down: bool,
}

impl TouchTracker {
    pub fn new(settings: TrackerSettings, viewport_height: f32) -> Self {
        Self {
            settings,
            viewport_height,
            touches: Vec::new(),
            clock: 0.0,
            last_tap: None,
            orientation: DeviceOrientation::Unknown,
            cancel_pending: false,
            cursor: Vector2::zero(),
            mouse_down: false,
        }
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
    }

    pub fn set_orientation(&mut self, orientation: DeviceOrientation) {
        self.orientation = orientation;
    }

    /// Latches the cancel key until the next [`frame`](Self::frame).
    pub fn press_cancel(&mut self) {
        self.cancel_pending = true;
    }

    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    /// Feeds one raw touch event. `x`/`y` are window pixels with a top-left
    /// origin, as windowing backends report them.
    pub fn ingest(&mut self, id: u64, x: f64, y: f64, phase: RawPhase) {
        let position = Vector2::new(x as f32, self.viewport_height - y as f32);

        match phase {
            RawPhase::Started => {
                let tap_count = self.next_tap_count(position);
                // A stale entry can linger if the backend dropped the end event.
                self.touches.retain(|t| t.id != id);
                self.touches.push(TrackedTouch {
                    id,
                    position,
                    origin: position,
                    began_at: self.clock,
                    tap_count,
                    frame_delta: Vector2::zero(),
                    began: true,
                    moved: false,
                    ended: false,
                });
            }
            RawPhase::Moved => {
                if let Some(touch) = self.find_mut(id) {
                    touch.frame_delta += position - touch.position;
                    touch.position = position;
                    touch.moved = true;
                }
            }
            RawPhase::Ended | RawPhase::Cancelled => {
                let clock = self.clock;
                let settings = self.settings;
                let Some(touch) = self.find_mut(id) else {
                    return;
                };
                touch.position = position;
                touch.ended = true;
                let touch = *touch;

                let quick = clock - touch.began_at <= settings.double_tap_interval;
                let still = (touch.position - touch.origin).magnitude() <= settings.double_tap_slop;
                if phase == RawPhase::Ended && quick && still {
                    self.last_tap = Some(LastTap {
                        position: touch.position,
                        time: clock,
                        count: touch.tap_count,
                    });
                }
            }
        }
    }

    /// Mouse button state change for the emulated touch.
    pub fn mouse_button(&mut self, pressed: bool) {
        if pressed == self.mouse_down {
            return;
        }
        self.mouse_down = pressed;

        let phase = if pressed {
            RawPhase::Started
        } else {
            RawPhase::Ended
        };
        let (x, y) = self.cursor_window_coords();
        self.ingest(MOUSE_TOUCH_ID, x, y, phase);
    }

    /// Cursor moved to window pixel `(x, y)`.
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Vector2::new(x as f32, y as f32);
        if self.mouse_down {
            self.ingest(MOUSE_TOUCH_ID, x, y, RawPhase::Moved);
        }
    }

    fn cursor_window_coords(&self) -> (f64, f64) {
        (self.cursor.x as f64, self.cursor.y as f64)
    }

    /// Closes the current frame and returns its snapshot.
    pub fn frame(&mut self, delta_time: f32) -> InputFrame {
        self.clock += delta_time;

        let touches: Vec<TouchPoint> = self
            .touches
            .iter()
            .map(|t| TouchPoint {
                id: t.id,
                screen_position: t.position,
                phase: if t.began {
                    TouchPhase::Began
                } else if t.ended {
                    TouchPhase::Ended
                } else if t.moved {
                    TouchPhase::Moved
                } else {
                    TouchPhase::Stationary
                },
                tap_count: t.tap_count,
            })
            .collect();

        let pointer_delta = self
            .touches
            .first()
            .map(|t| t.frame_delta * self.settings.pointer_axis_scale)
            .unwrap_or_else(Vector2::zero);

        // Touches that began and ended in the same frame report Ended next frame.
        self.touches.retain(|t| !t.ended || t.began);
        for t in &mut self.touches {
            t.began = false;
            t.moved = false;
            t.frame_delta = Vector2::zero();
        }

        let cancel_pressed = std::mem::take(&mut self.cancel_pending);

        InputFrame {
            touches,
            pointer_delta,
            delta_time,
            orientation: self.orientation,
            cancel_pressed,
        }
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut TrackedTouch> {
        self.touches.iter_mut().find(|t| t.id == id)
    }

    fn next_tap_count(&self, position: Vector2<f32>) -> u32 {
        match self.last_tap {
            Some(last)
                if self.clock - last.time <= self.settings.double_tap_interval
                    && (position - last.position).magnitude() <= self.settings.double_tap_slop =>
            {
                last.count + 1
            }
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::AbsDiffEq;

    fn tracker() -> TouchTracker {
        TouchTracker::new(
            TrackerSettings {
                double_tap_interval: 0.3,
                double_tap_slop: 40.0,
                pointer_axis_scale: 0.1,
            },
            800.0,
        )
    }

    #[test]
    fn test_phases_across_frames() {
        let mut t = tracker();

        t.ingest(1, 100.0, 700.0, RawPhase::Started);
        let f = t.frame(0.016);
        assert_eq!(f.touches[0].phase, TouchPhase::Began);
        // y is flipped to a bottom-left origin
        assert_eq!(f.touches[0].screen_position, Vector2::new(100.0, 100.0));

        let f = t.frame(0.016);
        assert_eq!(f.touches[0].phase, TouchPhase::Stationary);

        t.ingest(1, 110.0, 700.0, RawPhase::Moved);
        let f = t.frame(0.016);
        assert_eq!(f.touches[0].phase, TouchPhase::Moved);
        assert!(f.pointer_delta.abs_diff_eq(&Vector2::new(1.0, 0.0), 1e-6));

        t.ingest(1, 110.0, 700.0, RawPhase::Ended);
        let f = t.frame(0.016);
        assert_eq!(f.touches[0].phase, TouchPhase::Ended);

        let f = t.frame(0.016);
        assert!(f.touches.is_empty());
        assert_eq!(t.active_touches(), 0);
    }

    #[test]
    fn test_tap_within_one_frame_reports_began_then_ended() {
        let mut t = tracker();

        t.ingest(3, 50.0, 50.0, RawPhase::Started);
        t.ingest(3, 50.0, 50.0, RawPhase::Ended);

        assert_eq!(t.frame(0.016).touches[0].phase, TouchPhase::Began);
        assert_eq!(t.frame(0.016).touches[0].phase, TouchPhase::Ended);
        assert!(t.frame(0.016).touches.is_empty());
    }

    #[test]
    fn test_double_tap_counts() {
        let mut t = tracker();

        t.ingest(1, 200.0, 200.0, RawPhase::Started);
        assert_eq!(t.frame(0.05).touches[0].tap_count, 1);
        t.ingest(1, 200.0, 200.0, RawPhase::Ended);
        t.frame(0.05);

        t.ingest(2, 205.0, 198.0, RawPhase::Started);
        assert_eq!(t.frame(0.05).touches[0].tap_count, 2);
    }

    #[test]
    fn test_slow_second_tap_is_single() {
        let mut t = tracker();

        t.ingest(1, 200.0, 200.0, RawPhase::Started);
        t.frame(0.05);
        t.ingest(1, 200.0, 200.0, RawPhase::Ended);
        t.frame(0.5);

        t.ingest(2, 200.0, 200.0, RawPhase::Started);
        assert_eq!(t.frame(0.05).touches[0].tap_count, 1);
    }

    #[test]
    fn test_long_hold_is_not_a_tap() {
        let mut t = tracker();

        t.ingest(1, 200.0, 200.0, RawPhase::Started);
        t.frame(1.0);
        t.ingest(1, 200.0, 200.0, RawPhase::Ended);
        t.frame(0.05);

        t.ingest(2, 200.0, 200.0, RawPhase::Started);
        assert_eq!(t.frame(0.05).touches[0].tap_count, 1);
    }

    #[test]
    fn test_mouse_emulates_touch() {
        let mut t = tracker();

        t.cursor_moved(10.0, 790.0);
        t.mouse_button(true);
        let f = t.frame(0.016);
        assert_eq!(f.touches.len(), 1);
        assert_eq!(f.touches[0].id, MOUSE_TOUCH_ID);
        assert_eq!(f.touches[0].screen_position, Vector2::new(10.0, 10.0));

        t.cursor_moved(30.0, 790.0);
        let f = t.frame(0.016);
        assert_eq!(f.touches[0].phase, TouchPhase::Moved);

        t.mouse_button(false);
        assert_eq!(t.frame(0.016).touches[0].phase, TouchPhase::Ended);
    }

    #[test]
    fn test_cancel_is_latched_for_one_frame() {
        let mut t = tracker();
        t.press_cancel();
        assert!(t.frame(0.016).cancel_pressed);
        assert!(!t.frame(0.016).cancel_pressed);
    }
}
