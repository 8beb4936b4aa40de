//! Per-frame input snapshot handed to the gesture controller.

use cgmath::Vector2;

/// Lifecycle of a touch as seen by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Moved,
    /// Still down and did not move this frame.
    Stationary,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    /// Pixels, origin at the bottom-left of the viewport.
    pub screen_position: Vector2<f32>,
    pub phase: TouchPhase,
    /// 1 for a single tap, 2 for the second tap of a double tap, and so on.
    pub tap_count: u32,
}

impl TouchPoint {
    pub fn new(id: u64, x: f32, y: f32, phase: TouchPhase) -> Self {
        Self {
            id,
            screen_position: Vector2::new(x, y),
            phase,
            tap_count: 1,
        }
    }

    pub fn with_tap_count(mut self, tap_count: u32) -> Self {
        self.tap_count = tap_count;
        self
    }
}

/// Physical orientation of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceOrientation {
    #[default]
    Unknown,
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
}

impl DeviceOrientation {
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::LandscapeLeft | Self::LandscapeRight)
    }

    /// Best guess for hosts that only know their window size.
    pub fn from_size(width: u32, height: u32) -> Self {
        if width > height {
            Self::LandscapeLeft
        } else {
            Self::Portrait
        }
    }
}

/// Everything the controller reads in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct InputFrame {
    /// Active touches, ordered by when they began.
    pub touches: Vec<TouchPoint>,
    /// Primary pointer movement this frame, already scaled to axis units.
    pub pointer_delta: Vector2<f32>,
    /// Seconds since the previous frame.
    pub delta_time: f32,
    pub orientation: DeviceOrientation,
    /// The back / cancel key went down this frame.
    pub cancel_pressed: bool,
}

impl InputFrame {
    pub fn new(delta_time: f32) -> Self {
        Self {
            touches: Vec::new(),
            pointer_delta: Vector2::new(0.0, 0.0),
            delta_time,
            orientation: DeviceOrientation::Unknown,
            cancel_pressed: false,
        }
    }

    pub fn with_touches(mut self, touches: Vec<TouchPoint>) -> Self {
        self.touches = touches;
        self
    }

    pub fn with_pointer_delta(mut self, dx: f32, dy: f32) -> Self {
        self.pointer_delta = Vector2::new(dx, dy);
        self
    }

    pub fn with_orientation(mut self, orientation: DeviceOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_cancel(mut self) -> Self {
        self.cancel_pressed = true;
        self
    }

    /// The only touch, if exactly one is down.
    pub fn single(&self) -> Option<&TouchPoint> {
        match self.touches.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// The first two touches, if exactly two are down.
    pub fn pair(&self) -> Option<(&TouchPoint, &TouchPoint)> {
        match self.touches.as_slice() {
            [a, b] => Some((a, b)),
            _ => None,
        }
    }
}
