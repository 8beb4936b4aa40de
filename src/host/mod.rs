//! # Host Collaborators
//!
//! The controller does not own marker visuals, sound or UI widgets. It talks
//! to the surrounding application through the small traits in this module,
//! bundled as a [`Host`] and injected when the controller is built.
//!
//! ## Implementing a host
//!
//! ```rust
//! use groupscope::host::*;
//! use cgmath::Vector3;
//!
//! #[derive(Default)]
//! struct Quiet { next: u64 }
//!
//! impl MarkerFactory for Quiet {
//!     fn create_marker(&mut self, _position: Vector3<f32>) -> MarkerHandle {
//!         self.next += 1;
//!         MarkerHandle(self.next)
//!     }
//!     fn destroy_marker(&mut self, _handle: MarkerHandle) {}
//! }
//! impl AudioSink for Quiet {
//!     fn play_placement_sound(&mut self) {}
//!     fn play_removal_sound(&mut self) {}
//! }
//! impl UiSink for Quiet {
//!     fn set_visible(&mut self, _element: UiElement, _visible: bool) {}
//! }
//! impl ExitSignal for Quiet {
//!     fn request_exit(&mut self) {}
//! }
//!
//! // `Quiet` is now a `Host`.
//! fn takes_host(_host: impl Host) {}
//! takes_host(Quiet::default());
//! ```

pub mod scene;

pub use scene::SceneHost;

use cgmath::Vector3;

/// Opaque id of a marker visual owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerHandle(pub u64);

/// Creates and destroys marker visuals.
pub trait MarkerFactory {
    fn create_marker(&mut self, position: Vector3<f32>) -> MarkerHandle;
    fn destroy_marker(&mut self, handle: MarkerHandle);

    /// Called whenever the controller moves a display point. Hosts that draw
    /// the centroid and mirror points override this.
    fn move_display_point(&mut self, _element: UiElement, _position: Vector3<f32>) {}
}

pub trait AudioSink {
    fn play_placement_sound(&mut self);
    fn play_removal_sound(&mut self);
}

/// Elements the controller shows and hides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UiElement {
    MenuPanel,
    UndoButton,
    PortraitText,
    LandscapeText,
    /// Centre marker shown only in airgun mode.
    AirgunCenter,
    CentroidPoint,
    MirrorPoint,
}

pub trait UiSink {
    fn set_visible(&mut self, element: UiElement, visible: bool);
}

pub trait ExitSignal {
    fn request_exit(&mut self);
}

/// Everything the controller needs from its surroundings.
pub trait Host: MarkerFactory + AudioSink + UiSink + ExitSignal {}

impl<T> Host for T where T: MarkerFactory + AudioSink + UiSink + ExitSignal {}
