pub mod overlay;

pub use overlay::{OverlayState, ShootingMode};
