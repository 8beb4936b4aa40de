//! # Reserved Region Hit Testing
//!
//! On-screen buttons (menu, undo) sit on top of the target view. A drag whose
//! pan step lands inside one of their regions must not move the camera, so
//! the controller tests each pan step against the reserved regions before
//! applying it.
//!
//! ## Usage
//!
//! ```rust
//! use groupscope::gfx::picking::HitRegion;
//! use cgmath::Vector2;
//!
//! let menu = HitRegion::new([4.0, 8.5], [5.4, 9.9]);
//! assert!(menu.contains(Vector2::new(5.0, 9.0)));
//! ```

use cgmath::Vector2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in the XY plane. Depth is ignored: a reserved
/// region covers every z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitRegion {
    /// Minimum corner
    pub min: [f32; 2],
    /// Maximum corner
    pub max: [f32; 2],
}

impl HitRegion {
    /// Create a new region from two corners
    pub fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    /// Inclusive on all edges
    pub fn contains(&self, point: Vector2<f32>) -> bool {
        point.x >= self.min[0]
            && point.x <= self.max[0]
            && point.y >= self.min[1]
            && point.y <= self.max[1]
    }
}

/// True if `point` lands in any of `regions`.
pub fn hits_any(regions: &[HitRegion], point: Vector2<f32>) -> bool {
    regions.iter().any(|r| r.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_edge_inclusive() {
        let region = HitRegion::new([0.0, 0.0], [2.0, 1.0]);

        assert!(region.contains(Vector2::new(2.0, 1.0)));
        assert!(region.contains(Vector2::new(1.0, 0.5)));
        assert!(!region.contains(Vector2::new(2.01, 0.5)));
        assert!(!region.contains(Vector2::new(1.0, -0.01)));
    }

    #[test]
    fn test_hits_any() {
        let regions = [
            HitRegion::new([0.0, 0.0], [1.0, 1.0]),
            HitRegion::new([5.0, 5.0], [6.0, 6.0]),
        ];

        assert!(hits_any(&regions, Vector2::new(5.5, 5.5)));
        assert!(!hits_any(&regions, Vector2::new(3.0, 3.0)));
        assert!(!hits_any(&[], Vector2::new(0.0, 0.0)));
    }
}
