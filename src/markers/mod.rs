//! # Markers
//!
//! Placed hit markers in insertion order, plus the derived centroid and
//! mirror points computed from them.

pub mod derived;

pub use derived::DerivedPoints;

use cgmath::{InnerSpace, Vector3};

use crate::host::MarkerHandle;

/// Squared distance under which two marker positions count as the same spot.
const SAME_SPOT_EPSILON_SQ: f32 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub handle: MarkerHandle,
    pub world_position: Vector3<f32>,
}

/// Ordered marker list. The last element is the most recently placed one.
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    markers: Vec<Marker>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vector3<f32>> + '_ {
        self.markers.iter().map(|m| m.world_position)
    }

    /// True if a marker already sits at `position`.
    pub fn occupies(&self, position: Vector3<f32>) -> bool {
        self.markers
            .iter()
            .any(|m| (m.world_position - position).magnitude2() < SAME_SPOT_EPSILON_SQ)
    }

    pub fn push(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Removes the most recently placed marker.
    pub fn pop(&mut self) -> Option<Marker> {
        self.markers.pop()
    }

    /// Empties the set, returning markers newest first.
    pub fn drain_newest_first(&mut self) -> Vec<Marker> {
        let mut drained: Vec<Marker> = self.markers.drain(..).collect();
        drained.reverse();
        drained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(id: u64, x: f32, y: f32) -> Marker {
        Marker {
            handle: MarkerHandle(id),
            world_position: Vector3::new(x, y, 90.0),
        }
    }

    #[test]
    fn test_pop_is_lifo() {
        let mut set = MarkerSet::new();
        set.push(marker(1, 0.0, 0.0));
        set.push(marker(2, 1.0, 0.0));
        set.push(marker(3, 2.0, 0.0));

        assert_eq!(set.pop().map(|m| m.handle), Some(MarkerHandle(3)));
        assert_eq!(set.pop().map(|m| m.handle), Some(MarkerHandle(2)));
        assert_eq!(set.pop().map(|m| m.handle), Some(MarkerHandle(1)));
        assert_eq!(set.pop(), None);
    }

    #[test]
    fn test_occupies() {
        let mut set = MarkerSet::new();
        set.push(marker(1, 1.5, -2.0));

        assert!(set.occupies(Vector3::new(1.5, -2.0, 90.0)));
        assert!(!set.occupies(Vector3::new(1.5, -2.01, 90.0)));
        assert!(!set.occupies(Vector3::new(1.5, -2.0, 80.0)));
    }

    #[test]
    fn test_drain_newest_first() {
        let mut set = MarkerSet::new();
        set.push(marker(1, 0.0, 0.0));
        set.push(marker(2, 1.0, 0.0));

        let drained: Vec<_> = set.drain_newest_first().iter().map(|m| m.handle).collect();
        assert_eq!(drained, vec![MarkerHandle(2), MarkerHandle(1)]);
        assert!(set.is_empty());
    }
}
