//! Group centroid and its correction point.
//!
//! The centroid is the mean of all marker positions. The mirror point is the
//! centroid reflected through the aiming centre: if the group sits low-left
//! of the centre, the mirror point sits the same distance up-right, which is
//! where the shooter should aim to move the group onto the centre.

use cgmath::{Vector2, Vector3, Zero};

use super::MarkerSet;

/// The two display points and whether they are shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedPoints {
    pub centroid: Vector3<f32>,
    pub mirror: Vector3<f32>,
    pub visible: bool,
}

impl DerivedPoints {
    /// Hidden points resting at the given display depths.
    pub fn hidden(centroid_z: f32, mirror_z: f32) -> Self {
        Self {
            centroid: Vector3::new(0.0, 0.0, centroid_z),
            mirror: Vector3::new(0.0, 0.0, mirror_z),
            visible: false,
        }
    }

    /// Recomputes from `markers`. The points keep their own z; only x and y
    /// follow the markers. With fewer than two markers the points are hidden
    /// and left where they were.
    pub fn recompute(&mut self, markers: &MarkerSet, center: Vector3<f32>) {
        if markers.len() < 2 {
            self.visible = false;
            return;
        }

        let sum = markers
            .positions()
            .fold(Vector3::zero(), |acc: Vector3<f32>, p| acc + p);
        let avg = sum / markers.len() as f32;

        self.centroid.x = avg.x;
        self.centroid.y = avg.y;

        let mirrored = mirror_through(self.centroid.truncate(), center.truncate());
        self.mirror.x = mirrored.x;
        self.mirror.y = mirrored.y;

        self.visible = true;
    }
}

/// Point reflection of `point` through `center`.
pub fn mirror_through(point: Vector2<f32>, center: Vector2<f32>) -> Vector2<f32> {
    center * 2.0 - point
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MarkerHandle;
    use crate::markers::Marker;

    fn set_of(points: &[(f32, f32)]) -> MarkerSet {
        let mut set = MarkerSet::new();
        for (i, (x, y)) in points.iter().enumerate() {
            set.push(Marker {
                handle: MarkerHandle(i as u64),
                world_position: Vector3::new(*x, *y, 90.0),
            });
        }
        set
    }

    #[test]
    fn test_two_markers_scenario() {
        let mut points = DerivedPoints::hidden(5.0, 6.0);
        points.recompute(&set_of(&[(0.0, 0.0), (2.0, 0.0)]), Vector3::new(1.0, 1.0, 0.0));

        assert!(points.visible);
        assert_eq!(points.centroid, Vector3::new(1.0, 0.0, 5.0));
        assert_eq!(points.mirror, Vector3::new(1.0, 2.0, 6.0));
    }

    #[test]
    fn test_hidden_below_two_markers() {
        let mut points = DerivedPoints::hidden(5.0, 5.0);
        points.recompute(&set_of(&[(0.0, 0.0), (2.0, 0.0)]), Vector3::zero());
        assert!(points.visible);

        points.recompute(&set_of(&[(4.0, 4.0)]), Vector3::zero());
        assert!(!points.visible);
        // Position is left untouched while hidden
        assert_eq!(points.centroid, Vector3::new(1.0, 0.0, 5.0));

        points.recompute(&MarkerSet::new(), Vector3::zero());
        assert!(!points.visible);
    }

    #[test]
    fn test_centroid_is_mean() {
        let mut points = DerivedPoints::hidden(0.0, 0.0);
        points.recompute(
            &set_of(&[(1.0, 1.0), (3.0, 5.0), (-1.0, 0.0), (1.0, -2.0)]),
            Vector3::new(0.5, 0.5, 0.0),
        );

        assert_eq!(points.centroid, Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(points.mirror, Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_mirror_through() {
        assert_eq!(
            mirror_through(Vector2::new(3.0, -1.0), Vector2::new(1.0, 1.0)),
            Vector2::new(-1.0, 3.0)
        );
    }
}
