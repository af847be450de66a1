//! Planes and lines as anchor/direction value types.

use bevy::prelude::*;

use crate::error::FramingError;
use crate::error::Result;

/// Normals shorter than this are rejected by [`Plane::new`]
pub const MIN_NORMAL_LENGTH: f32 = 1e-6;

/// Plane through `anchor` with unit `normal`.
///
/// Contains the points `p` with `(p - anchor) · normal = 0`. The anchor is any point on the
/// plane; for extreme planes it is the input point that touches the plane.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Plane {
    anchor: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Creates a plane, normalizing `normal`.
    ///
    /// Fails with [`FramingError::DegenerateNormal`] when `normal` is not finite or shorter than
    /// [`MIN_NORMAL_LENGTH`].
    pub fn new(anchor: Vec3, normal: Vec3) -> Result<Self> {
        let length = normal.length();
        if !length.is_finite() || length < MIN_NORMAL_LENGTH {
            return Err(FramingError::DegenerateNormal(normal));
        }
        Ok(Self {
            anchor,
            normal: normal / length,
        })
    }

    /// Caller guarantees `normal` is unit length.
    pub(crate) const fn from_unit_normal(anchor: Vec3, normal: Vec3) -> Self {
        Self { anchor, normal }
    }

    pub const fn anchor(&self) -> Vec3 { self.anchor }

    pub const fn normal(&self) -> Vec3 { self.normal }

    /// Same orientation, moved so that it passes through `anchor`
    pub const fn through(&self, anchor: Vec3) -> Self {
        Self {
            anchor,
            normal: self.normal,
        }
    }

    /// Signed distance of `point` from the plane, positive on the side the normal points to
    pub fn signed_distance(&self, point: Vec3) -> f32 { (point - self.anchor).dot(self.normal) }

    /// Offset `h` of the plane equation `normal · p = h`
    pub fn offset(&self) -> f32 { self.normal.dot(self.anchor) }

    /// Line shared by two planes.
    ///
    /// Returns `None` when the normals are parallel within `tolerance` (measured as the length
    /// of their cross product). The returned line point is the point of the line closest to the
    /// origin of the planes' coordinate system.
    pub fn intersect(&self, other: &Self, tolerance: f32) -> Option<Line> {
        let direction = self.normal.cross(other.normal);
        let length_squared = direction.length_squared();
        if length_squared <= tolerance * tolerance {
            return None;
        }

        // Point satisfying n1 · p = h1 and n2 · p = h2 with no component along the line
        let point = (self.offset() * other.normal.cross(direction)
            + other.offset() * direction.cross(self.normal))
            / length_squared;

        Some(Line {
            point,
            direction: direction / length_squared.sqrt(),
        })
    }
}

/// Infinite line through `point` along unit `direction`
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Line {
    pub point:     Vec3,
    pub direction: Vec3,
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn new_normalizes_normal() {
        let plane = Plane::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0)).unwrap();
        assert_relative_eq!(plane.normal().length(), 1.0);
        assert!(plane.normal().abs_diff_eq(Vec3::new(0.0, 0.6, 0.8), 1e-6));
    }

    #[test]
    fn new_rejects_zero_and_non_finite_normals() {
        assert_eq!(
            Plane::new(Vec3::ONE, Vec3::ZERO),
            Err(FramingError::DegenerateNormal(Vec3::ZERO))
        );
        assert!(Plane::new(Vec3::ONE, Vec3::splat(1e-9)).is_err());
        assert!(Plane::new(Vec3::ONE, Vec3::new(f32::NAN, 0.0, 1.0)).is_err());
    }

    #[test]
    fn signed_distance_follows_normal() {
        let plane = Plane::new(Vec3::new(0.0, 0.0, 2.0), Vec3::Z).unwrap();
        assert_relative_eq!(plane.signed_distance(Vec3::new(5.0, -1.0, 3.0)), 1.0);
        assert_relative_eq!(plane.signed_distance(Vec3::new(0.0, 0.0, -1.0)), -3.0);
        assert_relative_eq!(plane.offset(), 2.0);
    }

    #[test]
    fn through_keeps_normal() {
        let plane = Plane::new(Vec3::ZERO, Vec3::X).unwrap();
        let moved = plane.through(Vec3::new(4.0, 1.0, 1.0));
        assert_eq!(moved.normal(), Vec3::X);
        assert_relative_eq!(moved.signed_distance(Vec3::new(4.0, 9.0, -9.0)), 0.0);
    }

    #[test]
    fn intersecting_planes_share_a_line() {
        let a = Plane::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 1.0)).unwrap();
        let b = Plane::new(Vec3::new(-2.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 1.0)).unwrap();

        let line = a.intersect(&b, 1e-6).unwrap();

        assert!(line.direction.cross(Vec3::Y).length() < 1e-6);
        for t in [-3.0, 0.0, 7.5] {
            let p = line.point + line.direction * t;
            assert_relative_eq!(a.signed_distance(p), 0.0, epsilon = 1e-5);
            assert_relative_eq!(b.signed_distance(p), 0.0, epsilon = 1e-5);
        }
        assert!(line.point.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), 1e-5));
    }

    #[test]
    fn parallel_planes_do_not_intersect() {
        let a = Plane::new(Vec3::ZERO, Vec3::X).unwrap();
        let b = Plane::new(Vec3::new(3.0, 0.0, 0.0), -Vec3::X).unwrap();
        assert!(a.intersect(&b, 1e-6).is_none());
    }
}
