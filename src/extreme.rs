//! Extreme (supporting) planes of a point set, one per frustum side.

use bevy::prelude::*;

use crate::frustum::FrustumSides;
use crate::plane::Plane;

/// Supporting plane of `points` parallel to `side`.
///
/// The points are expressed in a frame anchored on the side plane whose z axis is the side's
/// outward direction; the point with the largest z is the one furthest outside. The returned
/// plane passes through it with the side's (inward) normal, so every point lies on or inside it.
///
/// Returns `None` for an empty point set. Ties pick any maximizer.
pub fn extreme_plane(points: &[Vec3], side: &Plane) -> Option<Plane> {
    let outward = -side.normal();
    let frame = Transform::from_translation(side.anchor())
        .with_rotation(Quat::from_rotation_arc(Vec3::Z, outward))
        .compute_affine()
        .inverse();

    points
        .iter()
        .map(|point| (frame.transform_point3(*point).z, *point))
        .max_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, extreme)| side.through(extreme))
}

/// Extreme planes for all four sides, in the same order. `None` for an empty point set.
pub fn extreme_planes(points: &[Vec3], sides: &FrustumSides) -> Option<FrustumSides> {
    Some(FrustumSides {
        left:   extreme_plane(points, &sides.left)?,
        right:  extreme_plane(points, &sides.right)?,
        bottom: extreme_plane(points, &sides.bottom)?,
        top:    extreme_plane(points, &sides.top)?,
    })
}
