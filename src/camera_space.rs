//! Camera-local coordinate frame: origin at the eye, x right, y up, z along the viewing
//! direction.

use bevy::math::Affine3A;
use bevy::math::Vec3A;
use bevy::prelude::*;

use crate::error::FrustumDefect;
use crate::error::Result;
use crate::plane::Plane;
use crate::view::CameraPose;

/// Lengths below this mark a direction/up pair that does not define an orientation
const MIN_AXIS_LENGTH: f32 = 1e-6;

/// Orthonormal camera frame and its inverse.
///
/// The frame's z axis is the viewing direction, so depth in front of the camera is positive.
/// Combined with x = right and y = up this is a left-handed (but orthonormal) basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSpace {
    to_world: Affine3A,
    to_local: Affine3A,
}

impl CameraSpace {
    /// Builds the frame from already orthonormal axes.
    pub fn new(eye: Vec3, right: Vec3, up: Vec3, forward: Vec3) -> Self {
        let to_world = Affine3A::from_cols(
            Vec3A::from(right),
            Vec3A::from(up),
            Vec3A::from(forward),
            Vec3A::from(eye),
        );
        Self {
            to_world,
            to_local: to_world.inverse(),
        }
    }

    /// Builds the frame for a camera pose. `right = direction × up`, and `up` is
    /// re-orthogonalized against the direction.
    pub fn from_pose(pose: &CameraPose) -> Result<Self> {
        let (right, up, forward) = camera_axes(pose)?;
        Ok(Self::new(pose.eye, right, up, forward))
    }

    pub fn to_local(&self, point: Vec3) -> Vec3 { self.to_local.transform_point3(point) }

    pub fn to_world(&self, point: Vec3) -> Vec3 { self.to_world.transform_point3(point) }

    /// Re-expresses a world-space plane in camera-local coordinates. The normal is rotated,
    /// never translated.
    pub fn plane_to_local(&self, plane: &Plane) -> Plane {
        Plane::from_unit_normal(
            self.to_local.transform_point3(plane.anchor()),
            self.to_local.transform_vector3(plane.normal()),
        )
    }
}

/// Unit `(right, up, forward)` axes of a camera pose
pub(crate) fn camera_axes(pose: &CameraPose) -> Result<(Vec3, Vec3, Vec3)> {
    let forward = pose.direction.normalize_or_zero();
    let right = forward.cross(pose.up);
    if forward == Vec3::ZERO || right.length() < MIN_AXIS_LENGTH {
        return Err(FrustumDefect::DegenerateOrientation.into());
    }
    let right = right.normalize();
    let up = right.cross(forward);
    Ok((right, up, forward))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::view::Lens;

    fn pose(eye: Vec3, direction: Vec3, up: Vec3) -> CameraPose {
        CameraPose {
            eye,
            direction,
            up,
            lens: Lens::Perspective {
                fov_y: std::f32::consts::FRAC_PI_2,
            },
            aspect_ratio_override: None,
        }
    }

    #[test]
    fn looking_down_negative_z_maps_depth_to_positive_z() {
        let space =
            CameraSpace::from_pose(&pose(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, Vec3::Y)).unwrap();

        let local = space.to_local(Vec3::new(1.0, 2.0, 0.0));
        assert!(local.abs_diff_eq(Vec3::new(1.0, 2.0, 10.0), 1e-6));
        assert!(space.to_world(local).abs_diff_eq(Vec3::new(1.0, 2.0, 0.0), 1e-6));
    }

    #[test]
    fn eye_is_local_origin() {
        let eye = Vec3::new(3.0, -4.0, 5.0);
        let space = CameraSpace::from_pose(&pose(eye, Vec3::new(1.0, 1.0, 0.0), Vec3::Z)).unwrap();
        assert!(space.to_local(eye).abs_diff_eq(Vec3::ZERO, 1e-6));
        assert!(space.to_world(Vec3::ZERO).abs_diff_eq(eye, 1e-6));
    }

    #[test]
    fn up_is_reorthogonalized() {
        let tilted_up = Vec3::new(0.0, 1.0, 0.5);
        let (right, up, forward) =
            camera_axes(&pose(Vec3::ZERO, Vec3::NEG_Z, tilted_up)).unwrap();
        assert_relative_eq!(right.dot(up), 0.0, epsilon = 1e-6);
        assert_relative_eq!(up.dot(forward), 0.0, epsilon = 1e-6);
        assert_relative_eq!(up.length(), 1.0, epsilon = 1e-6);
        assert!(right.abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn direction_parallel_to_up_is_rejected() {
        let result = CameraSpace::from_pose(&pose(Vec3::ZERO, Vec3::Y, Vec3::Y));
        assert!(matches!(
            result,
            Err(crate::error::FramingError::InvalidFrustum(
                FrustumDefect::DegenerateOrientation
            ))
        ));
    }

    #[test]
    fn planes_rotate_without_translating_normals() {
        let space =
            CameraSpace::from_pose(&pose(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, Vec3::Y)).unwrap();
        let plane = Plane::new(Vec3::new(0.0, 0.0, 4.0), Vec3::Z).unwrap();

        let local = space.plane_to_local(&plane);

        assert!(local.normal().abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert!(local.anchor().abs_diff_eq(Vec3::new(0.0, 0.0, 6.0), 1e-6));
    }
}
