//! Side planes of a camera's view frustum.

use bevy::prelude::*;

use crate::camera_space::camera_axes;
use crate::error::FramingError;
use crate::error::FrustumDefect;
use crate::error::Result;
use crate::plane::Plane;
use crate::view::CameraPose;
use crate::view::Lens;

/// Frustum side identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum Edge {
    Left,
    Right,
    Bottom,
    Top,
}

impl Edge {
    /// All sides, in the order framing consumes them
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Bottom, Self::Top];
}

/// The four side planes of a frustum, normals pointing into the view volume.
///
/// Left/right bound the camera-local x extent and bottom/top the camera-local y extent. The
/// order is fixed; near and far planes play no part in framing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumSides {
    pub left:   Plane,
    pub right:  Plane,
    pub bottom: Plane,
    pub top:    Plane,
}

impl FrustumSides {
    /// Side planes of the frustum a camera pose currently sees.
    ///
    /// `viewport_aspect` is width / height and is replaced by the pose's own override when set.
    /// Perspective sides pass through the eye; orthographic sides sit half the visible extent
    /// away from it.
    pub fn from_pose(pose: &CameraPose, viewport_aspect: f32) -> Result<Self> {
        let (right, up, forward) = camera_axes(pose)?;
        let aspect = pose.effective_aspect_ratio(viewport_aspect);
        let eye = pose.eye;

        let sides = match pose.lens {
            Lens::Perspective { fov_y } => {
                let tan_half_v = (fov_y * 0.5).tan();
                let tan_half_h = tan_half_v * aspect;
                Self {
                    left:   side(Edge::Left, eye, right + forward * tan_half_h)?,
                    right:  side(Edge::Right, eye, -right + forward * tan_half_h)?,
                    bottom: side(Edge::Bottom, eye, up + forward * tan_half_v)?,
                    top:    side(Edge::Top, eye, -up + forward * tan_half_v)?,
                }
            },
            Lens::Orthographic { width, height } => {
                let half_width = width * 0.5;
                let half_height = height * 0.5;
                Self {
                    left:   side(Edge::Left, eye - right * half_width, right)?,
                    right:  side(Edge::Right, eye + right * half_width, -right)?,
                    bottom: side(Edge::Bottom, eye - up * half_height, up)?,
                    top:    side(Edge::Top, eye + up * half_height, -up)?,
                }
            },
        };
        Ok(sides)
    }

    pub const fn get(&self, edge: Edge) -> &Plane {
        match edge {
            Edge::Left => &self.left,
            Edge::Right => &self.right,
            Edge::Bottom => &self.bottom,
            Edge::Top => &self.top,
        }
    }

    /// Applies `f` to every side, keeping the order
    pub fn map(&self, mut f: impl FnMut(Edge, &Plane) -> Plane) -> Self {
        Self {
            left:   f(Edge::Left, &self.left),
            right:  f(Edge::Right, &self.right),
            bottom: f(Edge::Bottom, &self.bottom),
            top:    f(Edge::Top, &self.top),
        }
    }

    /// Fails when left/right or bottom/top are parallel within `tolerance`, which leaves the
    /// perspective apex undefined.
    pub fn validate_opposing(&self, tolerance: f32) -> Result<()> {
        if self.left.intersect(&self.right, tolerance).is_none() {
            return Err(FrustumDefect::ParallelLeftRight.into());
        }
        if self.bottom.intersect(&self.top, tolerance).is_none() {
            return Err(FrustumDefect::ParallelBottomTop.into());
        }
        Ok(())
    }

    /// Whether `point` is on the inner side of all four planes, allowing `tolerance`
    pub fn contains(&self, point: Vec3, tolerance: f32) -> bool {
        Edge::ALL
            .iter()
            .all(|edge| self.get(*edge).signed_distance(point) >= -tolerance)
    }
}

fn side(edge: Edge, anchor: Vec3, normal: Vec3) -> Result<Plane> {
    Plane::new(anchor, normal).map_err(|err| match err {
        FramingError::DegenerateNormal(_) => FrustumDefect::DegenerateNormal(edge).into(),
        other => other,
    })
}
