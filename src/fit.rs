//! Framing solvers: closed-form eye (and orthographic extent) that makes the current frustum
//! enclose a point set.
//!
//! Both solvers start from the four extreme planes of the point set, one parallel to each
//! frustum side, re-expressed in the camera's local frame:
//! - **Orthographic**: the extremes give the lateral and vertical spans directly; the eye is
//!   centered on them without moving along the viewing direction.
//! - **Perspective**: intersecting left/right and bottom/top extremes gives the two apex lines
//!   where the frustum's wedges touch the set; the eye takes the x of one, the y of the other and
//!   the further-back depth of the two.

use bevy::prelude::*;

use crate::camera_space::CameraSpace;
use crate::collect::SceneNode;
use crate::collect::collect_points;
use crate::error::Axis;
use crate::error::FrustumDefect;
use crate::error::Result;
use crate::extreme::extreme_planes;
use crate::frustum::FrustumSides;
use crate::view::FramingView;
use crate::zoom::FramingConfig;
use crate::zoom::ZoomAxis;
use crate::zoom::apply_zoom;

/// Result of a framing call
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum FramingOutcome {
    /// No points; the view was not touched
    Empty,
    /// Orthographic framing: new eye, content extent and the zoom that was applied
    Parallel {
        eye:    Vec3,
        width:  f32,
        height: f32,
        zoom:   ZoomAxis,
    },
    /// Perspective framing: new eye
    Perspective { eye: Vec3 },
}

impl FramingOutcome {
    pub const fn eye(&self) -> Option<Vec3> {
        match self {
            Self::Empty => None,
            Self::Parallel { eye, .. } | Self::Perspective { eye } => Some(*eye),
        }
    }
}

/// Orthographic solution: eye and content extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelFit {
    pub eye:    Vec3,
    pub width:  f32,
    pub height: f32,
}

/// Solves the orthographic framing from the extreme planes.
///
/// Only the anchors are used. The eye keeps its depth along the viewing direction; spans more
/// negative than `extent_tolerance` mean left/right or bottom/top were swapped by the producer.
pub fn frame_parallel(
    extremes: &FrustumSides,
    space: &CameraSpace,
    extent_tolerance: f32,
) -> Result<ParallelFit> {
    let left = space.to_local(extremes.left.anchor());
    let right = space.to_local(extremes.right.anchor());
    let bottom = space.to_local(extremes.bottom.anchor());
    let top = space.to_local(extremes.top.anchor());

    let width = checked_extent(right.x - left.x, Axis::Horizontal, extent_tolerance)?;
    let height = checked_extent(top.y - bottom.y, Axis::Vertical, extent_tolerance)?;

    let local_eye = Vec3::new((left.x + right.x) * 0.5, (bottom.y + top.y) * 0.5, 0.0);

    Ok(ParallelFit {
        eye: space.to_world(local_eye),
        width,
        height,
    })
}

fn checked_extent(extent: f32, axis: Axis, tolerance: f32) -> Result<f32> {
    if extent < -tolerance {
        return Err(FrustumDefect::InvertedExtent { axis, extent }.into());
    }
    Ok(extent.max(0.0))
}

/// Solves the perspective framing from the extreme planes.
///
/// The left/right intersection fixes the eye's x, the bottom/top intersection its y; the eye sits
/// at the smaller (further back) of the two intersection depths so neither pair of planes ends
/// up behind it.
pub fn frame_perspective(
    extremes: &FrustumSides,
    space: &CameraSpace,
    parallel_tolerance: f32,
) -> Result<Vec3> {
    let local = extremes.map(|_, plane| space.plane_to_local(plane));

    let line_y = local
        .left
        .intersect(&local.right, parallel_tolerance)
        .ok_or(FrustumDefect::ParallelLeftRight)?;
    let line_x = local
        .bottom
        .intersect(&local.top, parallel_tolerance)
        .ok_or(FrustumDefect::ParallelBottomTop)?;

    debug!(
        "Perspective apexes: left/right at x={:.3} z={:.3}, bottom/top at y={:.3} z={:.3}",
        line_y.point.x, line_y.point.z, line_x.point.y, line_x.point.z
    );

    let local_eye = Vec3::new(
        line_y.point.x,
        line_x.point.y,
        line_x.point.z.min(line_y.point.z),
    );
    Ok(space.to_world(local_eye))
}

/// Frames `points` in `view` with the default [`FramingConfig`]
pub fn zoom_to_points(points: &[Vec3], view: &mut impl FramingView) -> Result<FramingOutcome> {
    zoom_to_points_with_config(points, view, &FramingConfig::default())
}

/// Moves the camera of `view` (and zooms it, when orthographic) so its frustum tightly encloses
/// `points`. Direction, up and field of view are left unchanged.
///
/// An empty point set is a no-op.
pub fn zoom_to_points_with_config(
    points: &[Vec3],
    view: &mut impl FramingView,
    config: &FramingConfig,
) -> Result<FramingOutcome> {
    if points.is_empty() {
        debug!("Framing skipped: no points");
        return Ok(FramingOutcome::Empty);
    }

    let pose = view.camera();
    let sides = view.frustum_planes()?;
    let Some(extremes) = extreme_planes(points, &sides) else {
        return Ok(FramingOutcome::Empty);
    };
    let space = CameraSpace::from_pose(&pose)?;

    if pose.lens.is_perspective() {
        sides.validate_opposing(config.parallel_tolerance)?;
        let eye = frame_perspective(&extremes, &space, config.parallel_tolerance)?;
        view.set_eye(eye);
        debug!("Perspective framing of {} points: eye={eye:.3?}", points.len());
        Ok(FramingOutcome::Perspective { eye })
    } else {
        let ParallelFit { eye, width, height } =
            frame_parallel(&extremes, &space, config.extent_tolerance)?;
        view.set_eye(eye);
        let zoom = apply_zoom(width, height, view);
        debug!(
            "Parallel framing of {} points: eye={eye:.3?} width={width:.3} height={height:.3} zoom={zoom:?}",
            points.len()
        );
        Ok(FramingOutcome::Parallel {
            eye,
            width,
            height,
            zoom,
        })
    }
}

/// Frames every point reachable from `nodes` with the default [`FramingConfig`]
pub fn zoom_to_entities<'a>(
    nodes: impl IntoIterator<Item = &'a SceneNode>,
    view: &mut impl FramingView,
) -> Result<FramingOutcome> {
    zoom_to_entities_with_config(nodes, view, &FramingConfig::default())
}

/// Collects the world-space points of `nodes` and frames them
pub fn zoom_to_entities_with_config<'a>(
    nodes: impl IntoIterator<Item = &'a SceneNode>,
    view: &mut impl FramingView,
    config: &FramingConfig,
) -> Result<FramingOutcome> {
    let points = collect_points(nodes, GlobalTransform::IDENTITY);
    zoom_to_points_with_config(&points, view, config)
}
