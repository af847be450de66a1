//! Observers that wire framing requests to cameras.

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::collect::Ancestry;
use crate::collect::SceneGraph;
use crate::events::FrameEntities;
use crate::events::FramePoints;
use crate::events::FramingComplete;
use crate::fit::FramingOutcome;
use crate::fit::zoom_to_points_with_config;
use crate::view::CameraRig;
use crate::zoom::FramingConfig;

type FramedCamera = (
    &'static mut Transform,
    &'static mut Projection,
    Option<&'static Camera>,
    Option<&'static mut PanOrbitCamera>,
);

/// Observer for `FrameEntities` - frames the targets' mesh vertices in the camera view.
/// Targets are walked through their descendants; entities without meshes contribute nothing.
pub fn on_frame_entities(
    frame: On<FrameEntities>,
    mut commands: Commands,
    config: Res<FramingConfig>,
    scene: SceneGraph,
    mut cameras: Query<FramedCamera>,
) {
    let camera_entity = frame.camera_entity;
    let points = scene.collect_points(&frame.targets);
    let parent = scene.parent_transform(camera_entity);

    info!(
        "FrameEntities: camera={camera_entity:?} targets={:?} points={}",
        frame.targets,
        points.len()
    );

    frame_camera(
        camera_entity,
        parent,
        &points,
        &config,
        &mut cameras,
        &mut commands,
    );
}

/// Observer for `FramePoints` - frames world-space points in the camera view.
pub fn on_frame_points(
    frame: On<FramePoints>,
    mut commands: Commands,
    config: Res<FramingConfig>,
    ancestry: Ancestry,
    mut cameras: Query<FramedCamera>,
) {
    let camera_entity = frame.camera_entity;
    let parent = ancestry.parent_transform(camera_entity);

    info!(
        "FramePoints: camera={camera_entity:?} points={}",
        frame.points.len()
    );

    frame_camera(
        camera_entity,
        parent,
        &frame.points,
        &config,
        &mut cameras,
        &mut commands,
    );
}

/// Frames `points` (world space) with the camera, whose `Transform` is relative to `parent`
fn frame_camera(
    camera_entity: Entity,
    parent: GlobalTransform,
    points: &[Vec3],
    config: &FramingConfig,
    cameras: &mut Query<FramedCamera>,
    commands: &mut Commands,
) {
    let Ok((mut transform, mut projection, camera, mut pan_orbit)) =
        cameras.get_mut(camera_entity)
    else {
        warn!("Framing: {camera_entity:?} has no Transform and Projection");
        return;
    };

    let viewport_size = camera.and_then(Camera::logical_viewport_size);
    let Some(mut rig) = CameraRig::new(&mut transform, &mut projection, viewport_size)
        .map(|rig| rig.with_parent(parent))
    else {
        warn!("Framing: {camera_entity:?} uses a custom projection");
        return;
    };
    if let Some(pan_orbit) = pan_orbit.as_deref_mut() {
        rig = rig.with_pan_orbit(pan_orbit, config.snap_pan_orbit);
    }

    let outcome = match zoom_to_points_with_config(points, &mut rig, config) {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!("Framing: failed for {camera_entity:?}: {err}");
            return;
        },
    };

    let (eye, extent) = match outcome {
        FramingOutcome::Empty => {
            warn!("Framing: nothing to frame for {camera_entity:?}");
            return;
        },
        FramingOutcome::Parallel {
            eye, width, height, ..
        } => (eye, Some(Vec2::new(width, height))),
        FramingOutcome::Perspective { eye } => (eye, None),
    };

    info!("Framing: {camera_entity:?} eye={eye:.3?} extent={extent:.3?}");

    commands.trigger(FramingComplete {
        camera_entity,
        eye,
        extent,
    });
}
