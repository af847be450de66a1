//! Framing requests and lifecycle events.

use bevy::prelude::*;

// ============================================================================
// Requests
// ============================================================================

/// Event to frame entities (and their descendants) in a camera's view.
/// The camera keeps its orientation and field of view; only its position and, for
/// orthographic cameras, its visible extent change.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct FrameEntities {
    #[event_target]
    pub camera_entity: Entity,
    pub targets:       Vec<Entity>,
}

impl FrameEntities {
    pub const fn new(camera_entity: Entity, targets: Vec<Entity>) -> Self {
        Self {
            camera_entity,
            targets,
        }
    }
}

/// Event to frame world-space points in a camera's view
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct FramePoints {
    #[event_target]
    pub camera_entity: Entity,
    pub points:        Vec<Vec3>,
}

impl FramePoints {
    pub const fn new(camera_entity: Entity, points: Vec<Vec3>) -> Self {
        Self {
            camera_entity,
            points,
        }
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Fired when a framing request moved the camera.
/// `extent` is the framed content's width × height for orthographic cameras.
#[derive(EntityEvent, Reflect)]
#[reflect(Event, FromReflect)]
pub struct FramingComplete {
    #[event_target]
    pub camera_entity: Entity,
    pub eye:           Vec3,
    pub extent:        Option<Vec2>,
}
