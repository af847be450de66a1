// bevy_camera_framing
// Auto-framing for Bevy cameras:
// - Closed-form eye placement that makes a frustum tightly enclose a point set
// - Orthographic zoom along the binding dimension
// - Point collection from entity hierarchies and plain scene trees

use bevy::prelude::*;

mod camera_space;
mod collect;
mod error;
mod events;
mod extension;
mod extreme;
mod fit;
mod frustum;
mod observers;
mod plane;
pub mod prelude;
mod view;
mod zoom;

// Public API - Events
pub use events::FrameEntities;
pub use events::FramePoints;
pub use events::FramingComplete;

// Public API - Traits
pub use extension::PanOrbitCameraExt;
pub use view::FramingView;

// Public API - Entry points
pub use fit::zoom_to_entities;
pub use fit::zoom_to_entities_with_config;
pub use fit::zoom_to_points;
pub use fit::zoom_to_points_with_config;

// Public API - Building blocks
pub use camera_space::CameraSpace;
pub use collect::Ancestry;
pub use collect::SceneGraph;
pub use collect::SceneNode;
pub use collect::collect_points;
pub use extreme::extreme_plane;
pub use extreme::extreme_planes;
pub use fit::FramingOutcome;
pub use fit::ParallelFit;
pub use fit::frame_parallel;
pub use fit::frame_perspective;
pub use frustum::Edge;
pub use frustum::FrustumSides;
pub use plane::Line;
pub use plane::Plane;
pub use zoom::ZoomAxis;
pub use zoom::apply_zoom;
pub use zoom::choose_zoom_axis;

// Public API - Views
pub use view::CameraPose;
pub use view::CameraRig;
pub use view::Lens;
pub use view::ViewState;

// Public API - Errors
pub use error::Axis;
pub use error::FramingError;
pub use error::FrustumDefect;
pub use error::Result;

// Public API - Configuration resources
pub use zoom::FramingConfig;

// Internal - used by plugin, not for external use
use observers::on_frame_entities;
use observers::on_frame_points;

/// Plugin that frames cameras on `FrameEntities` and `FramePoints`
pub struct CameraFramingPlugin;

impl Plugin for CameraFramingPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(on_frame_entities)
            .add_observer(on_frame_points)
            .init_resource::<FramingConfig>();
    }
}
