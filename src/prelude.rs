//! Convenient re-exports for common types and traits

pub use crate::CameraFramingPlugin;
pub use crate::events::FrameEntities;
pub use crate::events::FramePoints;
pub use crate::events::FramingComplete;
pub use crate::extension::PanOrbitCameraExt;
pub use crate::fit::FramingOutcome;
pub use crate::fit::zoom_to_entities;
pub use crate::fit::zoom_to_points;
pub use crate::view::CameraPose;
pub use crate::view::CameraRig;
pub use crate::view::FramingView;
pub use crate::view::Lens;
pub use crate::view::ViewState;
pub use crate::zoom::FramingConfig;
