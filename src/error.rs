//! Error types for framing operations.

use bevy::prelude::*;
use thiserror::Error;

use crate::frustum::Edge;

/// Result type for framing operations
pub type Result<T> = std::result::Result<T, FramingError>;

/// Axis of the camera-local frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum Axis {
    /// Camera right (local x)
    Horizontal,
    /// Camera up (local y)
    Vertical,
}

/// Ways in which a set of frustum side planes can be unusable for framing
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FrustumDefect {
    #[error("{0:?} side plane has a degenerate normal")]
    DegenerateNormal(Edge),
    #[error("camera direction and up vector do not span a plane")]
    DegenerateOrientation,
    #[error("left and right side planes are parallel")]
    ParallelLeftRight,
    #[error("bottom and top side planes are parallel")]
    ParallelBottomTop,
    #[error("opposing extremes are inverted along the {axis:?} axis (extent {extent})")]
    InvertedExtent { axis: Axis, extent: f32 },
}

/// Framing errors
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FramingError {
    /// A plane was constructed from a (near) zero-length normal
    #[error("plane normal {0} is too short to define a plane")]
    DegenerateNormal(Vec3),

    /// The frustum side planes supplied by the view cannot be framed against
    #[error("invalid frustum: {0}")]
    InvalidFrustum(FrustumDefect),
}

impl From<FrustumDefect> for FramingError {
    fn from(defect: FrustumDefect) -> Self { Self::InvalidFrustum(defect) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_frustum_display_includes_defect() {
        let err = FramingError::from(FrustumDefect::ParallelLeftRight);
        let display = err.to_string();
        assert!(display.starts_with("invalid frustum"));
        assert!(display.contains("left and right"));
    }

    #[test]
    fn degenerate_side_names_the_edge() {
        let err = FramingError::InvalidFrustum(FrustumDefect::DegenerateNormal(Edge::Top));
        assert!(err.to_string().contains("Top"));
    }

    #[test]
    fn inverted_extent_reports_axis_and_extent() {
        let defect = FrustumDefect::InvertedExtent {
            axis:   Axis::Vertical,
            extent: -2.0,
        };
        let display = defect.to_string();
        assert!(display.contains("Vertical"));
        assert!(display.contains("-2"));
    }

    #[test]
    fn framing_error_is_std_error() {
        let err = FramingError::DegenerateNormal(Vec3::ZERO);
        let _: &dyn std::error::Error = &err;
    }
}
