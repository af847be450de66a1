//! Orthographic zoom selection and framing configuration

use bevy::prelude::*;

use crate::view::FramingView;

/// Configuration for framing behavior
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct FramingConfig {
    /// Opposing perspective side planes whose normals' cross product is shorter than this are
    /// treated as parallel
    pub parallel_tolerance: f32,
    /// Orthographic extents down to `-extent_tolerance` are rounding noise and clamp to zero;
    /// anything more negative means the side planes are inverted
    pub extent_tolerance:   f32,
    /// Snap an orbit controller's focus to the framed position instead of letting it glide
    pub snap_pan_orbit:     bool,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            parallel_tolerance: 1e-6,
            extent_tolerance:   1e-5,
            snap_pan_orbit:     true,
        }
    }
}

/// Which orthographic extent drives the zoom
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum ZoomAxis {
    /// Content height is binding; the visible height is set to it
    Height(f32),
    /// Content width is binding; the visible width is set to it
    Width(f32),
    /// Content has no extent; zoom is left alone
    Unchanged,
}

/// Picks the binding dimension for content of `width` × `height` in a viewport of `aspect`
/// (width / height).
///
/// A viewport relatively wider than the content is height-bound, otherwise width-bound. A zero
/// dimension defers to the other one; when both are zero nothing can be fitted.
pub fn choose_zoom_axis(width: f32, height: f32, aspect: f32) -> ZoomAxis {
    match (width > 0.0, height > 0.0) {
        (false, false) => ZoomAxis::Unchanged,
        (true, false) => ZoomAxis::Width(width),
        (false, true) => ZoomAxis::Height(height),
        (true, true) if aspect > width / height => ZoomAxis::Height(height),
        (true, true) => ZoomAxis::Width(width),
    }
}

/// Sets the orthographic extent of `view` so that `width` × `height` fits exactly along the
/// binding dimension. The viewport aspect ratio is never changed.
pub fn apply_zoom(width: f32, height: f32, view: &mut impl FramingView) -> ZoomAxis {
    let aspect = view
        .camera()
        .effective_aspect_ratio(view.viewport_aspect_ratio());
    let axis = choose_zoom_axis(width, height, aspect);
    match axis {
        ZoomAxis::Height(height) => view.set_ortho_height(height),
        ZoomAxis::Width(width) => view.set_ortho_width(width),
        ZoomAxis::Unchanged => debug!("Zoom unchanged: content has no extent"),
    }
    axis
}
