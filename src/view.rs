//! Host view interface: what framing reads from a camera and what it writes back.

use bevy::camera::ScalingMode;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::error::Result;
use crate::extension::PanOrbitCameraExt;
use crate::frustum::FrustumSides;

/// Projection of a camera pose
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum Lens {
    /// Perspective projection with a vertical field of view in radians
    Perspective { fov_y: f32 },
    /// Parallel projection with the full visible width and height in world units
    Orthographic { width: f32, height: f32 },
}

impl Lens {
    pub const fn is_perspective(&self) -> bool { matches!(self, Self::Perspective { .. }) }
}

/// Snapshot of the camera state framing depends on
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct CameraPose {
    pub eye:                   Vec3,
    pub direction:             Vec3,
    pub up:                    Vec3,
    pub lens:                  Lens,
    /// Replaces the viewport aspect ratio (width / height) when set
    pub aspect_ratio_override: Option<f32>,
}

impl CameraPose {
    pub fn effective_aspect_ratio(&self, viewport_aspect: f32) -> f32 {
        self.aspect_ratio_override.unwrap_or(viewport_aspect)
    }
}

/// A camera that can be framed.
///
/// Framing reads the pose once and writes at most the eye and one orthographic extent. It never
/// touches direction, up or field of view.
pub trait FramingView {
    /// Current camera state
    fn camera(&self) -> CameraPose;

    /// Viewport width / height
    fn viewport_aspect_ratio(&self) -> f32;

    /// Left, right, bottom and top side planes of the current frustum, normals pointing inward.
    fn frustum_planes(&self) -> Result<FrustumSides> {
        FrustumSides::from_pose(&self.camera(), self.viewport_aspect_ratio())
    }

    fn set_eye(&mut self, eye: Vec3);

    /// Sets the full visible height of an orthographic camera; the width follows the aspect ratio
    fn set_ortho_height(&mut self, height: f32);

    /// Sets the full visible width of an orthographic camera; the height follows the aspect ratio
    fn set_ortho_width(&mut self, width: f32);
}

/// Plain in-memory view, for hosts that keep their own camera state
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ViewState {
    pub pose:            CameraPose,
    pub viewport_aspect: f32,
}

impl ViewState {
    pub const fn new(pose: CameraPose, viewport_aspect: f32) -> Self {
        Self {
            pose,
            viewport_aspect,
        }
    }

    fn aspect(&self) -> f32 { self.pose.effective_aspect_ratio(self.viewport_aspect) }
}

impl FramingView for ViewState {
    fn camera(&self) -> CameraPose { self.pose }

    fn viewport_aspect_ratio(&self) -> f32 { self.viewport_aspect }

    fn set_eye(&mut self, eye: Vec3) { self.pose.eye = eye; }

    fn set_ortho_height(&mut self, height: f32) {
        let aspect = self.aspect();
        if let Lens::Orthographic { .. } = self.pose.lens {
            self.pose.lens = Lens::Orthographic {
                width: height * aspect,
                height,
            };
        }
    }

    fn set_ortho_width(&mut self, width: f32) {
        let aspect = self.aspect();
        if let Lens::Orthographic { height, .. } = self.pose.lens {
            let height = if aspect > 0.0 { width / aspect } else { height };
            self.pose.lens = Lens::Orthographic { width, height };
        }
    }
}

/// A Bevy camera borrowed for framing.
///
/// The pose is the camera's `Transform` placed in its parent's frame (identity unless
/// [`CameraRig::with_parent`] is given), and the lens comes from its `Projection`. New eyes are
/// converted back into the parent frame before they are written. When the camera is driven by a
/// `PanOrbitCamera`, eye moves are applied to the controller's focus so the controller does not
/// pull the camera back.
pub struct CameraRig<'a> {
    transform:      &'a mut Transform,
    projection:     &'a mut Projection,
    pan_orbit:      Option<&'a mut PanOrbitCamera>,
    parent:         GlobalTransform,
    viewport_size:  Option<Vec2>,
    snap_pan_orbit: bool,
    lens:           Lens,
}

impl<'a> CameraRig<'a> {
    /// Returns `None` for projections other than perspective and orthographic.
    pub fn new(
        transform: &'a mut Transform,
        projection: &'a mut Projection,
        viewport_size: Option<Vec2>,
    ) -> Option<Self> {
        let lens = match &*projection {
            Projection::Perspective(perspective) => Lens::Perspective {
                fov_y: perspective.fov,
            },
            Projection::Orthographic(ortho) => {
                let aspect = viewport_size
                    .filter(|size| size.y > 0.0)
                    .map(|size| size.x / size.y);
                let extent = ortho_extent(ortho, aspect);
                Lens::Orthographic {
                    width:  extent.x,
                    height: extent.y,
                }
            },
            _ => return None,
        };
        Some(Self {
            transform,
            projection,
            pan_orbit: None,
            parent: GlobalTransform::IDENTITY,
            viewport_size,
            snap_pan_orbit: true,
            lens,
        })
    }

    /// Routes eye moves through `pan_orbit`. With `snap` the controller jumps to the new focus,
    /// otherwise it glides there with its own smoothing.
    pub fn with_pan_orbit(mut self, pan_orbit: &'a mut PanOrbitCamera, snap: bool) -> Self {
        self.pan_orbit = Some(pan_orbit);
        self.snap_pan_orbit = snap;
        self
    }

    /// Places the camera's `Transform` in the frame of `parent` (the composed transform of its
    /// ancestors).
    pub fn with_parent(mut self, parent: GlobalTransform) -> Self {
        self.parent = parent;
        self
    }

    fn set_ortho_extent(&mut self, width: f32, height: f32, scaling_mode: ScalingMode) {
        let Projection::Orthographic(ortho) = &mut *self.projection else {
            return;
        };
        ortho.scaling_mode = scaling_mode;
        let origin = ortho.viewport_origin;
        ortho.area = Rect::new(
            -width * origin.x,
            -height * origin.y,
            width * (1.0 - origin.x),
            height * (1.0 - origin.y),
        );
        self.lens = Lens::Orthographic { width, height };
    }

    /// Scale the projection currently multiplies its scaling mode by
    fn ortho_scale(&self) -> f32 {
        match &*self.projection {
            Projection::Orthographic(ortho) if ortho.scale.abs() > f32::EPSILON => ortho.scale,
            _ => 1.0,
        }
    }
}

/// Visible orthographic extent.
///
/// `area` is only refreshed by Bevy's camera update, so on a camera spawned this frame it still
/// holds the default. Scaling modes that pin the extent (given the viewport aspect, where they
/// need one) are read directly; the rest fall back to `area`.
fn ortho_extent(ortho: &OrthographicProjection, aspect: Option<f32>) -> Vec2 {
    let extent = match (&ortho.scaling_mode, aspect) {
        (ScalingMode::Fixed { width, height }, _) => Vec2::new(*width, *height),
        (ScalingMode::FixedVertical { viewport_height }, Some(aspect)) => {
            Vec2::new(*viewport_height * aspect, *viewport_height)
        },
        (ScalingMode::FixedHorizontal { viewport_width }, Some(aspect)) if aspect > 0.0 => {
            Vec2::new(*viewport_width, *viewport_width / aspect)
        },
        _ => return ortho.area.size(),
    };
    extent * ortho.scale
}

impl FramingView for CameraRig<'_> {
    fn camera(&self) -> CameraPose {
        let world = self.parent.mul_transform(*self.transform);
        let rotation = world.rotation();
        CameraPose {
            eye:                   world.translation(),
            direction:             rotation * Vec3::NEG_Z,
            up:                    rotation * Vec3::Y,
            lens:                  self.lens,
            aspect_ratio_override: None,
        }
    }

    fn viewport_aspect_ratio(&self) -> f32 {
        if let Some(size) = self.viewport_size.filter(|size| size.y > 0.0) {
            return size.x / size.y;
        }
        match &*self.projection {
            Projection::Perspective(perspective) => perspective.aspect_ratio,
            Projection::Orthographic(ortho) => {
                let extent = ortho_extent(ortho, None);
                if extent.y > 0.0 { extent.x / extent.y } else { 1.0 }
            },
            _ => 1.0,
        }
    }

    fn set_eye(&mut self, eye: Vec3) {
        let eye = self.parent.affine().inverse().transform_point3(eye);
        let delta = eye - self.transform.translation;
        match self.pan_orbit.as_deref_mut() {
            Some(pan_orbit) => {
                pan_orbit.shift_focus(delta, self.snap_pan_orbit);
                if self.snap_pan_orbit {
                    self.transform.translation = eye;
                }
            },
            None => self.transform.translation = eye,
        }
    }

    fn set_ortho_height(&mut self, height: f32) {
        let width = height * self.viewport_aspect_ratio();
        let viewport_height = height / self.ortho_scale();
        self.set_ortho_extent(width, height, ScalingMode::FixedVertical { viewport_height });
    }

    fn set_ortho_width(&mut self, width: f32) {
        let aspect = self.viewport_aspect_ratio();
        let height = if aspect > 0.0 { width / aspect } else { 0.0 };
        let viewport_width = width / self.ortho_scale();
        self.set_ortho_extent(width, height, ScalingMode::FixedHorizontal { viewport_width });
    }
}
