//! Extension trait for keeping a `PanOrbitCamera` in step with framing moves.

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

/// Extension trait for `PanOrbitCamera` used when a framed camera is orbit-controlled.
pub trait PanOrbitCameraExt {
    /// Translates the orbit focus by `delta`, leaving yaw, pitch and radius alone, so the
    /// controller's camera position moves by the same `delta`.
    ///
    /// With `snap` the current values are synchronized with the targets so the move is instant;
    /// otherwise the controller interpolates toward the new focus.
    fn shift_focus(&mut self, delta: Vec3, snap: bool);
}

impl PanOrbitCameraExt for PanOrbitCamera {
    fn shift_focus(&mut self, delta: Vec3, snap: bool) {
        self.target_focus += delta;
        if snap {
            // Synchronize current values with targets to prevent interpolation back
            self.focus = self.target_focus;
            self.radius = Some(self.target_radius);
            self.yaw = Some(self.target_yaw);
            self.pitch = Some(self.target_pitch);
        }
        self.force_update = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_focus_snaps_current_values() {
        let mut camera = PanOrbitCamera {
            focus: Vec3::new(1.0, 1.0, 1.0),
            target_focus: Vec3::new(1.0, 1.0, 1.0),
            target_radius: 8.0,
            target_yaw: 0.5,
            target_pitch: -0.25,
            ..default()
        };

        camera.shift_focus(Vec3::new(0.0, 2.0, -1.0), true);

        assert_eq!(camera.target_focus, Vec3::new(1.0, 3.0, 0.0));
        assert_eq!(camera.focus, camera.target_focus);
        assert_eq!(camera.radius, Some(8.0));
        assert_eq!(camera.yaw, Some(0.5));
        assert_eq!(camera.pitch, Some(-0.25));
        assert!(camera.force_update);
    }

    #[test]
    fn shift_focus_without_snap_only_moves_target() {
        let mut camera = PanOrbitCamera::default();
        let focus = camera.focus;

        camera.shift_focus(Vec3::X, false);

        assert_eq!(camera.focus, focus);
        assert_eq!(camera.target_focus, focus + Vec3::X);
        assert!(camera.force_update);
    }
}
