use crate::camera::Camera;
use crate::constants::{
    AUTO_ROTATE_BASE, ORBIT_DAMPING, ORBIT_POLE_EPSILON, ORBIT_ROTATE_SPEED,
};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Damped orbit around a fixed target with optional auto-rotation.
///
/// Rotation requests accumulate into spherical deltas; each [`update`](Self::update)
/// applies a `damping` fraction of the pending delta and decays the rest, so
/// motion eases in and out. Zoom and pan are not supported.
#[derive(Clone, Debug)]
pub struct OrbitController {
    radius: f32,
    theta: f32,
    phi: f32,
    delta_theta: f32,
    delta_phi: f32,
    damping: f32,
    rotate_speed: f32,
    auto_rotate: bool,
    auto_rotate_speed: f32,
}

impl OrbitController {
    /// Start from the camera's current pose around its target.
    pub fn from_camera(camera: &Camera) -> Self {
        let offset = camera.eye - camera.target;
        let radius = offset.length();
        let (theta, phi) = if radius == 0.0 {
            (0.0, PI / 2.0)
        } else {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        };
        Self {
            radius,
            theta,
            phi,
            delta_theta: 0.0,
            delta_phi: 0.0,
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            auto_rotate: true,
            auto_rotate_speed: AUTO_ROTATE_BASE,
        }
    }

    #[inline]
    pub fn auto_rotate_speed(&self) -> f32 {
        self.auto_rotate_speed
    }

    pub fn set_auto_rotate_speed(&mut self, speed: f32) {
        self.auto_rotate_speed = speed;
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    #[inline]
    pub fn azimuth(&self) -> f32 {
        self.theta
    }

    #[inline]
    pub fn polar(&self) -> f32 {
        self.phi
    }

    /// Per-frame auto-rotation angle: one full turn per minute at 60 fps and speed 1.
    #[inline]
    pub fn auto_rotation_angle(&self) -> f32 {
        TAU / 60.0 / 60.0 * self.auto_rotate_speed
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta_theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta_phi -= angle;
    }

    /// Orbit in response to a pointer drag of `(dx, dy)` pixels on a viewport `height` pixels tall.
    pub fn drag(&mut self, dx: f32, dy: f32, height: f32) {
        if height <= 0.0 {
            return;
        }
        self.rotate_left(TAU * dx / height * self.rotate_speed);
        self.rotate_up(TAU * dy / height * self.rotate_speed);
    }

    /// Apply pending rotation and move the camera eye accordingly.
    pub fn update(&mut self, camera: &mut Camera) {
        if self.auto_rotate {
            self.rotate_left(self.auto_rotation_angle());
        }
        self.theta += self.delta_theta * self.damping;
        self.phi += self.delta_phi * self.damping;
        self.phi = self.phi.clamp(ORBIT_POLE_EPSILON, PI - ORBIT_POLE_EPSILON);
        self.delta_theta *= 1.0 - self.damping;
        self.delta_phi *= 1.0 - self.damping;

        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let offset = Vec3::new(
            self.radius * sin_phi * sin_theta,
            self.radius * cos_phi,
            self.radius * sin_phi * cos_theta,
        );
        camera.eye = camera.target + offset;
    }
}
