//! Camera and viewport types shared by the web and native frontends.
//!
//! These avoid platform APIs; frontends feed them viewport sizes and read
//! back matrices for the renderer.

use crate::constants::{CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, MAX_PIXEL_RATIO};
use glam::{Mat4, Vec3};

/// Size of the drawing area in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Backing-store size in physical pixels; the pixel ratio is capped at 2.
    pub fn physical_size(&self) -> (u32, u32) {
        let ratio = self.pixel_ratio.min(MAX_PIXEL_RATIO);
        (
            (self.width * ratio).max(0.0) as u32,
            (self.height * ratio).max(0.0) as u32,
        )
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera looking at the origin from `+Z`, sized for `viewport`.
    pub fn for_viewport(viewport: &Viewport) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn set_viewport(&mut self, viewport: &Viewport) {
        self.aspect = viewport.aspect();
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
