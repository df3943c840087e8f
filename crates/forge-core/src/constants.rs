// Shared tuning constants for the particle field, used by both web and native frontends.

// Point cloud
pub const PARTICLE_COUNT: usize = 15_000;
pub const SPHERE_RADIUS: f32 = 1.5;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 128; // longitude subdivisions
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 128; // latitude subdivisions
pub const NOISE_SCALE: f32 = 0.5; // noise sampled at vertex * scale
pub const NOISE_AMPLITUDE: f32 = 0.5; // radial displacement amplitude

// Height-to-hue mapping: hue = HUE_BASE - HUE_SPAN * t
pub const HUE_BASE: f32 = 0.8;
pub const HUE_SPAN: f32 = 0.2;
pub const COLOR_SATURATION: f32 = 1.0;
pub const COLOR_LIGHTNESS: f32 = 0.5;

// Animation
pub const TIME_SCALE: f64 = 0.0005; // animation time units per millisecond
pub const BREATH_RATE: f32 = 2.0;
pub const BREATH_AMPLITUDE: f32 = 0.02;
pub const STRETCH_GAIN: f32 = 0.1; // first-order low-pass gain per frame
pub const STRETCH_SPREAD: f32 = 0.5; // jitter scale at full stretch

// Orbit
pub const AUTO_ROTATE_BASE: f32 = 0.3;
pub const AUTO_ROTATE_STRETCH: f32 = 2.0;
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_POLE_EPSILON: f32 = 1e-6;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_DISTANCE: f32 = 4.0;

// Point material
pub const POINT_SIZE: f32 = 0.015;
pub const POINT_OPACITY: f32 = 0.8;
pub const MAX_PIXEL_RATIO: f32 = 2.0;
