pub mod animator;
pub mod camera;
pub mod color;
pub mod constants;
pub mod error;
pub mod host;
pub mod interaction;
pub mod noise;
pub mod orbit;
pub mod particles;
pub mod render;
pub mod sphere;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use animator::{canvas_stylesheet, Animator, FrameClock, FrameView};
pub use camera::{Camera, Viewport};
pub use constants::*;
pub use error::ForgeError;
pub use host::{EventKind, FrameHost, HostEvent};
pub use interaction::{PointerState, StretchFactor};
pub use noise::SimplexNoise;
pub use orbit::OrbitController;
pub use particles::{displaced, FieldParams, ParticleField};
pub use render::PointRenderer;
