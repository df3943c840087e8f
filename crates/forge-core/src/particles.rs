//! The particle set: a point cloud sampled from a noise-displaced sphere.
//!
//! Origins, jitter vectors and colors are fixed when the field is generated.
//! Current positions are recomputed from scratch on every [`ParticleField::update`],
//! so the animation can be evaluated at any time without drift.

use crate::color::height_color;
use crate::constants::*;
use crate::noise::SimplexNoise;
use crate::sphere::sphere_vertices;
use glam::Vec3;
use rand::Rng;

/// Parameters controlling how a field is sampled.
///
/// - `count`: number of particles
/// - `radius`: radius of the base sphere
/// - `width_segments` / `height_segments`: base mesh subdivisions
/// - `noise_scale`: spatial frequency of the displacement field
/// - `noise_amplitude`: radial displacement amplitude
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub noise_scale: f32,
    pub noise_amplitude: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            radius: SPHERE_RADIUS,
            width_segments: SPHERE_WIDTH_SEGMENTS,
            height_segments: SPHERE_HEIGHT_SEGMENTS,
            noise_scale: NOISE_SCALE,
            noise_amplitude: NOISE_AMPLITUDE,
        }
    }
}

/// Fixed-size point cloud with per-particle origin, jitter, current position and color.
#[derive(Clone, Debug)]
pub struct ParticleField {
    origins: Vec<Vec3>,
    jitters: Vec<Vec3>,
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
}

impl ParticleField {
    /// Sample a new field. Every call produces a different realization unless
    /// `rng` is seeded.
    pub fn generate<R: Rng>(params: &FieldParams, rng: &mut R) -> Self {
        let base = sphere_vertices(params.radius, params.width_segments, params.height_segments);
        let noise = SimplexNoise::new(rng);
        let mut origins = Vec::with_capacity(params.count);
        let mut jitters = Vec::with_capacity(params.count);
        let mut colors = Vec::with_capacity(params.count);
        for _ in 0..params.count {
            let vertex = base[rng.gen_range(0..base.len())];
            let displacement = noise.sample(vertex * params.noise_scale) * params.noise_amplitude;
            let origin = vertex * (1.0 + displacement);
            origins.push(origin);
            jitters.push(Vec3::new(
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
            ));
            colors.push(height_color(origin.y));
        }
        let positions = origins.clone();
        Self {
            origins,
            jitters,
            positions,
            colors,
        }
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn origins(&self) -> &[Vec3] {
        &self.origins
    }

    pub fn jitters(&self) -> &[Vec3] {
        &self.jitters
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Recompute every current position for animation time `time` and stretch factor `stretch`.
    pub fn update(&mut self, time: f32, stretch: f32) {
        for ((current, origin), jitter) in self
            .positions
            .iter_mut()
            .zip(&self.origins)
            .zip(&self.jitters)
        {
            *current = displaced(*origin, *jitter, time, stretch);
        }
    }
}

/// Position of one particle: breathing radial oscillation plus jitter scaled by the stretch.
#[inline]
pub fn displaced(origin: Vec3, jitter: Vec3, time: f32, stretch: f32) -> Vec3 {
    let breath = (BREATH_RATE * time + origin.y).sin() * BREATH_AMPLITUDE;
    origin * (1.0 + breath) + jitter * (stretch * STRETCH_SPREAD)
}
