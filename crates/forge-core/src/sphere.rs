use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Vertex positions of a UV sphere centered at the origin.
///
/// Rows run from the north pole (`+Y`) to the south pole, each holding
/// `width_segments + 1` vertices (the seam column is duplicated), for a total
/// of `(width_segments + 1) * (height_segments + 1)` positions.
pub fn sphere_vertices(radius: f32, width_segments: u32, height_segments: u32) -> Vec<Vec3> {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut out = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let (sin_theta, cos_theta) = (v * PI).sin_cos();
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let (sin_phi, cos_phi) = (u * TAU).sin_cos();
            out.push(Vec3::new(
                -radius * cos_phi * sin_theta,
                radius * cos_theta,
                radius * sin_phi * sin_theta,
            ));
        }
    }
    out
}
