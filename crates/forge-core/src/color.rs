use crate::constants::{COLOR_LIGHTNESS, COLOR_SATURATION, HUE_BASE, HUE_SPAN, SPHERE_RADIUS};
use glam::Vec3;

/// Convert HSL to RGB. Hue wraps modulo 1; saturation, lightness and the result are clamped to [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return Vec3::splat(l);
    }
    let p = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let q = 2.0 * l - p;
    Vec3::new(
        hue_to_channel(q, p, h + 1.0 / 3.0),
        hue_to_channel(q, p, h),
        hue_to_channel(q, p, h - 1.0 / 3.0),
    )
    // rounding can leave a channel a few ulps outside the unit range
    .clamp(Vec3::ZERO, Vec3::ONE)
}

#[inline]
fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * 6.0 * (2.0 / 3.0 - t);
    }
    p
}

/// Particle color for a given height: violet at the bottom shading to magenta-red at the top.
#[inline]
pub fn height_color(y: f32) -> Vec3 {
    let t = (y + SPHERE_RADIUS) / (2.0 * SPHERE_RADIUS);
    hsl_to_rgb(HUE_BASE - HUE_SPAN * t, COLOR_SATURATION, COLOR_LIGHTNESS)
}
