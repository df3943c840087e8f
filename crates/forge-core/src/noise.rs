//! Three-dimensional simplex noise.
//!
//! The 256-entry lookup table holds independent random bytes drawn from the
//! caller's random source (not a shuffled permutation), so every
//! [`SimplexNoise`] is its own realization of the field. Sampling the same
//! instance at the same point always yields the same value.

use glam::Vec3;
use rand::Rng;

const F3: f32 = 1.0 / 3.0;
const G3: f32 = 1.0 / 6.0;

const GRAD3: [[f32; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Smooth pseudo-random scalar field over 3D space, roughly in [-1, 1].
#[derive(Clone)]
pub struct SimplexNoise {
    perm: [u8; 512],
}

impl SimplexNoise {
    /// Build a field whose lookup table is 256 random bytes drawn from `rng`.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut p = [0u8; 256];
        for slot in p.iter_mut() {
            *slot = rng.gen();
        }
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = p[i & 255];
        }
        Self { perm }
    }

    #[inline]
    fn perm(&self, i: usize) -> usize {
        self.perm[i] as usize
    }

    #[inline]
    pub fn sample(&self, p: Vec3) -> f32 {
        self.noise3(p.x, p.y, p.z)
    }

    pub fn noise3(&self, xin: f32, yin: f32, zin: f32) -> f32 {
        // Skew into simplex cell space
        let s = (xin + yin + zin) * F3;
        let i = (xin + s).floor();
        let j = (yin + s).floor();
        let k = (zin + s).floor();
        let t = (i + j + k) * G3;
        let x0 = xin - (i - t);
        let y0 = yin - (j - t);
        let z0 = zin - (k - t);

        // Which of the six tetrahedra we are in
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - i1 as f32 + G3;
        let y1 = y0 - j1 as f32 + G3;
        let z1 = z0 - k1 as f32 + G3;
        let x2 = x0 - i2 as f32 + 2.0 * G3;
        let y2 = y0 - j2 as f32 + 2.0 * G3;
        let z2 = z0 - k2 as f32 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = (i as i32 & 255) as usize;
        let jj = (j as i32 & 255) as usize;
        let kk = (k as i32 & 255) as usize;
        let gi0 = self.perm(ii + self.perm(jj + self.perm(kk))) % 12;
        let gi1 = self.perm(ii + i1 + self.perm(jj + j1 + self.perm(kk + k1))) % 12;
        let gi2 = self.perm(ii + i2 + self.perm(jj + j2 + self.perm(kk + k2))) % 12;
        let gi3 = self.perm(ii + 1 + self.perm(jj + 1 + self.perm(kk + 1))) % 12;

        let n0 = corner(gi0, x0, y0, z0);
        let n1 = corner(gi1, x1, y1, z1);
        let n2 = corner(gi2, x2, y2, z2);
        let n3 = corner(gi3, x3, y3, z3);

        // Scale the result to roughly [-1, 1]
        32.0 * (n0 + n1 + n2 + n3)
    }
}

#[inline]
fn corner(gi: usize, x: f32, y: f32, z: f32) -> f32 {
    let t = 0.6 - x * x - y * y - z * z;
    if t < 0.0 {
        return 0.0;
    }
    let t2 = t * t;
    let g = GRAD3[gi];
    t2 * t2 * (g[0] * x + g[1] * y + g[2] * z)
}
