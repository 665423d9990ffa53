//! Seedable pseudo-random numbers (xorshift64) and the range helpers built on
//! them. Deterministic for a given seed, so tests can pin exact sequences.

use glam::{Vec2, Vec3};

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound). Always 0 for a zero bound.
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Uniform float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // 24 high bits fit the f32 mantissa exactly.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform float between `min` and `max`. The bounds may be given in
    /// either order.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_f32()
    }
}

/// Random point with x and y drawn from the given ranges and z = 0.
/// A missing `y` range reuses the `x` range.
pub fn random_range_xy(rng: &mut Rng, x: (f32, f32), y: Option<(f32, f32)>) -> Vec3 {
    random_range_xy_2d(rng, x, y).extend(0.0)
}

/// Random point inside an axis-aligned box. Missing `y`/`z` ranges reuse the
/// `x` range.
pub fn random_range_xyz(
    rng: &mut Rng,
    x: (f32, f32),
    y: Option<(f32, f32)>,
    z: Option<(f32, f32)>,
) -> Vec3 {
    let (y_min, y_max) = y.unwrap_or(x);
    let (z_min, z_max) = z.unwrap_or(x);
    Vec3::new(rng.range(x.0, x.1), rng.range(y_min, y_max), rng.range(z_min, z_max))
}

pub fn random_range_xy_2d(rng: &mut Rng, x: (f32, f32), y: Option<(f32, f32)>) -> Vec2 {
    let (y_min, y_max) = y.unwrap_or(x);
    Vec2::new(rng.range(x.0, x.1), rng.range(y_min, y_max))
}
