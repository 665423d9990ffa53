use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::extensions::random::Rng;

/// RGBA colour with `f32` channels, nominally in [0, 1].
/// Laid out as four consecutive floats so it can be copied straight into
/// vertex or uniform buffers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const CLEAR: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same colour with a different alpha. The value is stored as given,
    /// without clamping.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// A random colour.
    ///
    /// With `close_to_current`, each channel moves by up to `±jitter` from its
    /// current value and is clamped to [0, 1]; otherwise every channel is drawn
    /// uniformly from [0, 1]. Alpha is only touched when `with_alpha` is set.
    pub fn randomized(self, rng: &mut Rng, with_alpha: bool, close_to_current: bool, jitter: f32) -> Self {
        if close_to_current {
            let mut nudge = |c: f32| (c + rng.range(-jitter, jitter)).clamp(0.0, 1.0);
            let r = nudge(self.r);
            let g = nudge(self.g);
            let b = nudge(self.b);
            let a = if with_alpha { nudge(self.a) } else { self.a };
            Self::new(r, g, b, a)
        } else {
            let r = rng.next_f32();
            let g = rng.next_f32();
            let b = rng.next_f32();
            let a = if with_alpha { rng.next_f32() } else { self.a };
            Self::new(r, g, b, a)
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}
