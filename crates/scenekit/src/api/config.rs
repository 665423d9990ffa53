use serde::{Deserialize, Serialize};

use crate::api::error::KitError;
use crate::components::color::Color;
use crate::extensions::random::Rng;
use crate::extensions::transform::F32Ext;

/// Tunables shared by the helpers. Every field has a default, so a config
/// document only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    /// Decimal digits compared by `KitConfig::approx_eq` (default: 3).
    pub approx_precision: f32,
    /// Per-channel spread for "close to current" colour randomisation (default: 0.1).
    pub color_jitter: f32,
    /// Seed for random generators built from this config (default: 1).
    pub random_seed: u64,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            approx_precision: 3.0,
            color_jitter: 0.1,
            random_seed: 1,
        }
    }
}

impl KitConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, KitError> {
        Ok(serde_json::from_str(json)?)
    }

    /// A generator seeded from `random_seed`.
    pub fn rng(&self) -> Rng {
        Rng::new(self.random_seed)
    }

    /// `a` and `b` agree to `approx_precision` decimal digits.
    pub fn approx_eq(&self, a: f32, b: f32) -> bool {
        a.approx_eq(b, self.approx_precision)
    }

    /// `Color::randomized` with this config's `color_jitter`.
    pub fn randomized_color(&self, color: Color, rng: &mut Rng, with_alpha: bool, close_to_current: bool) -> Color {
        color.randomized(rng, with_alpha, close_to_current, self.color_jitter)
    }
}
