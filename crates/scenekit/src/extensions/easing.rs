// extensions/easing.rs
//
// Pure easing functions for tween interpolation.
// No dependencies on Entity/Scene — just math.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Slow start and end.
    Quad,
    /// Slow end.
    QuadOut,
    /// Bouncy finish.
    Bounce,
}

impl Easing {
    /// Apply the easing function to a normalized time value `t`.
    ///
    /// `t` is not clamped: callers pass `elapsed / duration`, and the tween
    /// drivers snap to the exact end value once `t` reaches 1.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::Quad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let t = t * 2.0;
                    -0.5 * ((t - 2.0).powi(2) - 2.0)
                }
            }
            Easing::QuadOut => -((t - 1.0).powi(2) - 1.0),
            Easing::Bounce => bounce_out(t),
        }
    }
}

#[inline]
fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

/// Half-cosine ease in-out. Not selectable through [`Easing`].
#[inline]
pub fn sine_in_out(t: f32) -> f32 {
    ((t * PI - PI / 2.0).sin() + 1.0) / 2.0
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values. `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}

#[inline]
pub fn ease_vec2(a: Vec2, b: Vec2, t: f32, easing: Easing) -> Vec2 {
    lerp_vec2(a, b, easing.apply(t))
}

#[inline]
pub fn ease_vec3(a: Vec3, b: Vec3, t: f32, easing: Easing) -> Vec3 {
    lerp_vec3(a, b, easing.apply(t))
}
