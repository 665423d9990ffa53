// extensions/mod.rs
//
// The helper set proper. Everything here is written against the traits in
// `api::traits`, so it works on any host node type, not only `Entity`.

pub mod easing;
pub mod random;
pub mod search;
pub mod transform;
pub mod tween;

pub use easing::{Easing, lerp, lerp_vec2, lerp_vec3, ease, ease_vec2, ease_vec3, sine_in_out};
pub use random::{Rng, random_range_xy, random_range_xyz, random_range_xy_2d};
pub use search::{visit_depth_first, find_with_tag, collect_with_tag};
pub use transform::{F32Ext, Vec2Ext, TransformExt};
pub use tween::{Tween, TweenTarget, TweenLoop, TweenStatus, TweenId, TweenState};
