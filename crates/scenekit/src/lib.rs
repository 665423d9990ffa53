pub mod api;
pub mod core;
pub mod components;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::KitConfig;
pub use api::error::KitError;
pub use api::traits::{Animatable, SceneTree, Tinted, Transformable};
pub use api::types::{EntityId, TintSlot, LAYER_COUNT};
pub use components::color::Color;
pub use components::entity::Entity;
pub use components::renderer::{Renderer, TextLabel};
pub use crate::core::collision::CollisionMatrix;
pub use crate::core::scene::Scene;
pub use crate::core::time::FrameClock;

pub use extensions::{
    Easing, lerp, lerp_vec2, lerp_vec3, ease, ease_vec2, ease_vec3, sine_in_out,
    Rng, random_range_xy, random_range_xyz, random_range_xy_2d,
    visit_depth_first, find_with_tag, collect_with_tag,
    F32Ext, Vec2Ext, TransformExt,
    Tween, TweenTarget, TweenLoop, TweenStatus, TweenId, TweenState,
};
