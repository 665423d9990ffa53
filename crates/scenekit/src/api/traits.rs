//! Capability traits the helpers are written against.
//!
//! `Entity` and `Scene` implement all of them, but a host can implement them
//! for its own node types and use the tweens, transform helpers and tag search
//! without going through `Scene` at all.

use glam::Vec3;

use crate::api::types::TintSlot;
use crate::components::color::Color;

/// Read/write access to a node's transform.
pub trait Transformable {
    /// Position in world space.
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    /// Local rotation as euler angles in degrees.
    fn local_euler_angles(&self) -> Vec3;
    fn set_local_euler_angles(&mut self, angles: Vec3);
    /// Scale relative to the parent.
    fn local_scale(&self) -> Vec3;
    fn set_local_scale(&mut self, scale: Vec3);
}

/// Something that carries a colour (a material, a text label).
pub trait Tinted {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn alpha(&self) -> f32 {
        self.color().a
    }

    /// Replace the alpha channel, leaving R, G and B untouched.
    fn set_alpha(&mut self, alpha: f32) {
        let color = self.color().with_alpha(alpha);
        self.set_color(color);
    }
}

/// Everything a tween may write to.
pub trait Animatable: Transformable {
    /// The colour in `slot`, if the node has one.
    fn tint(&self, slot: TintSlot) -> Option<&dyn Tinted>;
    fn tint_mut(&mut self, slot: TintSlot) -> Option<&mut dyn Tinted>;
}

/// A tree of tagged nodes. Must be acyclic.
pub trait SceneTree {
    type Node: Copy;

    /// Tag of `node`, or `None` if the node does not exist.
    fn tag(&self, node: Self::Node) -> Option<&str>;

    /// Direct children of `node` (empty for leaves and unknown nodes).
    fn children(&self, node: Self::Node) -> &[Self::Node];
}
