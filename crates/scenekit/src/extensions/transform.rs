// extensions/transform.rs
//
// Small extension traits on floats, vectors and anything `Transformable`.

use glam::{Vec2, Vec3};

use crate::api::traits::Transformable;

/// Default number of decimal digits compared by [`F32Ext::approx_eq_default`].
pub const DEFAULT_PRECISION: f32 = 3.0;

pub trait F32Ext {
    /// `|self - other| <= 10^-precision`.
    fn approx_eq(self, other: f32, precision: f32) -> bool;

    fn approx_eq_default(self, other: f32) -> bool;
}

impl F32Ext for f32 {
    #[inline]
    fn approx_eq(self, other: f32, precision: f32) -> bool {
        (self - other).abs() <= 10f32.powf(-precision)
    }

    #[inline]
    fn approx_eq_default(self, other: f32) -> bool {
        self.approx_eq(other, DEFAULT_PRECISION)
    }
}

pub trait Vec2Ext {
    /// Lift into 3D with the given z.
    fn to_vec3(self, z: f32) -> Vec3;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn to_vec3(self, z: f32) -> Vec3 {
        self.extend(z)
    }
}

/// Per-axis setters and reset for any transform.
pub trait TransformExt: Transformable {
    fn set_position_x(&mut self, x: f32) {
        let p = self.position();
        self.set_position(Vec3::new(x, p.y, p.z));
    }

    fn set_position_y(&mut self, y: f32) {
        let p = self.position();
        self.set_position(Vec3::new(p.x, y, p.z));
    }

    fn set_position_z(&mut self, z: f32) {
        let p = self.position();
        self.set_position(Vec3::new(p.x, p.y, z));
    }

    /// Back to the origin with no rotation and unit scale.
    fn reset_transform(&mut self) {
        self.set_position(Vec3::ZERO);
        self.set_local_euler_angles(Vec3::ZERO);
        self.set_local_scale(Vec3::ONE);
    }
}

impl<T: Transformable + ?Sized> TransformExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::entity::Entity;

    #[test]
    fn approx_eq_respects_precision() {
        assert!(1.0f32.approx_eq_default(1.0005));
        assert!(!1.0f32.approx_eq_default(1.01));
        assert!(1.0f32.approx_eq(1.01, 1.0));
        assert!(!1.0f32.approx_eq(1.0002, 5.0));
    }

    #[test]
    fn per_axis_setters_touch_one_axis() {
        let mut e = Entity::new(EntityId(1)).with_position(Vec3::new(1.0, 2.0, 3.0));
        e.set_position_x(9.0);
        assert_eq!(e.position, Vec3::new(9.0, 2.0, 3.0));
        e.set_position_y(8.0);
        e.set_position_z(7.0);
        assert_eq!(e.position, Vec3::new(9.0, 8.0, 7.0));
    }

    #[test]
    fn reset_restores_identity() {
        let mut e = Entity::new(EntityId(1))
            .with_position(Vec3::splat(4.0))
            .with_euler_angles(Vec3::new(10.0, 20.0, 30.0))
            .with_scale(Vec3::splat(0.5));
        e.reset_transform();
        assert_eq!(e.position, Vec3::ZERO);
        assert_eq!(e.euler_angles, Vec3::ZERO);
        assert_eq!(e.scale, Vec3::ONE);
    }

    #[test]
    fn vec2_lift() {
        assert_eq!(Vec2::new(1.0, 2.0).to_vec3(0.0), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(Vec2::ONE.to_vec3(-3.0).z, -3.0);
    }
}
