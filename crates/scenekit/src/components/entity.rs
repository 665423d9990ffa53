use glam::{EulerRot, Quat, Vec3};

use crate::api::error::KitError;
use crate::api::traits::{Animatable, Tinted, Transformable};
use crate::api::types::{EntityId, TintSlot};
use crate::components::renderer::{Renderer, TextLabel};
use crate::core::collision::CollisionMatrix;

/// Fat Entity — a single struct with optional components.
/// Hierarchy links are owned by the `Scene`; use `Scene::set_parent` to change them.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Collision layer, 0..32.
    pub layer: u8,
    /// Position in world space.
    pub position: Vec3,
    /// Local rotation as euler angles in degrees.
    pub euler_angles: Vec3,
    /// Local scale.
    pub scale: Vec3,
    /// Material colour (optional — entities without a renderer are invisible).
    pub renderer: Option<Renderer>,
    /// Text label (optional).
    pub label: Option<TextLabel>,
    pub(crate) parent: Option<EntityId>,
    pub(crate) children: Vec<EntityId>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            layer: 0,
            position: Vec3::ZERO,
            euler_angles: Vec3::ZERO,
            scale: Vec3::ONE,
            renderer: None,
            label: None,
            parent: None,
            children: Vec::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_layer(mut self, layer: u8) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_euler_angles(mut self, angles: Vec3) -> Self {
        self.euler_angles = angles;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_label(mut self, label: TextLabel) -> Self {
        self.label = Some(label);
        self
    }

    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    pub fn children(&self) -> &[EntityId] {
        &self.children
    }

    /// Local rotation as a quaternion (Z, then X, then Y).
    pub fn rotation_quat(&self) -> Quat {
        let r = self.euler_angles * (std::f32::consts::PI / 180.0);
        Quat::from_euler(EulerRot::YXZ, r.y, r.x, r.z)
    }

    /// Layers this entity may collide with. `layer` defaults to the entity's own.
    pub fn collision_mask(&self, matrix: &CollisionMatrix, layer: Option<u8>) -> Result<u32, KitError> {
        matrix.collision_mask(layer.unwrap_or(self.layer) as u32)
    }
}

impl Transformable for Entity {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn local_euler_angles(&self) -> Vec3 {
        self.euler_angles
    }

    fn set_local_euler_angles(&mut self, angles: Vec3) {
        self.euler_angles = angles;
    }

    fn local_scale(&self) -> Vec3 {
        self.scale
    }

    fn set_local_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }
}

impl Animatable for Entity {
    fn tint(&self, slot: TintSlot) -> Option<&dyn Tinted> {
        match slot {
            TintSlot::Material => self.renderer.as_ref().map(|r| r as &dyn Tinted),
            TintSlot::Text => self.label.as_ref().map(|l| l as &dyn Tinted),
        }
    }

    fn tint_mut(&mut self, slot: TintSlot) -> Option<&mut dyn Tinted> {
        match slot {
            TintSlot::Material => self.renderer.as_mut().map(|r| r as &mut dyn Tinted),
            TintSlot::Text => self.label.as_mut().map(|l| l as &mut dyn Tinted),
        }
    }
}
