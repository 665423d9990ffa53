/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Number of collision layers a scene supports.
pub const LAYER_COUNT: u32 = 32;

/// Which colour of a node an alpha tween writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TintSlot {
    /// The renderer's material colour.
    #[default]
    Material,
    /// The colour of a text label.
    Text,
}
