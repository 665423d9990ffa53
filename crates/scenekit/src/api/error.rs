use std::fmt;

use crate::api::types::{EntityId, TintSlot};

/// Precondition violations reported by the scene helpers.
#[derive(Debug)]
pub enum KitError {
    /// The entity does not exist in the scene (destroyed, or never spawned).
    MissingEntity(EntityId),
    /// The node has no colour in the requested slot (no renderer / no label).
    MissingTint(TintSlot),
    /// The link would make `child` an ancestor of itself.
    CyclicParent { child: EntityId, parent: EntityId },
    /// Collision layers are numbered 0..32.
    LayerOutOfRange(u32),
    /// A config document could not be parsed.
    Config(serde_json::Error),
}

impl fmt::Display for KitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KitError::MissingEntity(id) => write!(f, "entity {} does not exist", id.0),
            KitError::MissingTint(slot) => write!(f, "node has no {:?} colour", slot),
            KitError::CyclicParent { child, parent } => {
                write!(f, "entity {} cannot be parented under its descendant {}", child.0, parent.0)
            }
            KitError::LayerOutOfRange(layer) => {
                write!(f, "layer {} is outside 0..{}", layer, crate::api::types::LAYER_COUNT)
            }
            KitError::Config(err) => write!(f, "invalid config: {}", err),
        }
    }
}

impl std::error::Error for KitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KitError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for KitError {
    fn from(err: serde_json::Error) -> Self {
        KitError::Config(err)
    }
}
