use crate::api::error::KitError;
use crate::api::types::LAYER_COUNT;

/// Pairwise "ignore collision" flags between the 32 layers.
/// Symmetric: ignoring (a, b) also ignores (b, a).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionMatrix {
    /// Bit `j` of `ignored[i]` is set when layers `i` and `j` ignore each other.
    ignored: [u32; LAYER_COUNT as usize],
}

fn check_layer(layer: u32) -> Result<usize, KitError> {
    if layer < LAYER_COUNT {
        Ok(layer as usize)
    } else {
        Err(KitError::LayerOutOfRange(layer))
    }
}

impl CollisionMatrix {
    /// Every layer collides with every other layer.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_layer_collision(&mut self, a: u32, b: u32, ignore: bool) -> Result<(), KitError> {
        let (ia, ib) = (check_layer(a)?, check_layer(b)?);
        if ignore {
            self.ignored[ia] |= 1 << ib;
            self.ignored[ib] |= 1 << ia;
        } else {
            self.ignored[ia] &= !(1 << ib);
            self.ignored[ib] &= !(1 << ia);
        }
        Ok(())
    }

    pub fn ignores(&self, a: u32, b: u32) -> Result<bool, KitError> {
        let (ia, ib) = (check_layer(a)?, check_layer(b)?);
        Ok(self.ignored[ia] & (1 << ib) != 0)
    }

    /// Bit `i` is set when `layer` collides with layer `i`.
    pub fn collision_mask(&self, layer: u32) -> Result<u32, KitError> {
        let idx = check_layer(layer)?;
        let mut mask = 0u32;
        for other in 0..LAYER_COUNT {
            if self.ignored[idx] & (1 << other) == 0 {
                mask |= 1 << other;
            }
        }
        Ok(mask)
    }

    /// rapier2d interaction groups for a collider on `layer`: member of its own
    /// layer, filtering by the collision mask.
    #[cfg(feature = "physics")]
    pub fn interaction_groups(&self, layer: u32) -> Result<rapier2d::prelude::InteractionGroups, KitError> {
        use rapier2d::prelude::{Group, InteractionGroups};

        let mask = self.collision_mask(layer)?;
        Ok(InteractionGroups::new(
            Group::from_bits_truncate(1 << layer),
            Group::from_bits_truncate(mask),
        ))
    }
}
