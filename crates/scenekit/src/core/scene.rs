use crate::api::error::KitError;
use crate::api::traits::SceneTree;
use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Simple entity storage using a flat Vec, plus parent/child links.
/// Designed for small-to-medium entity counts (hundreds, not millions).
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(256),
        }
    }

    /// Add an entity to the scene as a root. Hierarchy links set on the
    /// entity beforehand are discarded.
    pub fn spawn(&mut self, mut entity: Entity) {
        entity.parent = None;
        entity.children.clear();
        self.entities.push(entity);
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// Set the parent of an entity. Pass `None` to make it a root.
    ///
    /// Links that would make `child` its own ancestor are rejected with
    /// `KitError::CyclicParent` and leave the hierarchy unchanged.
    pub fn set_parent(&mut self, child: EntityId, parent: Option<EntityId>) -> Result<(), KitError> {
        if !self.contains(child) {
            return Err(KitError::MissingEntity(child));
        }
        if let Some(p) = parent {
            if !self.contains(p) {
                return Err(KitError::MissingEntity(p));
            }
            if self.is_ancestor_or_self(child, p) {
                return Err(KitError::CyclicParent { child, parent: p });
            }
        }

        // Remove from old parent's children
        if let Some(old_parent) = self.get(child).and_then(|e| e.parent) {
            if let Some(old) = self.get_mut(old_parent) {
                old.children.retain(|&c| c != child);
            }
        }

        if let Some(e) = self.get_mut(child) {
            e.parent = parent;
        }

        if let Some(p) = parent {
            if let Some(parent_entity) = self.get_mut(p) {
                if !parent_entity.children.contains(&child) {
                    parent_entity.children.push(child);
                }
            }
        }
        Ok(())
    }

    fn is_ancestor_or_self(&self, ancestor: EntityId, mut node: EntityId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.get(node).and_then(|e| e.parent) {
                Some(p) => node = p,
                None => return false,
            }
        }
    }

    /// Remove an entity together with all of its descendants and detach it
    /// from its parent. Returns how many entities were removed.
    pub fn destroy(&mut self, id: EntityId) -> Result<usize, KitError> {
        let parent = self.get(id).ok_or(KitError::MissingEntity(id))?.parent;
        if let Some(p) = parent {
            if let Some(parent_entity) = self.get_mut(p) {
                parent_entity.children.retain(|&c| c != id);
            }
        }

        let mut doomed = vec![id];
        let mut i = 0;
        while i < doomed.len() {
            let node = doomed[i];
            doomed.extend_from_slice(self.children(node));
            i += 1;
        }

        self.entities.retain(|e| !doomed.contains(&e.id));
        log::debug!("destroyed entity {} ({} total)", id.0, doomed.len());
        Ok(doomed.len())
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneTree for Scene {
    type Node = EntityId;

    fn tag(&self, node: EntityId) -> Option<&str> {
        self.get(node).map(|e| e.tag.as_str())
    }

    fn children(&self, node: EntityId) -> &[EntityId] {
        self.get(node).map(|e| e.children.as_slice()).unwrap_or(&[])
    }
}
