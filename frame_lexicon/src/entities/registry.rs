//! The registry mapping entity names to indices and back.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Entity, EntityIndex, UNKNOWN_NAME};
use crate::error::LexiconError;

/// Roster of known entities with a bidirectional name <-> index mapping.
///
/// The registry is populated once during bootstrap and is write-once:
/// entities are never removed or renamed, so issued indices stay valid for
/// the lifetime of the registry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
    name_to_index: HashMap<String, EntityIndex>,
}

impl EntityRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity, assigning the next sequential index.
    pub fn register(&mut self, entity: Entity) -> Result<EntityIndex, LexiconError> {
        if entity.name == UNKNOWN_NAME {
            return Err(LexiconError::ReservedName(entity.name));
        }
        if self.name_to_index.contains_key(&entity.name) {
            return Err(LexiconError::DuplicateName(entity.name));
        }

        let index = EntityIndex(self.entities.len());
        self.name_to_index.insert(entity.name.clone(), index);
        self.entities.push(entity);
        Ok(index)
    }

    /// Look up the index registered for a name.
    ///
    /// `None` means the name refers to nothing we know, which is distinct
    /// from the name being the unknown placeholder.
    pub fn index_of(&self, name: &str) -> Option<EntityIndex> {
        self.name_to_index.get(name).copied()
    }

    /// Resolve an index back to its entity record.
    ///
    /// Returns `None` only for indices this registry never issued.
    pub fn resolve(&self, index: EntityIndex) -> Option<&Entity> {
        self.entities.get(index.0)
    }

    /// Number of registered entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }
}
