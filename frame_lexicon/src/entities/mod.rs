//! Entity definitions for the known world.

mod registry;

pub use registry::*;

use serde::{Deserialize, Serialize};

/// Reserved placeholder naming an unknown entity in external clauses.
///
/// This token stands for "who/what is asked about" at the wire boundary and
/// must never collide with a real entity name; the registry refuses to
/// register it.
pub const UNKNOWN_NAME: &str = "<WHO/WHAT/ETC>";

/// Stable index of an entity within the registry.
///
/// Indices are assigned sequentially at registration time, in registration
/// order, and are never reused or invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityIndex(pub usize);

impl std::fmt::Display for EntityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grammatical gender of an entity.
///
/// Consumed by surface realization (article and pronoun choice); the
/// reasoning core never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

/// A known entity in the world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub gender: Gender,
    pub age: u32,
}

impl Entity {
    /// Create a new entity record.
    pub fn new(name: impl Into<String>, gender: Gender, age: u32) -> Self {
        Self {
            name: name.into(),
            gender,
            age,
        }
    }
}
