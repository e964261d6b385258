//! Roster bootstrap - declarative loading of the initial world vocabulary.
//!
//! A roster lists the entities and verbs a mind starts with. Callers either
//! build the registry and lexicon directly or load them from TOML:
//!
//! ```toml
//! [[entities]]
//! name = "Tim"
//! gender = "male"
//! age = 28
//!
//! [[verbs]]
//! lemma = "see"
//! roles = ["agent", "target"]
//! ```

use serde::Deserialize;

use crate::entities::{Entity, EntityRegistry, Gender};
use crate::error::LexiconError;
use crate::verbs::{VerbLexicon, VerbSpec};

/// Declarative roster of entities and verbs.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RosterConfig {
    #[serde(default)]
    pub entities: Vec<EntityDecl>,

    #[serde(default)]
    pub verbs: Vec<VerbDecl>,
}

/// One entity declaration in the roster.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityDecl {
    pub name: String,
    pub gender: Gender,
    pub age: u32,
}

/// One verb declaration in the roster.
#[derive(Debug, Clone, Deserialize)]
pub struct VerbDecl {
    pub lemma: String,
    pub roles: Vec<String>,
}

impl RosterConfig {
    /// Parse a roster from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, LexiconError> {
        Ok(toml::from_str(text)?)
    }

    /// Build the registry and lexicon described by this roster.
    ///
    /// Entities are registered in declaration order, so their indices
    /// follow the roster.
    pub fn build(&self) -> Result<(EntityRegistry, VerbLexicon), LexiconError> {
        let mut registry = EntityRegistry::new();
        for decl in &self.entities {
            registry.register(Entity::new(&decl.name, decl.gender, decl.age))?;
        }

        let mut lexicon = VerbLexicon::new();
        for decl in &self.verbs {
            lexicon.define(VerbSpec::new(&decl.lemma, decl.roles.clone()))?;
        }

        Ok((registry, lexicon))
    }
}
