//! The mind facade - owns every component and exposes `receive`.

use frame_lexicon::{EntityRegistry, RosterConfig, VerbLexicon};

use crate::clause::{ClauseConverter, ExternalClause, UnknownNamePolicy};
use crate::error::MindError;
use crate::fact_store::FactStore;
use crate::reasoner::Reasoner;

/// A mind: entity roster, verb lexicon, fact memory, and the reasoner.
///
/// [`Mind::receive`] is synchronous and call-and-return. A mind is not
/// re-entrant: callers sharing one instance across threads must serialize
/// calls themselves (single writer).
#[derive(Debug)]
pub struct Mind {
    registry: EntityRegistry,
    lexicon: VerbLexicon,
    converter: ClauseConverter,
    facts: FactStore,
    reasoner: Reasoner,
}

impl Mind {
    /// Create a mind over a caller-supplied registry and lexicon.
    pub fn new(registry: EntityRegistry, lexicon: VerbLexicon) -> Self {
        Self::with_policy(registry, lexicon, UnknownNamePolicy::default())
    }

    /// Create a mind with an explicit unknown-name policy.
    pub fn with_policy(
        registry: EntityRegistry,
        lexicon: VerbLexicon,
        policy: UnknownNamePolicy,
    ) -> Self {
        Self {
            registry,
            lexicon,
            converter: ClauseConverter::new(policy),
            facts: FactStore::new(),
            reasoner: Reasoner::with_defaults(),
        }
    }

    /// Create a mind from a declarative roster.
    pub fn from_roster(roster: &RosterConfig) -> Result<Self, MindError> {
        let (registry, lexicon) = roster.build()?;
        Ok(Self::new(registry, lexicon))
    }

    /// Receive one clause and return the clauses it gives rise to.
    ///
    /// A statement is stored as a fact and yields one open question per
    /// universal role it leaves unstated; a question yields exactly one
    /// answer. A failing call returns without storing anything.
    pub fn receive(&mut self, clause: &ExternalClause) -> Result<Vec<ExternalClause>, MindError> {
        let internal = self.converter.to_internal(&self.registry, clause)?;
        let results = self
            .reasoner
            .think_about(&internal, &mut self.facts, &self.lexicon)?;

        results
            .iter()
            .map(|result| self.converter.to_external(&self.registry, result))
            .collect()
    }

    /// The entity roster this mind was built with.
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// The verb lexicon this mind was built with.
    pub fn lexicon(&self) -> &VerbLexicon {
        &self.lexicon
    }

    /// Number of facts asserted so far.
    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }
}
