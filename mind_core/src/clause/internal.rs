//! Internal clause form - entity indices and wildcard slots.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use frame_lexicon::EntityIndex;

/// Value of a semantic role inside the mind.
///
/// A wildcard means "requested but unresolved". It is a distinct case from
/// the role being absent from the clause entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// A resolved reference to a registered entity.
    Entity(EntityIndex),
    /// The asked-about or deliberately unknown value.
    Wildcard,
}

impl Slot {
    /// Check whether this slot is the wildcard marker.
    pub fn is_wildcard(self) -> bool {
        matches!(self, Slot::Wildcard)
    }
}

/// A clause in its internal form: verb plus role -> slot mapping.
///
/// Role labels iterate in canonical (lexicographic) order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalClause {
    pub verb: String,
    pub roles: BTreeMap<String, Slot>,
}

impl InternalClause {
    /// Create a clause from a verb and role/slot pairs.
    pub fn new(
        verb: impl Into<String>,
        roles: impl IntoIterator<Item = (impl Into<String>, Slot)>,
    ) -> Self {
        Self {
            verb: verb.into(),
            roles: roles
                .into_iter()
                .map(|(role, slot)| (role.into(), slot))
                .collect(),
        }
    }

    /// A clause is a question iff at least one role is a wildcard.
    pub fn is_question(&self) -> bool {
        self.roles.values().any(|slot| slot.is_wildcard())
    }

    /// Labels of all wildcard roles, in canonical order.
    pub fn wildcard_roles(&self) -> Vec<&str> {
        self.roles
            .iter()
            .filter(|(_, slot)| slot.is_wildcard())
            .map(|(role, _)| role.as_str())
            .collect()
    }

    /// The lookup pattern formed by this clause's bound roles.
    pub fn pattern(&self) -> Pattern {
        Pattern {
            verb: self.verb.clone(),
            bound_roles: self
                .roles
                .iter()
                .filter(|(_, slot)| !slot.is_wildcard())
                .map(|(role, _)| role.clone())
                .collect(),
        }
    }

    /// Check whether this clause satisfies a pattern: same verb, and every
    /// bound role of the pattern present here.
    pub fn satisfies(&self, pattern: &Pattern) -> bool {
        self.verb == pattern.verb
            && pattern
                .bound_roles
                .iter()
                .all(|role| self.roles.contains_key(role))
    }

    /// The slot bound to a role, if the role is present.
    pub fn slot(&self, role: &str) -> Option<Slot> {
        self.roles.get(role).copied()
    }
}

/// Verb plus bound role labels, used to filter stored facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub verb: String,
    pub bound_roles: BTreeSet<String>,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.verb)?;
        for (i, role) in self.bound_roles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{role}")?;
        }
        write!(f, ")")
    }
}
