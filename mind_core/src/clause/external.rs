//! External clause form - the wire representation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A clause in its external form: verb plus role -> entity-name mapping.
///
/// Serializes as `{"verb": ..., "rel2name": {...}}`. A role may name the
/// unknown placeholder instead of a registered entity. Role keys are kept
/// sorted so serialized output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalClause {
    pub verb: String,
    pub rel2name: BTreeMap<String, String>,
}

impl ExternalClause {
    /// Create a clause from a verb and role/name pairs.
    pub fn new(
        verb: impl Into<String>,
        rel2name: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self {
            verb: verb.into(),
            rel2name: rel2name
                .into_iter()
                .map(|(role, name)| (role.into(), name.into()))
                .collect(),
        }
    }

    /// The name bound to a role, if the role is present.
    pub fn name_of(&self, role: &str) -> Option<&str> {
        self.rel2name.get(role).map(String::as_str)
    }
}
