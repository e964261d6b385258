//! Verb specifications and the lexicon mapping lemmas to semantic roles.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::LexiconError;

/// Roles every statement is proactively offered an open question about,
/// in their fixed iteration order.
pub const UNIVERSAL_ROLES: &[&str] = &["because"];

/// A verb and the semantic roles it recognizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbSpec {
    pub lemma: String,
    /// Role labels in their declared order.
    pub roles: Vec<String>,
}

impl VerbSpec {
    /// Create a new verb specification.
    pub fn new(
        lemma: impl Into<String>,
        roles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            lemma: lemma.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether this verb declares the given role.
    pub fn recognizes(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Static lexicon mapping verb lemmas to their specifications.
///
/// Populated once during bootstrap, not mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VerbLexicon {
    verbs: HashMap<String, VerbSpec>,
}

impl VerbLexicon {
    /// Create a new empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a verb specification to the lexicon.
    pub fn define(&mut self, spec: VerbSpec) -> Result<(), LexiconError> {
        if self.verbs.contains_key(&spec.lemma) {
            return Err(LexiconError::DuplicateVerb(spec.lemma));
        }
        self.verbs.insert(spec.lemma.clone(), spec);
        Ok(())
    }

    /// The ordered role-label set recognized by a verb.
    pub fn roles_for(&self, verb: &str) -> Result<&[String], LexiconError> {
        self.verbs
            .get(verb)
            .map(|spec| spec.roles.as_slice())
            .ok_or_else(|| LexiconError::UnrecognizedVerb(verb.to_string()))
    }

    /// Validate that every supplied role label is either declared by the
    /// verb or a universal relation.
    pub fn validate_roles<'a>(
        &self,
        verb: &str,
        roles: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), LexiconError> {
        let spec = self
            .verbs
            .get(verb)
            .ok_or_else(|| LexiconError::UnrecognizedVerb(verb.to_string()))?;

        for role in roles {
            if !spec.recognizes(role) && !UNIVERSAL_ROLES.contains(&role) {
                return Err(LexiconError::UnknownRole {
                    verb: verb.to_string(),
                    role: role.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Number of defined verbs.
    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    /// Check if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}
