//! Conversion between external and internal clause forms.

use std::collections::BTreeMap;

use frame_lexicon::{EntityRegistry, UNKNOWN_NAME};

use super::{ExternalClause, InternalClause, Slot};
use crate::error::MindError;

/// Policy for role names that resolve to no registered entity.
///
/// Whichever policy is chosen applies uniformly to every role of every
/// clause; "name not found" is never conflated with the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownNamePolicy {
    /// Reject the clause with `UnknownEntityName`.
    #[default]
    Reject,
    /// Treat the name as if it were the unknown placeholder.
    CoerceToWildcard,
}

/// Translates clauses between their external and internal forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClauseConverter {
    policy: UnknownNamePolicy,
}

impl ClauseConverter {
    /// Create a converter with the given unknown-name policy.
    pub fn new(policy: UnknownNamePolicy) -> Self {
        Self { policy }
    }

    /// Create a converter with the default (rejecting) policy.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Resolve every role name into an entity index or wildcard slot.
    pub fn to_internal(
        &self,
        registry: &EntityRegistry,
        clause: &ExternalClause,
    ) -> Result<InternalClause, MindError> {
        let mut roles = BTreeMap::new();
        for (role, name) in &clause.rel2name {
            let slot = if name == UNKNOWN_NAME {
                Slot::Wildcard
            } else {
                match registry.index_of(name) {
                    Some(index) => Slot::Entity(index),
                    None => match self.policy {
                        UnknownNamePolicy::Reject => {
                            return Err(MindError::UnknownEntityName {
                                role: role.clone(),
                                name: name.clone(),
                            });
                        }
                        UnknownNamePolicy::CoerceToWildcard => Slot::Wildcard,
                    },
                }
            };
            roles.insert(role.clone(), slot);
        }

        Ok(InternalClause {
            verb: clause.verb.clone(),
            roles,
        })
    }

    /// Render every slot back into an entity name or the placeholder.
    pub fn to_external(
        &self,
        registry: &EntityRegistry,
        clause: &InternalClause,
    ) -> Result<ExternalClause, MindError> {
        let mut rel2name = BTreeMap::new();
        for (role, slot) in &clause.roles {
            let name = match slot {
                Slot::Wildcard => UNKNOWN_NAME.to_string(),
                Slot::Entity(index) => registry
                    .resolve(*index)
                    .ok_or_else(|| {
                        MindError::Internal(format!("dangling entity index {index}"))
                    })?
                    .name
                    .clone(),
            };
            rel2name.insert(role.clone(), name);
        }

        Ok(ExternalClause {
            verb: clause.verb.clone(),
            rel2name,
        })
    }
}
