//! Error types for clause conversion and reasoning.

use thiserror::Error;

use crate::clause::Pattern;
use frame_lexicon::LexiconError;

/// Errors surfaced synchronously by `receive` and the components beneath it.
///
/// Every variant is caller-facing input rejection except `Internal`, which
/// marks invariant violations that cannot occur given valid internal state.
#[derive(Debug, Error)]
pub enum MindError {
    /// Lexicon lookup or bootstrap failure.
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    /// A role names an entity that is neither registered nor the unknown
    /// placeholder.
    #[error("unknown entity name `{name}` in role `{role}`")]
    UnknownEntityName { role: String, name: String },

    /// A question must carry exactly one wildcard role.
    #[error("malformed question: expected exactly one wildcard role, found {wildcards}")]
    MalformedQuestion { wildcards: usize },

    /// No stored fact matches the question's pattern.
    #[error("no fact matches {pattern}")]
    NoMatchingFact { pattern: Pattern },

    /// Several stored facts match the question's pattern.
    #[error("{count} facts match {pattern}, expected exactly one")]
    AmbiguousFact { pattern: Pattern, count: usize },

    /// Invariant violation; should never happen with a write-once registry.
    #[error("internal error: {0}")]
    Internal(String),
}
