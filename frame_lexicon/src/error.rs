//! Error types for lexicon construction and lookup.

use thiserror::Error;

/// Errors raised while building or querying the world lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// An entity with this name is already registered.
    #[error("duplicate entity name `{0}`")]
    DuplicateName(String),

    /// The name is reserved for the unknown placeholder.
    #[error("entity name `{0}` is reserved")]
    ReservedName(String),

    /// A verb with this lemma is already defined.
    #[error("duplicate verb `{0}`")]
    DuplicateVerb(String),

    /// The verb is absent from the lexicon.
    #[error("unrecognized verb `{0}`")]
    UnrecognizedVerb(String),

    /// The role label is neither declared by the verb nor universal.
    #[error("unknown role `{role}` for verb `{verb}`")]
    UnknownRole { verb: String, role: String },

    /// The roster text could not be parsed.
    #[error("invalid roster: {0}")]
    Roster(#[from] toml::de::Error),
}
