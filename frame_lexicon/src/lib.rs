//! # Frame Lexicon
//!
//! The "World Lexicon" crate - contains the entity roster, verb specifications,
//! and the reserved vocabulary shared with the reasoning core. This crate is the
//! single source of truth for who and what a mind can talk about and does not
//! contain any reasoning logic.

pub mod entities;
pub mod error;
pub mod roster;
pub mod verbs;

pub use entities::*;
pub use error::*;
pub use roster::*;
pub use verbs::*;
