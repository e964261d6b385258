//! Clause representations and conversion.
//!
//! A clause is a verb plus a mapping from semantic role labels to values:
//!
//! - **External**: role -> entity name, with a reserved placeholder token
//!   for "unknown" (the wire form)
//! - **Internal**: role -> entity index or wildcard slot (the reasoning form)

mod convert;
mod external;
mod internal;

pub use convert::*;
pub use external::*;
pub use internal::*;
