//! # Mind Core
//!
//! The reasoning engine of the frame-based knowledge store. This crate
//! converts external clauses into internal form, records statements as
//! facts, answers questions from the stored facts, and raises a follow-up
//! open question ("because of what?") for every statement.
//!
//! ## Core Components
//!
//! - **clause**: external and internal clause forms plus the converter
//! - **fact_store**: append-only fact memory with pattern lookup
//! - **reasoner**: statement/question classification and execution
//! - **mind**: the facade owning one of each, exposing `receive`
//!
//! ## Design Philosophy
//!
//! - **Exactly-one semantics**: a question matches exactly one stored fact;
//!   zero or several matches is reported, never silently resolved
//! - **Append-only memory**: facts are immutable once asserted
//! - **Explicit unknowns**: the wildcard slot is a distinct case, not a
//!   nullable index

pub mod clause;
pub mod error;
pub mod fact_store;
pub mod mind;
pub mod reasoner;

pub use clause::*;
pub use error::*;
pub use fact_store::*;
pub use mind::*;
pub use reasoner::*;
