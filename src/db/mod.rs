//! Databases for holding information relevant to a transform.
//!
//! A formula is stored in a [clause database](clause).
//! Atoms do not have a database of their own, as every atom in a formula is determined by the literals of the formula.

pub mod clause;

pub use clause::{ClauseDB, ClauseKey};
