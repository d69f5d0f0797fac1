//! Methods for building a formula within a context.
//!
//! At present, formulas are built by reading a [DIMACS](dimacs) representation.
//! Clauses may also be added directly to the [clause database](crate::db::clause) of a context.

pub mod dimacs;

/// Information about a formula read from some DIMACS input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms given in the problem specification, if any.
    pub expected_atoms: Option<usize>,

    /// The count of clauses given in the problem specification, if any.
    pub expected_clauses: Option<usize>,

    /// The largest atom read.
    pub added_atoms: usize,

    /// A count of clauses read.
    pub added_clauses: usize,
}
