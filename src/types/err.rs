//! Error types used in the library.
//!
//! - Parse errors are found when reading a formula, and are the only errors expected from well-intentioned use.
//! - Clause database errors guard the invariants of the [clause database](crate::db::clause).
//! - Atom database errors are, in practice, unreachable: a transform would need more than [ATOM_MAX](crate::structures::atom::ATOM_MAX) atoms.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::literal::CLiteral;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    ClauseDB(ClauseDBError),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::AtomDB(e) => write!(f, "{e}"),
            ErrorKind::ClauseDB(e) => write!(f, "{e}"),
            ErrorKind::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors in the allocation of atoms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl std::fmt::Display for AtomDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomDBError::AtomsExhausted => write!(f, "No fresh atoms remain"),
        }
    }
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// Some attempt was made to store an integer which is not a literal (`0`, or `i32::MIN`).
    InvalidLiteral(CLiteral),
}

impl std::fmt::Display for ClauseDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClauseDBError::EmptyClause => write!(f, "Empty clause"),
            ClauseDBError::InvalidLiteral(int) => write!(f, "{int} is not a literal"),
        }
    }
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors during parsing.
///
/// Lines are counted from 1.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// No problem specification (`p cnf`) was found before the formula, at the given line.
    /// I.e. the input is not in DIMACS format.
    MissingPreamble(usize),

    /// Some issue with the numbers of the problem specification in a DIMACS input.
    ProblemSpecification,

    /// The problem specification does not match the formula read.
    PreambleMismatch {
        expected_atoms: usize,
        expected_clauses: usize,
        found_atoms: usize,
        found_clauses: usize,
    },

    /// A token which is not a literal, where a literal was expected.
    Literal { line: usize, token: String },

    /// A clause with no literals.
    EmptyClause(usize),

    /// Some unspecific problem at a specific line.
    Line(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingPreamble(line) => {
                write!(f, "Input not in DIMACS format, no 'p cnf' at line {line}")
            }
            ParseError::ProblemSpecification => write!(f, "Malformed problem specification"),
            ParseError::PreambleMismatch {
                expected_atoms,
                expected_clauses,
                found_atoms,
                found_clauses,
            } => write!(
                f,
                "Expected {expected_atoms} atoms and {expected_clauses} clauses, found {found_atoms} atoms and {found_clauses} clauses"
            ),
            ParseError::Literal { line, token } => {
                write!(f, "'{token}' at line {line} is not a literal")
            }
            ParseError::EmptyClause(line) => write!(f, "Empty clause at line {line}"),
            ParseError::Line(line) => write!(f, "Failed to read line {line}"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
