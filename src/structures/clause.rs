//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! Within a [clause database](crate::db::clause) a clause is a run of literals in a flat array, and so the clause trait is implemented for slices of literals.
//! The canonical owned representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use three_occ::structures::clause::{CClause, Clause};
//! let clause: CClause = vec![23, -41, -3, 15, -4];
//!
//! assert_eq!(clause.size(), 5);
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 15 -4 0");
//!
//! let mut some_valuation = vec![Some(true); 42];
//! assert!(clause.satisfied_on(&some_valuation));
//!
//! some_valuation[23] = Some(false);
//! some_valuation[15] = Some(false);
//! assert!(clause.unsatisfiable_on(&some_valuation));
//! ```
//!
//! - Order within a clause is preserved, though it has no bearing on the interpretation of the clause.
//! - Duplicate literals are permitted, and each copy is an occurrence of the atom of the literal.
//! - The empty clause is always false, though no empty clause is ever stored.

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The canonical (owned) implementation of a clause.
pub type CClause = Vec<CLiteral>;

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in order and with repetition.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether some literal in the clause is true on the given valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;

    /// Whether every literal in the clause is false on the given valuation.
    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool;
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs_string = String::new();
        for literal in self {
            dimacs_string.push_str(literal.to_string().as_str());
            dimacs_string.push(' ');
        }
        if zero {
            dimacs_string.push('0');
        } else {
            dimacs_string.pop();
        }
        dimacs_string
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.value_of(literal.atom()) == Some(literal.polarity()))
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .all(|literal| valuation.value_of(literal.atom()) == Some(!literal.polarity()))
    }
}
