//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The canonical implementation of the literal trait is an integer, with the sign of the integer indicating the polarity of the literal and the magnitude of the integer the atom.
//! This is the representation used by the DIMACS format, and so reading and writing a formula requires no translation.
//!
//! ```rust
//! # use three_occ::structures::literal::{CLiteral, Literal};
//! let atom = 79;
//! let polarity = true;
//! let literal = CLiteral::new(atom, polarity);
//!
//! assert!(literal.polarity());
//!
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//!
//! assert_eq!(literal.negate(), CLiteral::new(79, false));
//! ```
//!
//! Two integers are not literals:
//! - `0`, as it is reserved to terminate a clause in the DIMACS format.
//! - `i32::MIN`, as its magnitude is not an [atom](crate::structures::atom).

use crate::structures::atom::{Atom, ATOM_MAX};

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

/// The canonical implementation of a literal.
pub type CLiteral = i32;

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as CLiteral,
            false => -(atom as CLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}

/// Whether the integer may be used as a literal.
pub fn is_literal(int: CLiteral) -> bool {
    int != 0 && int.unsigned_abs() <= ATOM_MAX
}
