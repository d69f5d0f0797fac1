//! Key structures, such as atoms, literals, and clauses.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! # Other structures without a trait and/or canonical implementation.
//!
//! ## Formulas
//!
//! A formula 𝐅 is a sequence of [clauses](clause), interpreted as the conjunction of those clauses.
//! The order of clauses has no bearing on the interpretation of a formula, though order is preserved so that output is reproducible.
//!
//! Formulas are stored in a [clause database](crate::db::clause).
//!
//! ## Occurrences
//!
//! An occurrence of an atom is a position in some clause of a formula at which a literal of the atom appears, regardless of polarity.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
