//! A library for rewriting boolean formulas in conjunctive normal form so that every atom occurs at most three times.
//!
//! The rewritten formula is satisfiable if and only if the given formula is satisfiable, and models transfer in both directions.
//! Only the number of occurrences of each atom is bounded: clauses of the given formula keep their size.
//! The transform is useful as a step before solvers or reductions which assume each atom has bounded degree.
//!
//! # Orientation
//!
//! The library is designed around the structure of a [context].
//!
//! Contexts are built with a [configuration](config) and hold a formula in a [clause database](db::clause).
//! Clauses may be added though the [DIMACS](crate::context::Context::read_dimacs) representation of a formula or [directly](crate::db::clause::ClauseDB::add_clause).
//!
//! The transform itself is made of:
//! - An [analysis](transform::occurrences) of the occurrences of each atom.
//! - A [gadget](transform::gadget) for each atom occurring more than three times, which rewrites all but the first occurrence of the atom to fresh atoms and links the atoms by a cycle of implications.
//!
//! Useful starting points, then, may be:
//! - The [gadget](transform::gadget) module, for the construction and an argument for why it preserves satisfiability.
//! - The [clause database](db::clause), for the representation of a formula.
//! - The [structures] to familiarise yourself with the abstract elements of a formula and their representation (literals, clauses, etc.)
//!
//! # Examples
//!
//! + Parse, transform, and write a DIMACS formula.
//!
//! ```rust
//! # use three_occ::context::Context;
//! # use three_occ::config::Config;
//! # use three_occ::transform::occurrences::occurrence_counts;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = b"p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//!
//! let report = the_context.transform().unwrap();
//! assert_eq!(report.atoms_after, 8);
//! assert!(occurrence_counts(&the_context.clause_db).values().all(|count| *count <= 3));
//!
//! let mut output = Vec::new();
//! assert!(the_context.write_dimacs(&mut output).is_ok());
//! ```
//!
//! + Lift a model of the given formula to a model of the transformed formula, and back.
//!
//! ```rust
//! # use three_occ::db::clause::ClauseDB;
//! # use three_occ::transform::to_three_occurrence;
//! let mut clause_db = ClauseDB::default();
//! for clause in [vec![1, 2], vec![1, -2], vec![1], vec![-2, 1]] {
//!     assert!(clause_db.add_clause(clause).is_ok());
//! }
//! let original = clause_db.clone();
//!
//! let report = to_three_occurrence(&mut clause_db).unwrap();
//!
//! let model = vec![None, Some(true), Some(false)];
//! assert!(original.satisfied_on(&model));
//!
//! let lifted = report.extend_valuation(&model);
//! assert!(clause_db.satisfied_on(&lifted));
//! assert_eq!(report.project_valuation(&lifted), model);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with a variety of targets, to help narrow output to relevant parts of the library.
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to gadgets can be filtered with `RUST_LOG=gadget …` or,
//! - A count of atoms exceeding the bound can be found with `RUST_LOG=occurrences=info …`

#![allow(clippy::single_match)]
#![allow(clippy::len_without_is_empty)]

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod reference;
pub mod structures;
pub mod transform;
pub mod types;
