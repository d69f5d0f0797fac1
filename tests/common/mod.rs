#![allow(dead_code)]

use proptest::prelude::*;
use three_occ::{
    db::clause::ClauseDB,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
        valuation::CValuation,
    },
};

/// A clause database holding the given clauses.
pub fn database(clauses: &[CClause]) -> ClauseDB {
    let mut clause_db = ClauseDB::default();
    for clause in clauses {
        assert!(clause_db.add_clause(clause.iter().copied()).is_ok());
    }
    clause_db
}

/// The clauses of a database, as vectors.
pub fn clauses_of(clause_db: &ClauseDB) -> Vec<CClause> {
    clause_db.clauses().map(|clause| clause.to_vec()).collect()
}

/// A model of the database, with every atom valued, if the database is satisfiable.
///
/// A plain DPLL search with unit propagation, suitable only for small formulas.
pub fn solve(clause_db: &ClauseDB) -> Option<CValuation> {
    let clauses = clauses_of(clause_db);
    let mut valuation = vec![None; clause_db.max_atom() as usize + 1];

    match dpll(&clauses, &mut valuation) {
        true => {
            for value in valuation.iter_mut().skip(1) {
                value.get_or_insert(false);
            }
            Some(valuation)
        }
        false => None,
    }
}

fn literal_value(literal: CLiteral, valuation: &CValuation) -> Option<bool> {
    valuation[literal.atom() as usize].map(|value| value == literal.polarity())
}

fn dpll(clauses: &[CClause], valuation: &mut CValuation) -> bool {
    'propagation: loop {
        for clause in clauses {
            let mut unvalued = None;
            let mut unvalued_count = 0;
            let mut satisfied = false;

            for literal in clause {
                match literal_value(*literal, valuation) {
                    Some(true) => {
                        satisfied = true;
                        break;
                    }
                    Some(false) => {}
                    None => {
                        unvalued = Some(*literal);
                        unvalued_count += 1;
                    }
                }
            }

            if satisfied {
                continue;
            }

            match (unvalued, unvalued_count) {
                (None, _) => return false,
                (Some(unit), 1) => {
                    valuation[unit.atom() as usize] = Some(unit.polarity());
                    continue 'propagation;
                }
                _ => {}
            }
        }
        break;
    }

    let choice = clauses
        .iter()
        .flatten()
        .map(|literal| literal.atom())
        .find(|atom| valuation[*atom as usize].is_none());

    let Some(atom) = choice else {
        return true;
    };

    for value in [true, false] {
        let mut branch = valuation.clone();
        branch[atom as usize] = Some(value);
        if dpll(clauses, &mut branch) {
            *valuation = branch;
            return true;
        }
    }

    false
}

/// The number of atoms used by generated formulas.
pub const GENERATED_ATOMS: Atom = 6;

/// A literal over the generated atoms.
pub fn literal_strategy() -> impl Strategy<Value = CLiteral> {
    (1..=GENERATED_ATOMS as CLiteral, any::<bool>())
        .prop_map(|(atom, polarity)| match polarity {
            true => atom,
            false => -atom,
        })
}

/// A formula of up to a dozen clauses, each with up to four literals.
pub fn formula_strategy() -> impl Strategy<Value = Vec<CClause>> {
    prop::collection::vec(prop::collection::vec(literal_strategy(), 1..=4), 1..12)
}
