/*!
A naive implementation of the transform, for differential testing.

Here, a formula is a vector of clauses, each clause its own vector of literals.
And, rather than finding the positions of every atom in a single pass, the formula is rescanned for each atom which exceeds the bound.

The result is identical to the [transform](crate::transform) of a [clause database](crate::db::clause) holding the same clauses.

```rust
# use three_occ::db::clause::ClauseDB;
# use three_occ::reference::NaiveFormula;
# use three_occ::transform::to_three_occurrence;
let mut clause_db = ClauseDB::default();
for clause in [vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]] {
    assert!(clause_db.add_clause(clause).is_ok());
}

let mut naive = NaiveFormula::from(&clause_db);
naive.to_three_occurrence();

assert!(to_three_occurrence(&mut clause_db).is_ok());

assert_eq!(naive.clauses, clause_db.clauses().map(|c| c.to_vec()).collect::<Vec<_>>());
assert_eq!(naive.to_clause_db(), Ok(clause_db));
```
*/

use std::collections::BTreeMap;

use crate::{
    config::GADGET_OCCURRENCES,
    db::clause::ClauseDB,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// A formula as a vector of clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NaiveFormula {
    pub clauses: Vec<CClause>,
}

impl From<&ClauseDB> for NaiveFormula {
    fn from(clause_db: &ClauseDB) -> Self {
        NaiveFormula {
            clauses: clause_db.clauses().map(|clause| clause.to_vec()).collect(),
        }
    }
}

impl NaiveFormula {
    /// A clause database holding the clauses of the formula, in order.
    pub fn to_clause_db(&self) -> Result<ClauseDB, err::ClauseDBError> {
        let literal_count = self.clauses.iter().map(Vec::len).sum();
        let mut clause_db = ClauseDB::with_capacity(self.clauses.len(), literal_count);
        for clause in &self.clauses {
            clause_db.add_clause(clause.iter().copied())?;
        }
        Ok(clause_db)
    }

    /// The largest atom of the formula, or 0.
    pub fn max_atom(&self) -> Atom {
        self.clauses
            .iter()
            .flatten()
            .map(|literal| literal.atom())
            .max()
            .unwrap_or(0)
    }

    /// Transforms the formula so that every atom occurs at most three times.
    ///
    /// Returns the largest atom of the transformed formula.
    pub fn to_three_occurrence(&mut self) -> Atom {
        let mut counts: BTreeMap<Atom, usize> = BTreeMap::new();
        for literal in self.clauses.iter().flatten() {
            *counts.entry(literal.atom()).or_default() += 1;
        }
        counts.retain(|_, count| *count > GADGET_OCCURRENCES);

        let mut next_fresh = self.max_atom() + 1;
        for atom in counts.into_keys() {
            let fresh = self.replace_atom(atom, next_fresh);
            let last = fresh - 1;

            self.add_implication(atom, next_fresh);
            for link in next_fresh..last {
                self.add_implication(link, link + 1);
            }
            self.add_implication(last, atom);

            next_fresh = fresh;
        }

        next_fresh - 1
    }

    /// Replaces every occurrence of the atom after the first with a fresh atom, returning the next fresh atom.
    fn replace_atom(&mut self, atom: Atom, mut next_fresh: Atom) -> Atom {
        let mut first = true;
        for literal in self.clauses.iter_mut().flatten() {
            if literal.atom() != atom {
                continue;
            }
            if first {
                first = false;
                continue;
            }
            *literal = CLiteral::new(next_fresh, literal.polarity());
            next_fresh += 1;
        }
        next_fresh
    }

    fn add_implication(&mut self, a: Atom, b: Atom) {
        self.clauses
            .push(vec![CLiteral::new(a, false), CLiteral::new(b, true)]);
    }
}

#[cfg(test)]
mod reference_tests {
    use super::*;

    #[test]
    fn collisions_are_avoided() {
        let mut naive = NaiveFormula {
            clauses: vec![vec![1, 2], vec![1, 2], vec![-1, -2], vec![1, -2]],
        };

        assert_eq!(naive.to_three_occurrence(), 8);
        assert_eq!(naive.clauses[0], vec![1, 2]);
        assert_eq!(naive.clauses[1], vec![3, 6]);
        assert_eq!(naive.clauses[3], vec![5, -8]);
        assert_eq!(naive.clauses[4], vec![-1, 3]);
        assert_eq!(naive.clauses[7], vec![-5, 1]);
    }

    #[test]
    fn empty_clause_is_not_a_database_clause() {
        let naive = NaiveFormula {
            clauses: vec![vec![1], vec![]],
        };

        assert_eq!(naive.to_clause_db(), Err(err::ClauseDBError::EmptyClause));
    }
}
