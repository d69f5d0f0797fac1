/*!
Analysis of the occurrences of atoms in a formula.

An occurrence of an atom is a position in the literal array of a [clause database](crate::db::clause) at which a literal of the atom appears.
Polarity is ignored, so the formula `(1 -2) (-1 2) (1)` has three occurrences of atom 1 and two of atom 2.

```rust
# use three_occ::db::clause::ClauseDB;
# use std::collections::BTreeMap;
# use three_occ::transform::occurrences::{occurrence_counts, Occurrences};
let mut clause_db = ClauseDB::default();
assert!(clause_db.add_clause(vec![1, -2]).is_ok());
assert!(clause_db.add_clause(vec![-1, 2]).is_ok());
assert!(clause_db.add_clause(vec![1]).is_ok());
assert!(clause_db.add_clause(vec![-1, 3]).is_ok());

assert_eq!(occurrence_counts(&clause_db), BTreeMap::from([(1, 4), (2, 2), (3, 1)]));

let excess = Occurrences::excess(&clause_db, 3);
assert_eq!(excess.atoms().collect::<Vec<_>>(), vec![1]);
assert_eq!(excess.positions_of(1), Some([0, 2, 4, 5].as_slice()));
```

Counts and positions are kept only for atoms which appear in the formula, so a formula with a few large atoms takes no more space than one with small atoms.

Occurrences are counted once, at the start of a transform, and are not maintained as gadgets rewrite the formula.
Gadgets are built to respect the bound, and positions of an atom are only ever rewritten to fresh atoms, so the positions of any other atom found by the analysis remain valid throughout a transform.
*/

use std::collections::BTreeMap;

use crate::{
    db::clause::ClauseDB,
    misc::log::targets::{self},
    structures::{atom::Atom, literal::Literal},
};

/// A count of occurrences of each atom in the database, in ascending atom order.
///
/// Atoms which do not occur are absent.
pub fn occurrence_counts(clause_db: &ClauseDB) -> BTreeMap<Atom, usize> {
    let mut counts = BTreeMap::new();
    for literal in clause_db.literals() {
        *counts.entry(literal.atom()).or_default() += 1;
    }
    counts
}

/// The atoms whose occurrences exceed some bound, paired with the positions of those occurrences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Occurrences {
    /// Positions in store order, for each atom exceeding the bound.
    positions: BTreeMap<Atom, Vec<usize>>,
}

impl Occurrences {
    /// The occurrences of every atom which occurs more than `bound` times in the database.
    pub fn excess(clause_db: &ClauseDB, bound: usize) -> Self {
        let mut positions = occurrence_counts(clause_db)
            .into_iter()
            .filter(|(_, count)| *count > bound)
            .map(|(atom, count)| (atom, Vec::with_capacity(count)))
            .collect::<BTreeMap<_, _>>();

        if !positions.is_empty() {
            for (index, literal) in clause_db.literals().iter().enumerate() {
                if let Some(atom_positions) = positions.get_mut(&literal.atom()) {
                    atom_positions.push(index);
                }
            }
        }

        let excess = Occurrences { positions };
        log::info!(target: targets::OCCURRENCES, "{} atoms occur more than {bound} times", excess.len());
        excess
    }

    /// The positions of each occurrence of the atom, if the atom exceeds the bound.
    pub fn positions_of(&self, atom: Atom) -> Option<&[usize]> {
        self.positions.get(&atom).map(|positions| positions.as_slice())
    }

    /// The count of occurrences of the atom, if the atom exceeds the bound.
    pub fn count_of(&self, atom: Atom) -> Option<usize> {
        self.positions_of(atom).map(|positions| positions.len())
    }

    /// An iterator over atoms exceeding the bound, in ascending order.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.positions.keys().copied()
    }

    /// An iterator over (atom, count) pairs for atoms exceeding the bound, in ascending atom order.
    pub fn counts(&self) -> impl Iterator<Item = (Atom, usize)> + '_ {
        self.iter().map(|(atom, positions)| (atom, positions.len()))
    }

    /// An iterator over (atom, positions) pairs for atoms exceeding the bound, in ascending atom order.
    pub fn iter(&self) -> impl Iterator<Item = (Atom, &[usize])> {
        self.positions
            .iter()
            .map(|(atom, positions)| (*atom, positions.as_slice()))
    }

    /// A count of atoms exceeding the bound.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no atom exceeds the bound.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod occurrence_tests {
    use super::*;
    use crate::structures::atom::ATOM_MAX;

    fn database(clauses: Vec<Vec<i32>>) -> ClauseDB {
        let mut clause_db = ClauseDB::default();
        for clause in clauses {
            assert!(clause_db.add_clause(clause).is_ok());
        }
        clause_db
    }

    #[test]
    fn polarity_is_ignored() {
        let clause_db = database(vec![vec![1, -1], vec![-1], vec![1, 2]]);

        assert_eq!(occurrence_counts(&clause_db), BTreeMap::from([(1, 4), (2, 1)]));
    }

    #[test]
    fn bound_is_inclusive() {
        let clause_db = database(vec![vec![1, 2], vec![1, -2], vec![-1, 2]]);

        let excess = Occurrences::excess(&clause_db, 3);
        assert!(excess.is_empty());
        assert_eq!(excess.len(), 0);
        assert_eq!(excess.count_of(1), None);
    }

    #[test]
    fn ascending_atoms_with_positions() {
        let clause_db = database(vec![
            vec![5, 2],
            vec![-5, 2, 2],
            vec![-2, 5],
            vec![5, 1],
            vec![3],
        ]);

        let excess = Occurrences::excess(&clause_db, 3);

        assert_eq!(excess.len(), 2);
        assert_eq!(excess.counts().collect::<Vec<_>>(), vec![(2, 4), (5, 4)]);
        assert_eq!(excess.positions_of(2), Some([1, 3, 4, 5].as_slice()));
        assert_eq!(excess.positions_of(5), Some([0, 2, 6, 7].as_slice()));
        assert_eq!(excess.positions_of(3), None);
        assert_eq!(excess.positions_of(40), None);
    }

    #[test]
    fn empty_database() {
        let excess = Occurrences::excess(&ClauseDB::default(), 3);

        assert!(excess.is_empty());
        assert!(occurrence_counts(&ClauseDB::default()).is_empty());
    }

    #[test]
    fn large_atoms_are_sparse() {
        let large = ATOM_MAX as i32;
        let clause_db = database(vec![vec![large, 1], vec![-large], vec![large, -1], vec![-large]]);

        assert_eq!(
            occurrence_counts(&clause_db),
            BTreeMap::from([(1, 2), (ATOM_MAX, 4)])
        );

        let excess = Occurrences::excess(&clause_db, 3);
        assert_eq!(excess.counts().collect::<Vec<_>>(), vec![(ATOM_MAX, 4)]);
        assert_eq!(excess.positions_of(ATOM_MAX), Some([0, 2, 3, 5].as_slice()));
    }
}
