/*!
The transform of a formula to a formula in which each atom occurs at most three times.

A transform is made of two parts:
- An [analysis](occurrences) of the formula, to find each atom which occurs more often than some bound.
- The construction of a [gadget](gadget) for each such atom, in ascending atom order.

The analysis is made once, before any gadget is built.
And, fresh atoms are drawn from a single [source](gadget::FreshAtoms) which begins above the largest atom of the formula, so distinct gadgets never share an atom.

The formula is rewritten in place: no clause is removed, some literals are rewritten to fresh atoms, and implications are appended.

```rust
# use three_occ::db::clause::ClauseDB;
# use three_occ::transform::{occurrences::occurrence_counts, to_three_occurrence};
let mut clause_db = ClauseDB::default();
for _ in 0..3 {
    assert!(clause_db.add_clause(vec![1]).is_ok());
}
assert!(clause_db.add_clause(vec![-1]).is_ok());

let report = to_three_occurrence(&mut clause_db).unwrap();

assert_eq!(report.atoms_after, 4);
assert_eq!(report.clauses_after, 8);
assert!(occurrence_counts(&clause_db).values().all(|count| *count <= 3));
```

As the analysis only finds atoms exceeding the bound, transforming a formula a second time leaves the formula unchanged.
*/

pub mod gadget;
pub mod occurrences;

use gadget::{build_gadget, Chain, FreshAtoms};
use occurrences::Occurrences;

use crate::{
    config::GADGET_OCCURRENCES,
    db::clause::ClauseDB,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        valuation::{CValuation, Valuation},
    },
    types::err::{self},
};

/// A record of a transform.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Each chain built, in the order built.
    pub chains: Vec<Chain>,

    /// The largest atom of the formula before the transform.
    pub atoms_before: Atom,

    /// The largest atom of the formula after the transform.
    pub atoms_after: Atom,

    /// A count of clauses before the transform.
    pub clauses_before: usize,

    /// A count of clauses after the transform.
    pub clauses_after: usize,
}

impl TransformReport {
    /// A count of the atoms introduced by the transform.
    pub fn fresh_atom_count(&self) -> usize {
        (self.atoms_after - self.atoms_before) as usize
    }

    /// Extends a valuation of the original formula to a valuation of the transformed formula.
    ///
    /// Each fresh atom of a chain takes the value of the origin of the chain.
    /// If the valuation satisfies the original formula, the extension satisfies the transformed formula.
    pub fn extend_valuation(&self, original: &impl Valuation) -> CValuation {
        let mut extended = vec![None; self.atoms_after as usize + 1];

        for (atom, value) in original.atom_valued_pairs() {
            if atom <= self.atoms_before {
                extended[atom as usize] = Some(value);
            }
        }

        for chain in &self.chains {
            let value = extended[chain.origin as usize];
            for atom in chain.fresh_atoms() {
                extended[atom as usize] = value;
            }
        }

        extended
    }

    /// Restricts a valuation of the transformed formula to the atoms of the original formula.
    ///
    /// If the valuation satisfies the transformed formula, the restriction satisfies the original formula.
    pub fn project_valuation(&self, transformed: &impl Valuation) -> CValuation {
        std::iter::once(None)
            .chain((1..=self.atoms_before).map(|atom| transformed.value_of(atom)))
            .collect()
    }
}

/// Transforms the formula so that every atom occurs at most three times.
pub fn to_three_occurrence(clause_db: &mut ClauseDB) -> Result<TransformReport, err::ErrorKind> {
    reduce_occurrences(clause_db, GADGET_OCCURRENCES)
}

/// Transforms the formula so that every atom which occurs more than `bound` times is replaced by a gadget.
///
/// Every atom of a gadget occurs [three times](GADGET_OCCURRENCES), and so a bound lower than three is raised to three.
/// After the transform no atom occurs more than `bound` times.
///
/// Fails only if the transform would require an atom larger than [ATOM_MAX](crate::structures::atom::ATOM_MAX), and in this case the database is unchanged.
pub fn reduce_occurrences(
    clause_db: &mut ClauseDB,
    bound: usize,
) -> Result<TransformReport, err::ErrorKind> {
    let bound = bound.max(GADGET_OCCURRENCES);

    let atoms_before = clause_db.max_atom();
    let clauses_before = clause_db.clause_count();

    let excess = Occurrences::excess(clause_db, bound);

    let mut fresh = FreshAtoms::above(atoms_before);

    let required: u64 = excess.counts().map(|(_, count)| count as u64 - 1).sum();
    if required > fresh.remaining() {
        log::info!(target: targets::TRANSFORM, "{required} fresh atoms required, {} remain", fresh.remaining());
        return Err(err::AtomDBError::AtomsExhausted.into());
    }

    let mut chains = Vec::with_capacity(excess.len());

    for (atom, positions) in excess.iter() {
        if let Some(chain) = build_gadget(clause_db, atom, positions, &mut fresh)? {
            chains.push(chain);
        }
    }

    let report = TransformReport {
        chains,
        atoms_before,
        atoms_after: fresh.high_water(),
        clauses_before,
        clauses_after: clause_db.clause_count(),
    };

    log::info!(target: targets::TRANSFORM, "Built {} gadgets with {} fresh atoms and {} implications",
        report.chains.len(),
        report.fresh_atom_count(),
        report.clauses_after - report.clauses_before
    );

    Ok(report)
}
