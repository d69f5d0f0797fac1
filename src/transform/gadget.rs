/*!
Gadgets which bound the occurrences of an atom.

Given an atom *v* with occurrences at positions *p0*, *p1*, …, *pk* of a [clause database](crate::db::clause), a gadget:
1. Leaves the occurrence at *p0* untouched.
2. Rewrites the occurrence at each *pi* (for *i* ≥ 1) to a distinct fresh atom *gi*, preserving polarity.
3. Adds a cycle of implications *v* → *g1* → … → *gk* → *v*, where *a* → *b* is the clause `(-a b)`.

On any valuation which satisfies the cycle, each of *v*, *g1*, …, *gk* has the same value.
For, if some atom in the cycle is true then following the implications from that atom makes every atom true, and if some atom is false then following the implications backwards makes every atom false.
So, the rewritten formula is satisfiable if and only if the original formula is, and a valuation of one may be [extended](crate::transform::TransformReport::extend_valuation) or [projected](crate::transform::TransformReport::project_valuation) to a valuation of the other.

After the gadget is built *v* occurs three times: at *p0*, as the antecedent of *v* → *g1*, and as the consequent of *gk* → *v*.
Likewise, each *gi* occurs at *pi* and in the two implications either side of it.

```rust
# use three_occ::db::clause::ClauseDB;
# use three_occ::transform::gadget::{build_gadget, FreshAtoms};
let mut clause_db = ClauseDB::default();
assert!(clause_db.add_clause(vec![1, 2]).is_ok());
assert!(clause_db.add_clause(vec![-1]).is_ok());
assert!(clause_db.add_clause(vec![1, -2]).is_ok());

let mut fresh = FreshAtoms::above(clause_db.max_atom());
let chain = build_gadget(&mut clause_db, 1, &[0, 2, 3], &mut fresh).unwrap().unwrap();

assert_eq!((chain.first, chain.last), (3, 4));
assert_eq!(clause_db.literals(), &[1, 2, -3, 4, -2, -1, 3, -3, 4, -4, 1]);
assert_eq!(fresh.high_water(), 4);
```
*/

use std::ops::RangeInclusive;

use crate::{
    db::clause::ClauseDB,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// A monotonic source of fresh atoms.
///
/// Atoms are never reused, and so distinct gadgets built from the same source never share an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FreshAtoms {
    next: Atom,
}

impl FreshAtoms {
    /// A source of atoms strictly greater than the given atom.
    pub fn above(atom: Atom) -> Self {
        FreshAtoms { next: atom + 1 }
    }

    /// The largest atom allocated, or the atom the source was created above.
    pub fn high_water(&self) -> Atom {
        self.next - 1
    }

    /// A count of the fresh atoms which remain.
    pub fn remaining(&self) -> u64 {
        (ATOM_MAX as u64 + 1).saturating_sub(self.next as u64)
    }

    /// A fresh atom.
    pub fn fresh(&mut self) -> Result<Atom, err::AtomDBError> {
        self.fresh_range(1).map(|range| *range.start())
    }

    /// A contiguous range of `count` fresh atoms, for nonzero `count`.
    ///
    /// If fewer than `count` fresh atoms remain no atom is allocated.
    pub fn fresh_range(&mut self, count: usize) -> Result<RangeInclusive<Atom>, err::AtomDBError> {
        let first = self.next as u64;
        let last = (first + count as u64).saturating_sub(1);
        if count == 0 || last > ATOM_MAX as u64 {
            return Err(err::AtomDBError::AtomsExhausted);
        }
        self.next = (last + 1) as Atom;
        Ok(first as Atom..=last as Atom)
    }
}

/// The atoms linked by a gadget.
///
/// The fresh atoms of a chain are contiguous, from `first` to `last` (inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chain {
    /// The atom whose occurrences were rewritten.
    pub origin: Atom,

    /// The fresh atom at the second occurrence of the origin.
    pub first: Atom,

    /// The fresh atom at the final occurrence of the origin.
    pub last: Atom,
}

impl Chain {
    /// The fresh atoms of the chain.
    pub fn fresh_atoms(&self) -> RangeInclusive<Atom> {
        self.first..=self.last
    }

    /// A count of the fresh atoms of the chain.
    pub fn len(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    /// The implications of the chain, as clauses, in the order they are added to a database.
    pub fn implications(&self) -> impl Iterator<Item = [CLiteral; 2]> + '_ {
        let head = std::iter::once((self.origin, self.first));
        let links = (self.first..self.last).map(|atom| (atom, atom + 1));
        let tail = std::iter::once((self.last, self.origin));

        head.chain(links)
            .chain(tail)
            .map(|(a, b)| [CLiteral::new(a, false), CLiteral::new(b, true)])
    }
}

/// Builds a gadget for `origin` from the given positions of its occurrences, in store order.
///
/// Returns the chain built, or nothing if there are fewer than two positions (as there is nothing to rewrite).
/// If the source of fresh atoms is exhausted the database is unchanged.
pub fn build_gadget(
    clause_db: &mut ClauseDB,
    origin: Atom,
    positions: &[usize],
    fresh: &mut FreshAtoms,
) -> Result<Option<Chain>, err::AtomDBError> {
    let [_kept, rewrites @ ..] = positions else {
        return Ok(None);
    };
    if rewrites.is_empty() {
        return Ok(None);
    }

    let fresh_atoms = fresh.fresh_range(rewrites.len())?;
    let chain = Chain {
        origin,
        first: *fresh_atoms.start(),
        last: *fresh_atoms.end(),
    };

    let literals = clause_db.literals_mut();
    for (position, atom) in rewrites.iter().zip(fresh_atoms) {
        let literal = &mut literals[*position];
        debug_assert_eq!(literal.atom(), origin);
        *literal = CLiteral::new(atom, literal.polarity());
    }

    clause_db.add_implication(origin, chain.first);
    for atom in chain.first..chain.last {
        clause_db.add_implication(atom, atom + 1);
    }
    clause_db.add_implication(chain.last, origin);

    log::trace!(target: targets::GADGET, "{origin} linked with {} ..= {}", chain.first, chain.last);
    Ok(Some(chain))
}
