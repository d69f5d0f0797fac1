/*!
(The representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that:
- *u* is not 0, and
- *u* is at most [ATOM_MAX].

The atom `0` is never part of a formula.
In the DIMACS representation `0` terminates a clause, and in a [valuation](crate::structures::valuation) the zero index is unused.

```rust
# use three_occ::structures::atom::{Atom, ATOM_MAX};
let atoms = (1..=97).collect::<Vec<Atom>>();

assert!(atoms.iter().all(|atom| *atom <= ATOM_MAX));
```

Atoms are bounded by the magnitude of an [integer literal](crate::structures::literal), so that every atom may appear with either polarity.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
