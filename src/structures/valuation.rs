/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is a vector of optional booleans, where:
- The zero index (first) element is unused, as no atom is zero.
- Each non-zero index of the vector is interpreted as an atom.

In other words, the canonical representation of a valuation 𝐯 is a vector *v* such that:
-  *v*\[a\] = Some(true) *if any only if* 𝐯(a) = true.
-  *v*\[a\] = Some(false) *if any only if* 𝐯(a) = false.
-  *v*\[a\] = None *if any only if* 𝐯(a) is undefined, or a is not an index of *v*.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use three_occ::structures::valuation::Valuation;
let valuation = vec![None, Some(true), None, Some(false)];

assert_eq!(valuation.value_of(1), Some(true));
assert_eq!(valuation.value_of(2), None);
assert_eq!(valuation.value_of(7), None);
assert_eq!(valuation.atom_valued_pairs().count(), 2);
```
*/

use super::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of a atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// The value of an atom under the valuation, if any.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// An iterator through all (Atom, Value) pairs for such that the atom has some value.
    fn atom_valued_pairs(&self) -> impl Iterator<Item = (Atom, bool)>;
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn atom_valued_pairs(&self) -> impl Iterator<Item = (Atom, bool)> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| value.map(|v| (atom as Atom, v)))
    }
}
