/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is a vector of optional booleans, where:
- The zero index (first) element is the sentinel and is always `Some(true)`.
- Each non-zero index *a* holds the value of atom *a*: `Some(true)`, `Some(false)`, or `None` if *a* is unassigned.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use trail_sat::structures::valuation::Valuation;
let valuation = vec![Some(true), None, Some(false), None];

assert_eq!(valuation.value_of(2), Some(Some(false)));
assert_eq!(valuation.unvalued_atoms().collect::<Vec<_>>(), vec![1, 3]);
```

As the sentinel is valued, iterators over unvalued atoms never return it.
*/

use super::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of a atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of a atom under the valuation, or otherwise nothing if the atom is not part of the valuation.
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;

    /// An iterator through all (Atom, Value) pairs, excluding the sentinel.
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)>;

    /// An iterator through atoms which do not have some value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// A count of all the atoms in the valuation (excluding the sentinel).
    fn atom_count(&self) -> usize;
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        self.get(atom as usize).copied()
    }

    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)> {
        self.iter()
            .enumerate()
            .skip(1)
            .map(|(atom, value)| (atom as Atom, *value))
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .filter_map(|(atom, value)| match value {
                None => Some(atom as Atom),
                _ => None,
            })
    }

    fn atom_count(&self) -> usize {
        self.len().saturating_sub(1)
    }
}
