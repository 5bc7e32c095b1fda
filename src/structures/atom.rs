/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *a* with 1 ≤ *a* ≤ *n*, where *n* is the literal count declared by the header of a formula.

The atom `0` is never part of a formula.
It is reserved as a sentinel, so that atoms may be used directly as indicies of structures sized *n + 1*.

```rust
# use trail_sat::structures::atom::{Atom, SENTINEL_ATOM};
let atoms = (1..=3).collect::<Vec<Atom>>();
assert!(!atoms.contains(&SENTINEL_ATOM));
```

# Notes
In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The reserved atom at index zero.
pub const SENTINEL_ATOM: Atom = 0;

