/*!
(The representation of) an atom (aka. a 'variable').

Each atom is a positive u32, and the atom `0` is never used.
For, `0` is used by solvers to terminate a clause, and a literal with atom `0` could not be distinguished from its negation.

```rust
# use otter_craig::structures::atom::{Atom, ATOM_MAX};
let atom: Atom = 97;
assert!(atom <= ATOM_MAX);
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, as literals are signed 32-bit integers.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
