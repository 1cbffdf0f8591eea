//! Literals are atoms paired with a (boolean) polarity.
//!
//! The canonical representation of a literal is as a signed integer, with the magnitude of the integer giving the atom and the sign the polarity.
//!
//! ```rust
//! # use otter_craig::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, false);
//!
//! assert_eq!(literal, -79);
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.polarity());
//! assert!(literal.negate().polarity());
//! ```
//!
//! The integer `0` is not a literal, and is used only as a delimiter by solvers.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in it's integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn as_int(&self) -> isize {
        *self as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_and_atom() {
        let p = CLiteral::new(3, true);
        let not_p = CLiteral::new(3, false);

        assert_eq!(p, 3);
        assert_eq!(not_p, -3);
        assert_eq!(p.negate(), not_p);
        assert_eq!(p.atom(), not_p.atom());
        assert_ne!(p.polarity(), not_p.polarity());
    }
}
