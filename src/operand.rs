//! Ownership of operation arguments.
//!
//! Every arithmetic entry point takes its arguments as [`Operand`]s. An
//! `Owned` operand has been given up by the caller: the operation may grow,
//! rewrite or drop its limb buffer while producing the result. A `Borrowed`
//! operand is left untouched; when its storage is needed the operation
//! clones it.

use std::ops::Deref;

use crate::big_int::BigInt;

#[derive(Debug)]
pub enum Operand<'a> {
    Owned(BigInt),
    Borrowed(&'a BigInt),
}

impl<'a> Operand<'a> {
    pub fn is_owned(&self) -> bool {
        matches!(self, Operand::Owned(_))
    }

    /// Takes the value, cloning only when it was borrowed.
    pub fn into_owned(self) -> BigInt {
        match self {
            Operand::Owned(val) => val,
            Operand::Borrowed(val) => val.clone(),
        }
    }

    /// Hands out the limb buffer for reuse, or `None` when borrowed.
    pub(crate) fn take_mag(&mut self) -> Option<Vec<u32>> {
        match self {
            Operand::Owned(val) => Some(std::mem::take(&mut val.mag)),
            Operand::Borrowed(_) => None,
        }
    }

    /// True when both operands are borrows of the same value.
    pub(crate) fn same_value(&self, other: &Operand<'_>) -> bool {
        match (self, other) {
            (Operand::Borrowed(a), Operand::Borrowed(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl Deref for Operand<'_> {
    type Target = BigInt;

    fn deref(&self) -> &BigInt {
        match self {
            Operand::Owned(val) => val,
            Operand::Borrowed(val) => val,
        }
    }
}

impl From<BigInt> for Operand<'_> {
    fn from(val: BigInt) -> Self {
        Operand::Owned(val)
    }
}

impl<'a> From<&'a BigInt> for Operand<'a> {
    fn from(val: &'a BigInt) -> Self {
        Operand::Borrowed(val)
    }
}

impl<'a> From<&'a mut BigInt> for Operand<'a> {
    fn from(val: &'a mut BigInt) -> Self {
        Operand::Borrowed(val)
    }
}
