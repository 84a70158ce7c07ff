//! # BigInt
//! Arbitrary-precision signed integers stored as a sign plus a magnitude of
//! 32-bit limbs, least significant limb first. Bitwise operations behave as
//! if the value were held in infinite-precision two's complement.
//!
//! Canonical form: the most significant limb is never zero, and zero is the
//! empty magnitude with `signum == 0`. Every constructor and operation
//! returns values in canonical form.
//!
//! # Example
//! ```
//! use sm_bigint::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "10900000000000");
//! assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
//! assert_eq!((&a / &b).to_string(), "11");
//! assert_eq!((&a % &b).to_string(), "100000000000");
//! assert_eq!((&a << 10).to_string(), "10240000000000000");
//! assert_eq!((-&a >> 10).to_string(), "-9765625000");
//! ```

use std::cmp::Ordering;
use std::convert::TryFrom;

use crate::error::BigIntError;

mod add;
mod bitwise;
mod div;
mod gcd_pow;
mod mul;
mod ops;
mod radix;
mod shift;

pub use add::{add, neg, sub};
pub use bitwise::{and, not, or, xor};
pub use div::{div, div_mod, rem, DivModResult};
pub use gcd_pow::{gcd, pow};
pub use mul::{mul, square};
pub use shift::shift;

pub const ZERO: BigInt = BigInt { signum: 0, mag: Vec::new() };

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// -1, 0 or 1; 0 exactly when `mag` is empty.
    pub(crate) signum: i8,
    /// Little-endian limbs, no trailing zero limb.
    pub(crate) mag: Vec<u32>,
}

// 杂项辅助函数

/// Drops high zero limbs from a borrowed window.
pub(crate) fn trim(mag: &[u32]) -> &[u32] {
    let len = mag.iter().rposition(|&x| x != 0).map_or(0, |i| i + 1);
    &mag[..len]
}

pub(crate) fn trim_vec(mag: &mut Vec<u32>) {
    let len = trim(mag).len();
    mag.truncate(len);
}

/// Compares two trimmed magnitudes.
pub(crate) fn cmp_mag(x: &[u32], y: &[u32]) -> Ordering {
    if x.len() != y.len() {
        return x.len().cmp(&y.len());
    }
    for (a, b) in x.iter().rev().zip(y.iter().rev()) {
        if a != b {
            return a.cmp(b);
        }
    }
    Ordering::Equal
}

// 实现构造
impl BigInt {
    /// Builds a value from a raw magnitude, restoring canonical form.
    /// `signum` only contributes its sign; a zero magnitude always yields zero.
    pub(crate) fn new(mut mag: Vec<u32>, signum: i8) -> BigInt {
        trim_vec(&mut mag);
        if mag.is_empty() {
            return ZERO;
        }
        if mag.capacity() > mag.len() {
            mag.shrink_to_fit();
        }
        BigInt { signum: if signum < 0 { -1 } else { 1 }, mag }
    }

    /// Takes ownership of a little-endian limb buffer.
    ///
    /// ```
    /// use sm_bigint::BigInt;
    ///
    /// let x = BigInt::from_sign_limbs(true, vec![0, 1, 0]);
    /// assert_eq!(x, BigInt::from(-(1_i64 << 32)));
    /// assert_eq!(x.limbs(), &[0, 1]);
    /// ```
    pub fn from_sign_limbs(negative: bool, limbs: Vec<u32>) -> BigInt {
        BigInt::new(limbs, if negative { -1 } else { 1 })
    }

    fn value_of(val: u64, negative: bool) -> BigInt {
        let low = val as u32;
        let high = (val >> 32) as u32;
        let mag = if high == 0 { vec![low] } else { vec![low, high] };
        BigInt::from_sign_limbs(negative, mag)
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of((val as i64).unsigned_abs(), val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

impl Default for BigInt {
    fn default() -> Self {
        ZERO
    }
}

// 访问
impl BigInt {
    /// -1, 0 or 1.
    pub fn signum(&self) -> i32 {
        self.signum as i32
    }

    pub fn is_zero(&self) -> bool {
        self.signum == 0
    }

    pub fn is_negative(&self) -> bool {
        self.signum < 0
    }

    /// Magnitude limbs, least significant first.
    pub fn limbs(&self) -> &[u32] {
        &self.mag
    }

    /// Splits into `(negative, limbs)`, giving up the buffer.
    pub fn into_parts(self) -> (bool, Vec<u32>) {
        (self.signum < 0, self.mag)
    }

    /// Number of significant bits in the magnitude; 0 for zero.
    pub fn bit_length(&self) -> u64 {
        match self.mag.last() {
            None => 0,
            Some(top) => {
                (self.mag.len() as u64 - 1) * 32 + (32 - top.leading_zeros()) as u64
            }
        }
    }

    pub fn abs(&self) -> BigInt {
        self.clone().abs_take()
    }

    pub(crate) fn abs_take(mut self) -> BigInt {
        self.signum = self.signum.abs();
        self
    }

    /// Magnitude of a value with at most two limbs.
    pub(crate) fn low_u64(&self) -> u64 {
        match self.mag.len() {
            0 => 0,
            1 => self.mag[0] as u64,
            _ => ((self.mag[1] as u64) << 32) | self.mag[0] as u64,
        }
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = BigIntError;

    fn try_from(val: &BigInt) -> Result<i64, BigIntError> {
        if val.mag.len() > 2 {
            return Err(BigIntError::OutOfRange);
        }
        let mag = val.low_u64();
        if val.signum < 0 {
            if mag > i64::MAX as u64 + 1 {
                return Err(BigIntError::OutOfRange);
            }
            Ok((mag as i64).wrapping_neg())
        } else {
            i64::try_from(mag).map_err(|_| BigIntError::OutOfRange)
        }
    }
}

// 实现大小比较
impl BigInt {
    /// Compares against a machine integer without allocating.
    pub fn cmp_i64(&self, other: i64) -> Ordering {
        let other_signum = other.signum() as i8;
        match self.signum.cmp(&other_signum) {
            Ordering::Equal => {}
            ord => return ord,
        }
        if self.signum == 0 {
            return Ordering::Equal;
        }
        let mag_ord = if self.mag.len() > 2 {
            Ordering::Greater
        } else {
            self.low_u64().cmp(&other.unsigned_abs())
        };
        if self.signum > 0 {
            mag_ord
        } else {
            mag_ord.reverse()
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum.cmp(&other.signum) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.signum {
            0 => Ordering::Equal,
            1 => cmp_mag(&self.mag, &other.mag),
            _ => cmp_mag(&self.mag, &other.mag).reverse(),
        }
    }
}

impl PartialEq<i64> for BigInt {
    fn eq(&self, other: &i64) -> bool {
        self.cmp_i64(*other).is_eq()
    }
}

impl PartialOrd<i64> for BigInt {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp_i64(*other))
    }
}
