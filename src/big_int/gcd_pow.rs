use std::cmp::Ordering;

use super::div::div_rem_mag;
use super::mul::{mul, square};
use super::{cmp_mag, BigInt, ZERO};
use crate::big_num_cache::ONE;
use crate::error::BigIntError;
use crate::operand::Operand;

// 实现最大公约数

/// Greatest common divisor of `|a|` and `|b|` by Euclid's algorithm.
/// `gcd(0, v) == |v|`.
///
/// ```
/// use sm_bigint::{gcd, BigInt};
///
/// assert_eq!(gcd(BigInt::from(48), BigInt::from(-18)), BigInt::from(6));
/// ```
pub fn gcd<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> BigInt {
    let mut a = a.into().into_owned().mag;
    let mut b = b.into().into_owned().mag;
    if cmp_mag(&a, &b) == Ordering::Less {
        std::mem::swap(&mut a, &mut b);
    }
    while !b.is_empty() {
        let (_, r) = div_rem_mag(a, &b, true);
        a = b;
        b = r;
        super::trim_vec(&mut b);
    }
    BigInt::new(a, 1)
}

// 实现幂运算

/// `base^exp` for an exponent in `0..2^64`.
///
/// Fails with [`BigIntError::ExponentOutOfRange`] when `exp` is negative
/// or wider than two limbs.
pub fn pow<'a, 'b>(
    base: impl Into<Operand<'a>>,
    exp: impl Into<Operand<'b>>,
) -> Result<BigInt, BigIntError> {
    let base = base.into();
    let exp = exp.into();
    if exp.is_negative() || exp.mag.len() > 2 {
        return Err(BigIntError::ExponentOutOfRange);
    }
    Ok(base.into_owned().pow_u64(exp.low_u64()))
}

impl BigInt {
    /// Binary exponentiation, squaring the running base.
    ///
    /// ```
    /// use sm_bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(2).pow_u64(100).to_string(), "1267650600228229401496703205376");
    /// assert_eq!(BigInt::from(-3).pow_u64(3), BigInt::from(-27));
    /// ```
    pub fn pow_u64(self, mut exp: u64) -> BigInt {
        let mut result = ONE.clone();
        if exp == 0 {
            return result;
        }
        if self.is_zero() {
            return ZERO;
        }
        let mut base = self;
        loop {
            if exp & 1 == 1 {
                result = mul(result, &base);
            }
            exp >>= 1;
            if exp == 0 {
                return result;
            }
            base = square(base);
        }
    }
}
