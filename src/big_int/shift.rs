use super::add::{dec_mag, inc_mag};
use super::{trim_vec, BigInt, ZERO};
use crate::big_num_cache::NEG_ONE;
use crate::operand::Operand;

// 实现左移

/// Shifts the magnitude left by `n` bits in place.
fn shl_mag(mag: &mut Vec<u32>, n: u64) {
    let n_ints = (n >> 5) as usize;
    let n_bits = (n & 0x1f) as u32;
    if n_bits != 0 {
        let n_bits_2 = 32 - n_bits;
        let mut carry = 0u32;
        for x in mag.iter_mut() {
            let val = *x;
            *x = (val << n_bits) | carry;
            carry = val >> n_bits_2;
        }
        if carry != 0 {
            mag.push(carry);
        }
    }
    if n_ints != 0 {
        mag.splice(0..0, std::iter::repeat(0).take(n_ints));
    }
}

// 实现右移

/// Shifts the magnitude right by `n` bits in place, dropping the low bits.
fn shr_mag(mag: &mut Vec<u32>, n: u64) {
    let n_ints = n >> 5;
    if n_ints >= mag.len() as u64 {
        mag.clear();
        return;
    }
    let n_ints = n_ints as usize;
    let n_bits = (n & 0x1f) as u32;
    mag.drain(..n_ints);
    if n_bits != 0 {
        let n_bits_2 = 32 - n_bits;
        let len = mag.len();
        for i in 0..len {
            let high = if i + 1 < len { mag[i + 1] << n_bits_2 } else { 0 };
            mag[i] = (mag[i] >> n_bits) | high;
        }
    }
    trim_vec(mag);
}

/// Arithmetic shift: left for positive `amount`, right for negative.
///
/// Right shifts round toward negative infinity, so for negative values
/// `(-a) >> n == -(((a - 1) >> n) + 1)`.
///
/// ```
/// use sm_bigint::{shift, BigInt};
///
/// assert_eq!(shift(BigInt::from(-5), -1), BigInt::from(-3));
/// assert_eq!(shift(BigInt::from(5), -1), BigInt::from(2));
/// assert_eq!(shift(&BigInt::from(1), 64).to_string(), "18446744073709551616");
/// ```
pub fn shift<'a>(a: impl Into<Operand<'a>>, amount: i64) -> BigInt {
    let a = a.into();
    let signum = a.signum;
    if signum == 0 {
        return ZERO;
    }
    if amount == 0 {
        return a.into_owned();
    }
    let n = amount.unsigned_abs();
    if amount > 0 {
        let mut mag = match a {
            Operand::Owned(val) => val.mag,
            Operand::Borrowed(val) => {
                let mut mag = Vec::with_capacity(val.mag.len() + (n >> 5) as usize + 1);
                mag.extend_from_slice(&val.mag);
                mag
            }
        };
        shl_mag(&mut mag, n);
        return BigInt::new(mag, signum);
    }

    if signum < 0 && n >> 5 >= a.mag.len() as u64 {
        return NEG_ONE.clone();
    }
    let mut mag = a.into_owned().mag;
    if signum > 0 {
        shr_mag(&mut mag, n);
        return BigInt::new(mag, 1);
    }
    dec_mag(&mut mag);
    shr_mag(&mut mag, n);
    inc_mag(&mut mag);
    BigInt::new(mag, -1)
}
