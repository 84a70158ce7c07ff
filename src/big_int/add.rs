use std::cmp::Ordering;

use super::{cmp_mag, BigInt, ZERO};
use crate::operand::Operand;

// 实现加法

/// `acc += other`, growing `acc` as needed.
pub(crate) fn add_assign_mag(acc: &mut Vec<u32>, other: &[u32]) {
    if acc.len() < other.len() {
        acc.resize(other.len(), 0);
    }
    let mut carry: u64 = 0;
    for (x, &y) in acc.iter_mut().zip(other.iter()) {
        let sum = *x as u64 + y as u64 + carry;
        *x = sum as u32;
        carry = sum >> 32;
    }
    let mut i = other.len();
    while carry != 0 && i < acc.len() {
        let sum = acc[i] as u64 + carry;
        acc[i] = sum as u32;
        carry = sum >> 32;
        i += 1;
    }
    if carry != 0 {
        acc.push(carry as u32);
    }
}

/// `acc -= other`; requires `|acc| >= |other|`.
pub(crate) fn sub_assign_mag(acc: &mut [u32], other: &[u32]) {
    let mut borrow: i64 = 0;
    for (x, &y) in acc.iter_mut().zip(other.iter()) {
        let diff = *x as i64 - y as i64 + borrow;
        *x = diff as u32;
        borrow = diff >> 32;
    }
    let mut i = other.len();
    while borrow != 0 && i < acc.len() {
        let diff = acc[i] as i64 + borrow;
        acc[i] = diff as u32;
        borrow = diff >> 32;
        i += 1;
    }
    debug_assert!(borrow == 0, "magnitude underflow");
}

/// `acc = other - acc`; requires `|other| >= |acc|`.
pub(crate) fn rev_sub_assign_mag(acc: &mut Vec<u32>, other: &[u32]) {
    acc.resize(other.len(), 0);
    let mut borrow: i64 = 0;
    for (x, &y) in acc.iter_mut().zip(other.iter()) {
        let diff = y as i64 - *x as i64 + borrow;
        *x = diff as u32;
        borrow = diff >> 32;
    }
    debug_assert!(borrow == 0, "magnitude underflow");
}

/// Adds `other << (32 * offset)` into a buffer that is long enough to hold the sum.
pub(crate) fn add_shifted(acc: &mut [u32], other: &[u32], offset: usize) {
    let mut carry: u64 = 0;
    for (x, &y) in acc[offset..].iter_mut().zip(other.iter()) {
        let sum = *x as u64 + y as u64 + carry;
        *x = sum as u32;
        carry = sum >> 32;
    }
    let mut i = offset + other.len();
    while carry != 0 {
        let sum = acc[i] as u64 + carry;
        acc[i] = sum as u32;
        carry = sum >> 32;
        i += 1;
    }
}

/// `mag += 1`.
pub(crate) fn inc_mag(mag: &mut Vec<u32>) {
    for x in mag.iter_mut() {
        let (val, overflow) = x.overflowing_add(1);
        *x = val;
        if !overflow {
            return;
        }
    }
    mag.push(1);
}

/// `mag -= 1`; `mag` must be non-zero.
pub(crate) fn dec_mag(mag: &mut Vec<u32>) {
    for x in mag.iter_mut() {
        let (val, underflow) = x.overflowing_sub(1);
        *x = val;
        if !underflow {
            break;
        }
    }
    super::trim_vec(mag);
}

/// Signed addition of `a` and `b`, with `b`'s sign flipped when `negate_b`.
/// Reuses the buffer of whichever operand is owned.
fn add_signed(mut a: Operand<'_>, mut b: Operand<'_>, negate_b: bool) -> BigInt {
    let a_signum = a.signum;
    let b_signum = if negate_b { -b.signum } else { b.signum };

    if b_signum == 0 {
        return a.into_owned();
    }
    if a_signum == 0 {
        let mut result = b.into_owned();
        result.signum = b_signum;
        return result;
    }

    if a_signum == b_signum {
        let mag = if let Some(mut mag) = a.take_mag() {
            add_assign_mag(&mut mag, &b.mag);
            mag
        } else if let Some(mut mag) = b.take_mag() {
            add_assign_mag(&mut mag, &a.mag);
            mag
        } else {
            let (big, little) = if a.mag.len() >= b.mag.len() {
                (&a.mag, &b.mag)
            } else {
                (&b.mag, &a.mag)
            };
            let mut mag = Vec::with_capacity(big.len() + 1);
            mag.extend_from_slice(big);
            add_assign_mag(&mut mag, little);
            mag
        };
        return BigInt::new(mag, a_signum);
    }

    // Mixed signs: subtract the smaller magnitude from the larger one.
    let (signum, a_is_big) = match cmp_mag(&a.mag, &b.mag) {
        Ordering::Equal => return ZERO,
        Ordering::Greater => (a_signum, true),
        Ordering::Less => (b_signum, false),
    };
    let mag = if let Some(mut mag) = a.take_mag() {
        if a_is_big {
            sub_assign_mag(&mut mag, &b.mag);
        } else {
            rev_sub_assign_mag(&mut mag, &b.mag);
        }
        mag
    } else if let Some(mut mag) = b.take_mag() {
        if a_is_big {
            rev_sub_assign_mag(&mut mag, &a.mag);
        } else {
            sub_assign_mag(&mut mag, &a.mag);
        }
        mag
    } else {
        let (big, little) = if a_is_big { (&a.mag, &b.mag) } else { (&b.mag, &a.mag) };
        let mut mag = big.clone();
        sub_assign_mag(&mut mag, little);
        mag
    };
    BigInt::new(mag, signum)
}

/// `a + b`.
pub fn add<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> BigInt {
    add_signed(a.into(), b.into(), false)
}

// 实现减法

/// `a - b`, computed as `a + (-b)` without materialising `-b`.
pub fn sub<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> BigInt {
    add_signed(a.into(), b.into(), true)
}

// 实现取反

pub fn neg<'a>(a: impl Into<Operand<'a>>) -> BigInt {
    let mut result = a.into().into_owned();
    result.signum = -result.signum;
    result
}
