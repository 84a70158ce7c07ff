use super::add::{dec_mag, inc_mag};
use super::BigInt;
use crate::big_num_cache::NEG_ONE;
use crate::operand::Operand;

// 实现位运算
//
// Values are combined as if stored in infinite-precision two's complement.
// Only the limbs below the longest relevant operand are materialised; the
// limbs above are the sign extension, 0 or !0.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    fn apply(self, x: u32, y: u32) -> u32 {
        match self {
            BitOp::And => x & y,
            BitOp::Or => x | y,
            BitOp::Xor => x ^ y,
        }
    }
}

fn sign_extension(negative: bool) -> u32 {
    if negative {
        u32::MAX
    } else {
        0
    }
}

/// Negates a little-endian limb sequence modulo `2^(32 * len)`: the first
/// non-zero limb is negated and every limb above it complemented. Returns
/// true when the sequence was all zero, i.e. the negation carries out.
fn negate_limbs(limbs: &mut [u32]) -> bool {
    let first = match limbs.iter().position(|&x| x != 0) {
        Some(first) => first,
        None => return true,
    };
    limbs[first] = limbs[first].wrapping_neg();
    for x in &mut limbs[first + 1..] {
        *x = !*x;
    }
    false
}

/// Read-only two's-complement view of a value, limb by limb.
struct TwosComplement<'a> {
    mag: &'a [u32],
    negative: bool,
    first_nonzero: usize,
}

impl<'a> TwosComplement<'a> {
    fn new(val: &'a BigInt) -> Self {
        TwosComplement {
            mag: &val.mag,
            negative: val.is_negative(),
            first_nonzero: val.mag.iter().position(|&x| x != 0).unwrap_or(0),
        }
    }

    fn limb(&self, i: usize) -> u32 {
        if i >= self.mag.len() {
            return sign_extension(self.negative);
        }
        if !self.negative || i < self.first_nonzero {
            return self.mag[i];
        }
        if i == self.first_nonzero {
            self.mag[i].wrapping_neg()
        } else {
            !self.mag[i]
        }
    }
}

/// Re-encodes a two's-complement limb pattern with the given sign extension.
/// An all-zero pattern under a negative extension is `-2^(32 * len)`.
fn from_twos_complement(mut limbs: Vec<u32>, negative: bool) -> BigInt {
    if !negative {
        return BigInt::new(limbs, 1);
    }
    if negate_limbs(&mut limbs) {
        limbs.push(1);
    }
    BigInt::new(limbs, -1)
}

fn bitwise<'a>(op: BitOp, a: Operand<'a>, b: Operand<'a>) -> BigInt {
    // every op is symmetric, so the owned operand (if any) goes first
    let (mut a, b) = if !a.is_owned() && b.is_owned() { (b, a) } else { (a, b) };
    let a_negative = a.is_negative();
    let b_negative = b.is_negative();
    let extension = op.apply(sign_extension(a_negative), sign_extension(b_negative));

    // AND with a non-negative operand cannot set a bit above that operand
    let len = match (op, a_negative, b_negative) {
        (BitOp::And, false, false) => a.mag.len().min(b.mag.len()),
        (BitOp::And, false, true) => a.mag.len(),
        (BitOp::And, true, false) => b.mag.len(),
        _ => a.mag.len().max(b.mag.len()),
    };

    let mut acc = match a.take_mag() {
        Some(mag) => mag,
        None => {
            let mut mag = Vec::with_capacity(len + 1);
            mag.extend_from_slice(&a.mag[..a.mag.len().min(len)]);
            mag
        }
    };
    acc.resize(len, 0);
    if a_negative {
        negate_limbs(&mut acc);
    }

    let view = TwosComplement::new(&b);
    for (i, x) in acc.iter_mut().enumerate() {
        *x = op.apply(*x, view.limb(i));
    }
    from_twos_complement(acc, extension != 0)
}

/// Bitwise AND in two's complement.
///
/// ```
/// use sm_bigint::{and, BigInt};
///
/// assert_eq!(and(BigInt::from(-6), BigInt::from(7)), BigInt::from(2));
/// ```
pub fn and<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> BigInt {
    bitwise(BitOp::And, a.into(), b.into())
}

/// Bitwise OR in two's complement.
pub fn or<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> BigInt {
    bitwise(BitOp::Or, a.into(), b.into())
}

/// Bitwise XOR in two's complement.
pub fn xor<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> BigInt {
    bitwise(BitOp::Xor, a.into(), b.into())
}

/// Bitwise NOT, `-a - 1`.
pub fn not<'a>(a: impl Into<Operand<'a>>) -> BigInt {
    let a = a.into();
    match a.signum {
        0 => NEG_ONE.clone(),
        1 => {
            let mut mag = a.into_owned().mag;
            inc_mag(&mut mag);
            BigInt::new(mag, -1)
        }
        _ => {
            let mut mag = a.into_owned().mag;
            dec_mag(&mut mag);
            BigInt::new(mag, 1)
        }
    }
}
