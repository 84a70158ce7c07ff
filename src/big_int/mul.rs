use super::add::{add_assign_mag, add_shifted, sub_assign_mag};
use super::{trim, trim_vec, BigInt, ZERO};
use crate::big_num_constants::*;
use crate::operand::Operand;
use crate::LOG_TARGET;

// 实现乘法

/// Grade-school product computed in place: on entry `acc` holds `x`, on
/// exit it holds `x * y` (untrimmed, `x.len() + y.len()` limbs).
///
/// Limbs of `x` are consumed from the top down. When limb `l` is read it is
/// cleared, so every slot at or above `l` is an accumulator and the partial
/// product `x[l] * y` can be added at offset `l` without disturbing any
/// limb of `x` that is still to come.
fn mul_to_len_in_place(acc: &mut Vec<u32>, y: &[u32]) {
    let x_len = acc.len();
    let y_len = y.len();
    acc.resize(x_len + y_len, 0);
    for l in (0..x_len).rev() {
        let piece = acc[l] as u64;
        acc[l] = 0;
        if piece == 0 {
            continue;
        }
        let mut carry: u64 = 0;
        for (r, &y_val) in y.iter().enumerate() {
            let product = piece * y_val as u64 + acc[l + r] as u64 + carry;
            acc[l + r] = product as u32;
            carry = product >> 32;
        }
        let mut k = l + y_len;
        while carry != 0 {
            let sum = acc[k] as u64 + carry;
            acc[k] = sum as u32;
            carry = sum >> 32;
            k += 1;
        }
    }
}

fn mul_to_len(x: &[u32], y: &[u32]) -> Vec<u32> {
    let mut z = Vec::with_capacity(x.len() + y.len());
    z.extend_from_slice(x);
    mul_to_len_in_place(&mut z, y);
    z
}

/// Product of two magnitudes (trimmed result), picking the algorithm by size.
pub(crate) fn mul_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
    let (big, little) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    if little.is_empty() {
        return Vec::new();
    }
    let mut z = if big.len() > KARATSUBA_THRESHOLD {
        mul_karatsuba(big, little)
    } else {
        mul_to_len(big, little)
    };
    trim_vec(&mut z);
    z
}

/// Karatsuba multiplication, `big.len() >= little.len()`.
///
/// `big` is split at `half = big.len() / 2` into two borrowed windows. If
/// `little` does not reach past the split point only `big` is split:
/// `big * little = hi*little * B^half + lo*little`. Otherwise both are split
/// and three half-size products give the result:
///
/// ```text
/// low  = lo_a * lo_b
/// high = hi_a * hi_b
/// mid  = (hi_a + lo_a) * (hi_b + lo_b) - high - low
/// res  = high * B^(2*half) + mid * B^half + low
/// ```
fn mul_karatsuba(big: &[u32], little: &[u32]) -> Vec<u32> {
    tracing::trace!(
        target: LOG_TARGET,
        big = big.len(),
        little = little.len(),
        "karatsuba multiply"
    );
    let half = big.len() / 2;
    let (big_lo, big_hi) = big.split_at(half);
    let big_lo = trim(big_lo);

    let mut result = vec![0u32; big.len() + little.len() + 1];

    if little.len() <= half {
        let high = mul_mag(big_hi, little);
        let low = mul_mag(big_lo, little);
        result[..low.len()].copy_from_slice(&low);
        add_shifted(&mut result, &high, half);
        return result;
    }

    let (little_lo, little_hi) = little.split_at(half);
    let little_lo = trim(little_lo);

    let high = mul_mag(big_hi, little_hi);
    let low = mul_mag(big_lo, little_lo);

    let mut big_sum = big_hi.to_vec();
    add_assign_mag(&mut big_sum, big_lo);
    let mut little_sum = little_hi.to_vec();
    add_assign_mag(&mut little_sum, little_lo);
    let mut mid = mul_mag(&big_sum, &little_sum);
    sub_assign_mag(&mut mid, &high);
    sub_assign_mag(&mut mid, &low);

    result[..low.len()].copy_from_slice(&low);
    result[2 * half..2 * half + high.len()].copy_from_slice(&high);
    add_shifted(&mut result, trim(&mid), half);
    result
}

// 实现平方

/// Square by columns. Every off-diagonal product `x[i] * x[j]` with `i < j`
/// is computed once and doubled; the diagonal squares are added once. A
/// column sums up to `len` 64-bit products, so it is accumulated in 128 bits
/// and the overflow rides along into the next column.
fn square_to_len(x: &[u32]) -> Vec<u32> {
    let len = x.len();
    let mut z = vec![0u32; 2 * len];
    let mut carry: u128 = 0;
    for col in 0..2 * len - 1 {
        let mut cross: u128 = 0;
        let lo = col.saturating_sub(len - 1);
        let mut i = lo;
        while i < col - i {
            cross += x[i] as u128 * x[col - i] as u128;
            i += 1;
        }
        let mut column = carry + (cross << 1);
        if col % 2 == 0 {
            let piece = x[col / 2] as u128;
            column += piece * piece;
        }
        z[col] = column as u32;
        carry = column >> 32;
    }
    z[2 * len - 1] = carry as u32;
    z
}

fn square_karatsuba(x: &[u32]) -> Vec<u32> {
    tracing::trace!(target: LOG_TARGET, len = x.len(), "karatsuba square");
    let half = x.len() / 2;
    let (lo, hi) = x.split_at(half);
    let lo = trim(lo);

    let high = square_mag(hi);
    let low = square_mag(lo);
    let mut sum = hi.to_vec();
    add_assign_mag(&mut sum, lo);
    let mut mid = square_mag(&sum);
    sub_assign_mag(&mut mid, &high);
    sub_assign_mag(&mut mid, &low);

    let mut result = vec![0u32; 2 * x.len() + 1];
    result[..low.len()].copy_from_slice(&low);
    result[2 * half..2 * half + high.len()].copy_from_slice(&high);
    add_shifted(&mut result, trim(&mid), half);
    result
}

pub(crate) fn square_mag(x: &[u32]) -> Vec<u32> {
    if x.is_empty() {
        return Vec::new();
    }
    let mut z = if x.len() > KARATSUBA_SQUARE_THRESHOLD {
        square_karatsuba(x)
    } else {
        square_to_len(x)
    };
    trim_vec(&mut z);
    z
}

/// `a * b`.
///
/// Both operands borrowing the same value is routed to [`square`]. Below the
/// Karatsuba threshold the product is built inside the buffer of an owned
/// operand when there is one.
pub fn mul<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> BigInt {
    let mut a = a.into();
    let mut b = b.into();
    if a.signum == 0 || b.signum == 0 {
        return ZERO;
    }
    if a.same_value(&b) {
        return square(a);
    }
    let signum = a.signum * b.signum;

    if a.mag.len().max(b.mag.len()) > KARATSUBA_THRESHOLD {
        return BigInt::new(mul_karatsuba_dispatch(&a.mag, &b.mag), signum);
    }
    let mag = if let Some(mut mag) = a.take_mag() {
        mul_to_len_in_place(&mut mag, &b.mag);
        mag
    } else if let Some(mut mag) = b.take_mag() {
        mul_to_len_in_place(&mut mag, &a.mag);
        mag
    } else {
        mul_to_len(&a.mag, &b.mag)
    };
    BigInt::new(mag, signum)
}

fn mul_karatsuba_dispatch(x: &[u32], y: &[u32]) -> Vec<u32> {
    if x.len() >= y.len() {
        mul_karatsuba(x, y)
    } else {
        mul_karatsuba(y, x)
    }
}

/// `a * a`.
pub fn square<'a>(a: impl Into<Operand<'a>>) -> BigInt {
    let a = a.into();
    if a.signum == 0 {
        return ZERO;
    }
    BigInt::new(square_mag(&a.mag), 1)
}

/// `mag = mag * factor + addend`, used by radix parsing.
pub(crate) fn mul_add_small(mag: &mut Vec<u32>, factor: u64, addend: u64) {
    let mut carry = addend as u128;
    for x in mag.iter_mut() {
        let product = *x as u128 * factor as u128 + carry;
        *x = product as u32;
        carry = product >> 32;
    }
    while carry != 0 {
        mag.push(carry as u32);
        carry >>= 32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    /// Deterministic limbs with plenty of high bits set.
    fn limbs(len: usize, seed: u32) -> Vec<u32> {
        let mut state = seed as u64 | 1;
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                (state >> 32) as u32 | 1
            })
            .collect()
    }

    #[test]
    fn test_mul_to_len() {
        let a = big("10000000000000000");
        let b = big("30000000000000000");
        let result = big("300000000000000000000000000000000");
        assert_eq!(mul(&a, &b), result);
        assert_eq!(mul(a.clone(), &b), result);
        assert_eq!(mul(&a, b.clone()), result);
        assert_eq!(mul(a, b), result);
    }

    #[test]
    fn test_mul_signs() {
        assert_eq!(mul(BigInt::from(-3), BigInt::from(7)), BigInt::from(-21));
        assert_eq!(mul(BigInt::from(-3), BigInt::from(-7)), BigInt::from(21));
        assert_eq!(mul(BigInt::from(-3), ZERO), ZERO);
        assert_eq!(mul(ZERO, BigInt::from(-3)).signum, 0);
    }

    #[test]
    fn test_mul_max_limbs() {
        let x = vec![u32::MAX; 5];
        let y = vec![u32::MAX; 3];
        // (B^5 - 1)(B^3 - 1) = B^8 - B^5 - B^3 + 1
        let z = mul_mag(&x, &y);
        assert_eq!(z, vec![1, 0, 0, u32::MAX, u32::MAX, u32::MAX - 1, u32::MAX, u32::MAX]);
    }

    #[test]
    fn test_square() {
        let x = vec![u32::MAX; 4];
        assert_eq!(square_mag(&x), mul_to_len(&x, &x));
        let a = big("-12345678901234567890123456789");
        let expected = big("152415787532388367504953515625361987875019051998750190521");
        assert_eq!(square(&a), expected);
        assert_eq!(mul(&a, &a), expected);
        for len in [1, 2, 7, 31, 48, 49, 97, 130] {
            let x = limbs(len, len as u32);
            let mut expected = mul_to_len(&x, &x);
            trim_vec(&mut expected);
            assert_eq!(square_mag(&x), expected, "len = {}", len);
        }
    }

    #[test]
    fn test_mul_karatsuba() {
        let shapes = [(31, 31), (31, 2), (40, 15), (40, 25), (64, 64), (100, 51), (150, 120)];
        for &(x_len, y_len) in &shapes {
            let x = limbs(x_len, 7);
            let y = limbs(y_len, 11);
            let mut expected = mul_to_len(&x, &y);
            trim_vec(&mut expected);
            let mut z = mul_karatsuba_dispatch(&x, &y);
            trim_vec(&mut z);
            assert_eq!(z, expected);
            assert_eq!(mul_mag(&x, &y), expected, "{} x {}", x_len, y_len);
            assert_eq!(mul_mag(&y, &x), expected);
        }
    }

    #[test]
    fn test_mul_karatsuba_zero_half() {
        // low half entirely zero: the split windows trim down to nothing
        let mut x = vec![0u32; 40];
        x.extend(limbs(40, 3));
        let y = limbs(60, 5);
        let mut expected = mul_to_len(&x, &y);
        trim_vec(&mut expected);
        assert_eq!(mul_mag(&x, &y), expected);
    }

    #[test]
    fn test_mul_add_small() {
        let mut mag = vec![u32::MAX];
        mul_add_small(&mut mag, 1 << 32, 7);
        assert_eq!(mag, vec![7, u32::MAX]);
        let mut mag = Vec::new();
        mul_add_small(&mut mag, 10, 0);
        assert!(mag.is_empty());
    }
}
