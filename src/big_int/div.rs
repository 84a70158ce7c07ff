use std::cmp::Ordering;

use super::add::add;
use super::mul::mul;
use super::shift::shift;
use super::sub;
use super::{cmp_mag, trim_vec, BigInt, ZERO};
use crate::big_num_cache::ONE;
use crate::big_num_constants::*;
use crate::error::BigIntError;
use crate::operand::Operand;
use crate::LOG_TARGET;

// 实现除法

/// Quotient and remainder of one division. A part is `None` when it was not
/// requested, or for both parts when the divisor is zero.
#[derive(Debug, Default)]
pub struct DivModResult {
    pub quotient: Option<BigInt>,
    pub remainder: Option<BigInt>,
}

/// Divides `u` in place by a single limb; `u` becomes the (untrimmed)
/// quotient and the remainder is returned.
/// Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1 exercise 16
fn divide_one_word(u: &mut [u32], v: u32) -> u32 {
    let v = v as u64;
    let mut r: u64 = 0;
    for x in u.iter_mut().rev() {
        let sum = (r << 32) | *x as u64;
        *x = (sum / v) as u32;
        r = sum % v;
    }
    r as u32
}

/// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1.
/// `u.len() >= v.len() >= 2`, both trimmed. Returns `(quotient, remainder)`, untrimmed.
fn divide_knuth(u: &[u32], v: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let n = v.len();
    let m = u.len() - n;

    // D1 normalize: shift so the top limb of v has its high bit set,
    // which keeps every qhat estimate at most 2 too large
    let s = v[n - 1].leading_zeros();
    let vn = shl_bits(v, s, false);
    let mut un = shl_bits(u, s, true);

    let b: u64 = 1 << 32;
    let v_top = vn[n - 1] as u64;
    let v_next = vn[n - 2] as u64;
    let mut q = vec![0u32; m + 1];

    // D2 loop on j
    for j in (0..=m).rev() {
        // D3 calculate qhat
        let num = ((un[j + n] as u64) << 32) | un[j + n - 1] as u64;
        let mut qhat = num / v_top;
        let mut rhat = num % v_top;
        while qhat >= b || qhat * v_next > ((rhat << 32) | un[j + n - 2] as u64) {
            qhat -= 1;
            rhat += v_top;
            if rhat >= b {
                break;
            }
        }

        // D4 multiply and subtract
        let mut borrow: i64 = 0;
        let mut carry: u64 = 0;
        for i in 0..n {
            let product = qhat * vn[i] as u64 + carry;
            carry = product >> 32;
            let diff = un[i + j] as i64 - (product & 0xffff_ffff) as i64 + borrow;
            un[i + j] = diff as u32;
            borrow = diff >> 32;
        }
        let diff = un[j + n] as i64 - carry as i64 + borrow;
        un[j + n] = diff as u32;

        // D5/D6 test remainder, add back
        if diff < 0 {
            qhat -= 1;
            let mut carry: u64 = 0;
            for i in 0..n {
                let sum = un[i + j] as u64 + vn[i] as u64 + carry;
                un[i + j] = sum as u32;
                carry = sum >> 32;
            }
            un[j + n] = un[j + n].wrapping_add(carry as u32);
        }
        q[j] = qhat as u32;
    }

    // D8 unnormalize
    un.truncate(n);
    if s != 0 {
        for i in 0..n {
            let high = if i + 1 < n { un[i + 1] << (32 - s) } else { 0 };
            un[i] = (un[i] >> s) | high;
        }
    }
    (q, un)
}

/// `x << s` for `s < 32`, with an extra top limb when `extend`.
fn shl_bits(x: &[u32], s: u32, extend: bool) -> Vec<u32> {
    let mut out = Vec::with_capacity(x.len() + 1);
    let mut carry = 0u32;
    for &limb in x {
        if s == 0 {
            out.push(limb);
        } else {
            out.push((limb << s) | carry);
            carry = limb >> (32 - s);
        }
    }
    if extend {
        out.push(carry);
    }
    out
}

/// Approximates `2^precision / d` from below by Newton-Raphson iteration
/// `X' = X + X * (2^precision - d*X) / 2^precision`, stopping once the
/// correction term vanishes. `d` is non-negative with more than two limbs,
/// and `precision >= d.bit_length() + 64`.
fn reciprocal(d: &BigInt, precision: u64) -> BigInt {
    // Seed from the top 64 bits of d, high bit set: 2^127 / (top + 1)
    // underestimates 2^(63 + bits) / d by a relative 2^-62 at most.
    let bits = d.bit_length();
    let top = shift(d, -((bits - 64) as i64)).low_u64();
    let seed = ((1u128 << 127) / (top as u128 + 1)) as u64;
    let mut x = shift(BigInt::from(seed), (precision - 63 - bits) as i64);

    let scale = shift(&*ONE, precision as i64);
    let mut iterations = 0;
    loop {
        let residual = sub(&scale, mul(d, &x));
        let delta = shift(mul(&x, residual), -(precision as i64));
        if delta.is_zero() {
            break;
        }
        x = add(x, delta);
        iterations += 1;
    }
    tracing::trace!(target: LOG_TARGET, iterations, precision, "newton reciprocal converged");
    x
}

/// Division through a reciprocal: `q = floor(a * X / 2^precision)` with
/// `X ~ 2^precision / b`, then the remainder check fixes the last unit.
/// Both operands non-negative, `a >= b`.
fn divide_newton(a: BigInt, b: &BigInt, store_rem: bool) -> (BigInt, BigInt) {
    let precision = 32 * (a.mag.len() as u64 + 2);
    let x = reciprocal(b, precision);
    let mut q = shift(mul(&a, x), -(precision as i64));

    if !store_rem {
        // q is exact or one short; a single comparison settles it
        let next = add(&q, &*ONE);
        if mul(&next, b) <= a {
            q = next;
        }
        return (q, ZERO);
    }
    let mut r = sub(a, mul(&q, b));
    while r.is_negative() {
        q = sub(q, &*ONE);
        r = add(r, b);
    }
    while r >= *b {
        q = add(q, &*ONE);
        r = sub(r, b);
    }
    (q, r)
}

/// Divides magnitudes, `b` non-zero. `a` is consumed and reused where the
/// algorithm allows.
pub(crate) fn div_rem_mag(mut a: Vec<u32>, b: &[u32], store_rem: bool) -> (Vec<u32>, Vec<u32>) {
    if cmp_mag(&a, b) == Ordering::Less {
        return (Vec::new(), a);
    }
    if b.len() == 1 {
        let r = divide_one_word(&mut a, b[0]);
        trim_vec(&mut a);
        return (a, vec![r]);
    }
    if b.len() < NEWTON_DIVISION_THRESHOLD {
        tracing::trace!(target: LOG_TARGET, a = a.len(), b = b.len(), "knuth division");
        return divide_knuth(&a, b);
    }
    tracing::trace!(target: LOG_TARGET, a = a.len(), b = b.len(), "newton division");
    let (q, r) = divide_newton(BigInt::new(a, 1), &BigInt::new(b.to_vec(), 1), store_rem);
    (q.mag, r.mag)
}

/// Truncating division with both parts on request.
///
/// `a == q*b + r` with `|r| < |b|`; `q` takes the sign `sign(a)*sign(b)` and
/// `r` the sign of `a` (or is zero). A zero divisor, or asking for neither
/// part, yields an empty result. Owned operands are dropped either way.
///
/// ```
/// use sm_bigint::{div_mod, BigInt};
///
/// let a = BigInt::from(-7);
/// let res = div_mod(&a, BigInt::from(2), true, true);
/// assert_eq!(res.quotient, Some(BigInt::from(-3)));
/// assert_eq!(res.remainder, Some(BigInt::from(-1)));
/// ```
pub fn div_mod<'a, 'b>(
    a: impl Into<Operand<'a>>,
    b: impl Into<Operand<'b>>,
    store_div: bool,
    store_rem: bool,
) -> DivModResult {
    let a = a.into();
    let b = b.into();
    if b.signum == 0 || !(store_div || store_rem) {
        return DivModResult::default();
    }
    let a_signum = a.signum;
    let q_signum = a.signum * b.signum;
    if a_signum == 0 {
        return DivModResult {
            quotient: store_div.then(|| ZERO),
            remainder: store_rem.then(|| ZERO),
        };
    }

    let (q, r) = div_rem_mag(a.into_owned().mag, &b.mag, store_rem);
    DivModResult {
        quotient: store_div.then(|| BigInt::new(q, q_signum)),
        remainder: store_rem.then(|| BigInt::new(r, a_signum)),
    }
}

/// Truncating quotient `a / b`.
pub fn div<'a, 'b>(
    a: impl Into<Operand<'a>>,
    b: impl Into<Operand<'b>>,
) -> Result<BigInt, BigIntError> {
    div_mod(a, b, true, false).quotient.ok_or(BigIntError::DivisionByZero)
}

/// Remainder of truncating division; takes the sign of `a`.
pub fn rem<'a, 'b>(
    a: impl Into<Operand<'a>>,
    b: impl Into<Operand<'b>>,
) -> Result<BigInt, BigIntError> {
    div_mod(a, b, false, true).remainder.ok_or(BigIntError::DivisionByZero)
}

impl BigInt {
    /// `(self / other, self % other)`, truncating.
    pub fn div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        match div_mod(self, other, true, true) {
            DivModResult { quotient: Some(q), remainder: Some(r) } => Ok((q, r)),
            _ => Err(BigIntError::DivisionByZero),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    fn limbs(len: usize, seed: u64) -> Vec<u32> {
        let mut state = seed | 1;
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                (state >> 32) as u32
            })
            .chain(std::iter::once(1))
            .collect()
    }

    fn check_division(a: &BigInt, b: &BigInt) {
        let (q, r) = a.div_rem(b).unwrap();
        assert_eq!(&(&q * b) + &r, *a);
        assert!(r.abs() < b.abs());
        assert!(r.is_zero() || r.signum() == a.signum());
    }

    #[test]
    fn test_div() {
        // test divide
        let a = big("120");
        let b = big("13");
        assert_eq!(div(&a, &b).unwrap(), big("9"));
        // test divide one word
        let a = big("10000000000000000000000000000000000");
        let b = big("1000");
        let c = big("10000000000000000000000000000000");
        assert_eq!(div(&a, &b).unwrap(), c);
        // test divide Knuth
        let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
        let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
        let c = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
        assert_eq!(div(&a, &b).unwrap(), c);
        check_division(&a, &b);
    }

    #[test]
    fn test_mod() {
        let a = big("12");
        let b = big("8");
        assert_eq!(rem(&a, &b).unwrap(), big("4"));

        let a = big("10000000000000000");
        let b = big("10");
        assert_eq!(rem(&a, &b).unwrap(), ZERO);

        let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
        let b = big("526738495607659438721653478560954837265378495607");
        let r = big("393707270751296419349581795408095683999332705291");
        assert_eq!(rem(&a, &b).unwrap(), r);
    }

    #[test]
    fn test_div_signs() {
        for &(a, b, q, r) in &[
            (7, 2, 3, 1),
            (-7, 2, -3, -1),
            (7, -2, -3, 1),
            (-7, -2, 3, -1),
            (1, 5, 0, 1),
            (-1, 5, 0, -1),
        ] {
            let res = div_mod(BigInt::from(a), BigInt::from(b), true, true);
            assert_eq!(res.quotient, Some(BigInt::from(q)), "{} / {}", a, b);
            assert_eq!(res.remainder, Some(BigInt::from(r)), "{} % {}", a, b);
        }
    }

    #[test]
    fn test_div_by_zero() {
        let res = div_mod(BigInt::from(5), ZERO, true, true);
        assert!(res.quotient.is_none() && res.remainder.is_none());
        assert!(matches!(div(&BigInt::from(5), &ZERO), Err(BigIntError::DivisionByZero)));
        assert!(matches!(rem(BigInt::from(5), ZERO), Err(BigIntError::DivisionByZero)));
        assert!(BigInt::from(5).div_rem(&ZERO).is_err());
    }

    #[test]
    fn test_store_flags() {
        let res = div_mod(BigInt::from(100), BigInt::from(7), true, false);
        assert_eq!(res.quotient, Some(BigInt::from(14)));
        assert!(res.remainder.is_none());
        let res = div_mod(BigInt::from(100), BigInt::from(7), false, true);
        assert!(res.quotient.is_none());
        assert_eq!(res.remainder, Some(BigInt::from(2)));
        let res = div_mod(BigInt::from(100), BigInt::from(7), false, false);
        assert!(res.quotient.is_none() && res.remainder.is_none());
    }

    #[test]
    fn test_same_operand() {
        let a = big("-98765432109876543210");
        let res = div_mod(&a, &a, true, true);
        assert_eq!(res.quotient, Some(BigInt::from(1)));
        assert_eq!(res.remainder, Some(ZERO));
    }

    #[test]
    fn test_knuth_add_back() {
        // classic qhat overshoot case: (B^3 - ... ) patterns from Hacker's Delight
        let a = BigInt::from_sign_limbs(false, vec![0, 0, 0x8000_0000, 0x7fff_ffff]);
        let b = BigInt::from_sign_limbs(false, vec![1, 0, 0x8000_0000]);
        check_division(&a, &b);
        let a = BigInt::from_sign_limbs(false, vec![0, 0xfffe, 0, 0x8000_0000]);
        let b = BigInt::from_sign_limbs(false, vec![0xffff, 0, 0x8000_0000]);
        check_division(&a, &b);
        let a = BigInt::from_sign_limbs(false, vec![3, 0, 0x8000_0000]);
        let b = BigInt::from_sign_limbs(false, vec![1, 0, 0x2000_0000]);
        check_division(&a, &b);
    }

    #[test]
    fn test_knuth_vs_small_shapes() {
        for &(a_len, b_len) in &[(2, 2), (5, 2), (9, 4), (20, 19), (63, 30)] {
            let a = BigInt::from_sign_limbs(false, limbs(a_len, a_len as u64));
            let b = BigInt::from_sign_limbs(true, limbs(b_len, b_len as u64 * 31));
            check_division(&a, &b);
            check_division(&-&a, &b);
        }
    }

    #[test]
    fn test_newton() {
        for &(a_len, b_len, top) in &[
            (64, 64, 1),
            (70, 64, 1),
            (150, 65, 0x8000_0000),
            (200, 100, 3),
            (260, 130, u32::MAX),
        ] {
            let mut a_mag = limbs(a_len, 5);
            let mut b_mag = limbs(b_len, 9);
            *b_mag.last_mut().unwrap() = top;
            *a_mag.last_mut().unwrap() = 0xdead_beef;
            let a = BigInt::from_sign_limbs(false, a_mag);
            let b = BigInt::from_sign_limbs(false, b_mag);
            check_division(&a, &b);
            check_division(&a, &-&b);

            let (newton_q, newton_r) = divide_newton(a.clone(), &b, true);
            let (knuth_q, knuth_r) = divide_knuth(&a.mag, &b.mag);
            assert_eq!(newton_q, BigInt::new(knuth_q, 1));
            assert_eq!(newton_r, BigInt::new(knuth_r, 1));
            let (quotient_only, _) = divide_newton(a.clone(), &b, false);
            assert_eq!(quotient_only, newton_q);
        }
    }

    #[test]
    fn test_newton_exact_multiple() {
        let b = BigInt::from_sign_limbs(false, limbs(80, 17));
        let q = BigInt::from_sign_limbs(false, limbs(40, 23));
        let a = &b * &q;
        let (quot, r) = a.div_rem(&b).unwrap();
        assert_eq!(quot, q);
        assert_eq!(r, ZERO);
        let (quot, _) = divide_newton(a, &b, false);
        assert_eq!(quot, q);
    }

    #[test]
    fn test_reciprocal() {
        let d = BigInt::from_sign_limbs(false, limbs(70, 41));
        let precision = 32 * 80;
        let x = reciprocal(&d, precision);
        let scale = shift(&*ONE, precision as i64);
        // x <= 2^p / d < x + 2
        assert!(&x * &d <= scale);
        assert!(&(&x + &BigInt::from(2)) * &d > scale);
    }
}
