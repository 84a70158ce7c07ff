//! std operator traits. Owned operands are passed on as consumed, so
//! `a + &b` reuses the buffer of `a` and only `&a + &b` allocates fresh.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use super::BigInt;
use crate::operand::Operand;

fn div_or_panic<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> BigInt {
    match super::div(a, b) {
        Ok(q) => q,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

fn rem_or_panic<'a, 'b>(a: impl Into<Operand<'a>>, b: impl Into<Operand<'b>>) -> BigInt {
    match super::rem(a, b) {
        Ok(r) => r,
        Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
    }
}

macro_rules! impl_binary_op {
    ($($op: ident, $method: ident, $op_assign: ident, $method_assign: ident, $func: path;)*) => {
    $(
    impl $op<BigInt> for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> BigInt {
            $func(self, rhs)
        }
    }

    impl $op<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> BigInt {
            $func(self, rhs)
        }
    }

    impl $op<BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> BigInt {
            $func(self, rhs)
        }
    }

    impl $op<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> BigInt {
            $func(self, rhs)
        }
    }

    impl $op_assign<BigInt> for BigInt {
        fn $method_assign(&mut self, rhs: BigInt) {
            *self = $func(std::mem::take(self), rhs);
        }
    }

    impl $op_assign<&BigInt> for BigInt {
        fn $method_assign(&mut self, rhs: &BigInt) {
            *self = $func(std::mem::take(self), rhs);
        }
    }
    )*
    };
}

impl_binary_op! {
    Add, add, AddAssign, add_assign, super::add;
    Sub, sub, SubAssign, sub_assign, super::sub;
    Mul, mul, MulAssign, mul_assign, super::mul;
    Div, div, DivAssign, div_assign, div_or_panic;
    Rem, rem, RemAssign, rem_assign, rem_or_panic;
    BitAnd, bitand, BitAndAssign, bitand_assign, super::and;
    BitOr, bitor, BitOrAssign, bitor_assign, super::or;
    BitXor, bitxor, BitXorAssign, bitxor_assign, super::xor;
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        super::neg(self)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        super::neg(self)
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        super::not(self)
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        super::not(self)
    }
}

// 实现移位
//
// Amounts are `i64` only, so an unsuffixed literal such as `x << 10` infers.
impl Shl<i64> for BigInt {
    type Output = BigInt;

    fn shl(self, n: i64) -> BigInt {
        super::shift(self, n)
    }
}

impl Shl<i64> for &BigInt {
    type Output = BigInt;

    fn shl(self, n: i64) -> BigInt {
        super::shift(self, n)
    }
}

impl ShlAssign<i64> for BigInt {
    fn shl_assign(&mut self, n: i64) {
        *self = std::mem::take(self) << n;
    }
}

impl Shr<i64> for BigInt {
    type Output = BigInt;

    fn shr(self, n: i64) -> BigInt {
        super::shift(self, right_amount(n))
    }
}

impl Shr<i64> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: i64) -> BigInt {
        super::shift(self, right_amount(n))
    }
}

impl ShrAssign<i64> for BigInt {
    fn shr_assign(&mut self, n: i64) {
        *self = std::mem::take(self) >> n;
    }
}

// `-i64::MIN` overflows, so it saturates to `i64::MAX`
fn right_amount(n: i64) -> i64 {
    n.checked_neg().unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::big_int::ZERO;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_operators() {
        let a = big("10000000000000");
        let b = big("900000000000");
        assert_eq!(&a + &b, big("10900000000000"));
        assert_eq!(&a - &b, big("9100000000000"));
        assert_eq!(&b - &a, big("-9100000000000"));
        assert_eq!(&a * &b, big("9000000000000000000000000"));
        assert_eq!(&a / &b, big("11"));
        assert_eq!(&a % &b, big("100000000000"));
        assert_eq!(a.clone() + b.clone(), big("10900000000000"));
        assert_eq!(a.clone() * &b, &b * a.clone());
        assert_eq!(&a & &b, BigInt::from(10000000000000_i64 & 900000000000));
        assert_eq!(&a | b.clone(), BigInt::from(10000000000000_i64 | 900000000000));
        assert_eq!(a.clone() ^ &b, BigInt::from(10000000000000_i64 ^ 900000000000));
        assert_eq!(-&a, big("-10000000000000"));
        assert_eq!(!&a, big("-10000000000001"));
        assert_eq!(!!a.clone(), a);
    }

    #[test]
    fn test_assign_operators() {
        let mut x = BigInt::from(10);
        x += BigInt::from(5);
        x -= &BigInt::from(3);
        x *= BigInt::from(-4);
        assert_eq!(x, BigInt::from(-48));
        x /= &BigInt::from(5);
        assert_eq!(x, BigInt::from(-9));
        x %= BigInt::from(4);
        assert_eq!(x, BigInt::from(-1));
        x &= BigInt::from(6);
        x |= BigInt::from(1);
        x ^= BigInt::from(2);
        assert_eq!(x, BigInt::from(5));
        x <<= 70;
        x >>= 69;
        assert_eq!(x, BigInt::from(10));
    }

    #[test]
    fn test_shift_operators() {
        let one = BigInt::from(1);
        assert_eq!((&one << 64).to_string(), "18446744073709551616");
        assert_eq!((&one << 64 >> 63).to_string(), "2");
        assert_eq!(BigInt::from(-5) >> 1, BigInt::from(-3));
        assert_eq!(BigInt::from(20) << -2, BigInt::from(5));
        assert_eq!(BigInt::from(20) >> -2, BigInt::from(80));
        assert_eq!(&one >> i64::MAX, ZERO);
        assert_eq!(BigInt::from(-1) >> i64::MAX, BigInt::from(-1));
        assert_eq!(&one << i64::MIN, ZERO);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_by_zero_panics() {
        let _ = BigInt::from(1) / ZERO;
    }

    #[test]
    #[should_panic]
    fn test_rem_by_zero_panics() {
        let _ = &BigInt::from(1) % &ZERO;
    }
}
