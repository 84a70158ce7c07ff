//! Sign-magnitude big integers \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers kept as a sign and 32-bit limbs. Bitwise
//!   operations behave as if BigInt were represented in two's-complement notation.
//! - Free functions ([`add`], [`mul`], [`div_mod`], [`shift`], ...) taking each argument as an
//!   [`Operand`]: pass a value to let the operation consume and reuse it, pass a reference to
//!   keep it.
//!
//! Algorithm choices (Karatsuba, Knuth or Newton division, the radix power
//! ladder) are reported as `trace` events under the `sm_bigint` target.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;
mod operand;

pub use big_int::{
    add, and, div, div_mod, gcd, mul, neg, not, or, pow, rem, shift, square, sub, xor,
};
pub use big_int::{BigInt, DivModResult, ZERO};
pub use big_num_cache::{NEG_ONE, ONE};
pub use big_num_constants::{MAX_RADIX, MIN_RADIX};
pub use error::BigIntError;
pub use operand::Operand;

pub(crate) const LOG_TARGET: &str = "sm_bigint";

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
        println!("a << 10 = {}", &a << 10);
        println!("a >> 10 = {}", &a >> 10);
        println!("a & b = {}", &a & &b);
        println!("a = {}", a.hex_dump());
        assert_eq!((&a >> 10).to_string(), "9765625000");
    }
}
