use lazy_static::*;

use crate::big_int::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    /// Shared `1`. Read-only: callers hand out borrows or clones, never the value itself.
    pub static ref ONE: BigInt = BigInt::from_sign_limbs(false, vec![1]);
    pub static ref NEG_ONE: BigInt = BigInt::from_sign_limbs(true, vec![1]);
    /// `INT_RADIX` as big integers, the first rung of the printing power ladder.
    pub static ref INT_RADIX_CACHE: Vec<BigInt> = INT_RADIX
        .iter()
        .map(|&p| BigInt::from(p))
        .collect();
}
