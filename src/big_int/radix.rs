use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;

use super::div::div_rem_mag;
use super::mul::{mul_add_small, square};
use super::{BigInt, ZERO};
use crate::big_num_cache::INT_RADIX_CACHE;
use crate::big_num_constants::*;
use crate::error::BigIntError;
use crate::operand::Operand;
use crate::LOG_TARGET;

fn check_radix(radix: u32) -> Result<usize, BigIntError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(radix as usize)
    } else {
        Err(BigIntError::InvalidRadix(radix))
    }
}

/// Value of one digit character. Up to radix 36 both letter cases mean
/// 10..=35; above it upper case is 10..=35 and lower case 36..=61.
fn digit_value(c: u8, radix: u32) -> Option<u32> {
    let val = match c {
        b'0'..=b'9' => (c - b'0') as u32,
        b'A'..=b'Z' => (c - b'A') as u32 + 10,
        b'a'..=b'z' if radix <= 36 => (c - b'a') as u32 + 10,
        b'a'..=b'z' => (c - b'a') as u32 + 36,
        _ => return None,
    };
    (val < radix).then(|| val)
}

// 实现解析
impl BigInt {
    /// Parses an optionally signed digit string in `radix` (2..=62).
    ///
    /// ```
    /// use sm_bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from_str_radix("FF", 16).unwrap(), BigInt::from(255));
    /// assert_eq!(BigInt::from_str_radix("-z", 62).unwrap(), BigInt::from(-61));
    /// assert!(BigInt::from_str_radix("12", 2).is_err());
    /// ```
    pub fn from_str_radix(val: &str, radix: u32) -> Result<BigInt, BigIntError> {
        BigInt::parse_bytes(val.as_bytes(), radix)
    }

    /// Parses the digits in `buf`; the slice length bounds the input.
    /// An empty buffer is zero, a lone sign is [`BigIntError::MissingDigits`].
    pub fn parse_bytes(buf: &[u8], radix: u32) -> Result<BigInt, BigIntError> {
        let r = check_radix(radix)?;
        if buf.is_empty() {
            return Ok(ZERO);
        }
        let (negative, start) = match buf[0] {
            b'-' => (true, 1),
            b'+' => (false, 1),
            _ => (false, 0),
        };
        let digits = &buf[start..];
        if digits.is_empty() {
            return Err(BigIntError::MissingDigits);
        }

        // Horner's method one chunk of DIGITS_PER_INT digits at a time
        let chunk = DIGITS_PER_INT[r];
        let super_radix = INT_RADIX[r];
        let mut mag: Vec<u32> = Vec::with_capacity(digits.len() / chunk + 1);
        let mut first_len = digits.len() % chunk;
        if first_len == 0 {
            first_len = chunk;
        }
        let mut cursor = 0;
        let mut group_len = first_len;
        while cursor < digits.len() {
            let mut group_val: u64 = 0;
            for (i, &c) in digits[cursor..cursor + group_len].iter().enumerate() {
                let d = digit_value(c, radix).ok_or(BigIntError::InvalidDigit {
                    digit: c as char,
                    position: start + cursor + i,
                    radix,
                })?;
                group_val = group_val * radix as u64 + d as u64;
            }
            let factor = if cursor == 0 { 1 } else { super_radix };
            mul_add_small(&mut mag, factor, group_val);
            cursor += group_len;
            group_len = chunk;
        }
        Ok(BigInt::from_sign_limbs(negative, mag))
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_str_radix(s, 10)
    }
}

// 实现打印

/// Appends the digits of `val`, zero padded on the left to `width` when given.
fn push_small(mut val: u64, radix: u64, width: Option<usize>, out: &mut String) {
    let mut buf = [0u8; 64];
    let mut len = 0;
    while val != 0 {
        buf[len] = DIGITS[(val % radix) as usize];
        val /= radix;
        len += 1;
    }
    if let Some(width) = width {
        for _ in len..width {
            out.push('0');
        }
    } else if len == 0 {
        out.push('0');
    }
    out.extend(buf[..len].iter().rev().map(|&c| c as char));
}

/// Digits of a non-negative value, most significant first.
///
/// Values of more than two limbs are split by the ladder
/// `INT_RADIX[radix]^(2^l)`: each split at level `l` leaves a remainder of
/// exactly `DIGITS_PER_INT[radix] << l` digits. Pending pieces sit on an
/// explicit stack as `(value, padded width, highest useful level)`.
fn push_digits(val: BigInt, radix: usize, out: &mut String) {
    if val.mag.len() <= 2 {
        push_small(val.low_u64(), radix as u64, None, out);
        return;
    }

    let mut pows = vec![INT_RADIX_CACHE[radix].clone()];
    while let Some(top) = pows.last() {
        if 2 * top.mag.len() > val.mag.len() {
            break;
        }
        let next = square(top);
        pows.push(next);
    }
    tracing::trace!(
        target: LOG_TARGET,
        radix,
        limbs = val.mag.len(),
        levels = pows.len(),
        "radix power table"
    );

    let mut stack: Vec<(BigInt, Option<usize>, usize)> = vec![(val, None, pows.len() - 1)];
    while let Some((val, width, max_level)) = stack.pop() {
        if val.mag.len() <= 2 {
            push_small(val.low_u64(), radix as u64, width, out);
            continue;
        }
        let level = (0..=max_level)
            .rev()
            .find(|&l| pows[l].mag.len() <= val.mag.len())
            .unwrap_or(0);
        let (q, r) = div_rem_mag(val.mag, &pows[level].mag, true);
        let (q, r) = (BigInt::new(q, 1), BigInt::new(r, 1));
        if q.is_zero() {
            // same limb count but below pows[level]; retry one rung lower
            stack.push((r, width, level.saturating_sub(1)));
            continue;
        }
        let digits = DIGITS_PER_INT[radix] << level;
        stack.push((r, Some(digits), level.saturating_sub(1)));
        stack.push((q, width.map(|w| w - digits), max_level));
    }
}

/// Renders any value in a radix already known to be valid.
fn format_radix(val: BigInt, radix: usize) -> String {
    let mut out = String::with_capacity(val.mag.len() * 10 + 1);
    if val.is_negative() {
        out.push('-');
    }
    push_digits(val.abs_take(), radix, &mut out);
    out
}

impl BigInt {
    /// Digits in `radix` (2..=62), using `0-9A-Za-z`.
    ///
    /// ```
    /// use sm_bigint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-255).to_string_radix(16).unwrap(), "-FF");
    /// assert_eq!(BigInt::from(61).to_string_radix(62).unwrap(), "z");
    /// ```
    pub fn to_string_radix(&self, radix: u32) -> Result<String, BigIntError> {
        let r = check_radix(radix)?;
        Ok(format_radix(self.clone(), r))
    }

    /// Writes `value` in `radix` to `out`. An owned value lends its buffer
    /// to the splitting divisions.
    pub fn write_radix<'a, W: Write>(
        value: impl Into<Operand<'a>>,
        out: &mut W,
        radix: u32,
    ) -> Result<(), BigIntError> {
        let r = check_radix(radix)?;
        let s = format_radix(value.into().into_owned(), r);
        out.write_all(s.as_bytes())?;
        Ok(())
    }

    /// Diagnostic dump of the limbs in hex, most significant first and
    /// separated by `.`. Only the first limb drops its leading zeros.
    ///
    /// ```
    /// use sm_bigint::BigInt;
    ///
    /// let x = BigInt::from_sign_limbs(true, vec![0xabc, 0, 0x1f]);
    /// assert_eq!(x.hex_dump(), "-1f.00000000.00000abc");
    /// ```
    pub fn hex_dump(&self) -> String {
        let mut out = String::with_capacity(self.mag.len() * 9 + 1);
        if self.is_negative() {
            out.push('-');
        }
        let mut limbs = self.mag.iter().rev();
        match limbs.next() {
            None => out.push('0'),
            Some(top) => out.push_str(&format!("{:x}", top)),
        }
        for limb in limbs {
            out.push_str(&format!(".{:08x}", limb));
        }
        out
    }

    pub fn write_hex_dump<W: Write>(&self, out: &mut W) -> Result<(), BigIntError> {
        out.write_all(self.hex_dump().as_bytes())?;
        Ok(())
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_radix(self.clone(), 10))
    }
}
