//! Conversions between arbitrary-precision decimals and Q64.64 integers.
//!
//! `BigDecimal` is only used on the human-facing side (prices, UI amounts).
//! Everything that must match the on-chain program bit for bit stays in
//! `u128` / `U256` and never round-trips through this module.

use crate::error::MathError;
use crate::utils::constants::{FRAC_BITS, ONE_X64};
use anchor_lang::prelude::*;
use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{ToPrimitive, Zero};

/// Truncates a non-negative decimal to its integer part.
pub(crate) fn floor_to_bigint(value: &BigDecimal) -> BigInt {
    let (digits, scale) = value.as_bigint_and_exponent();
    if scale <= 0 {
        digits * BigInt::from(10u8).pow((-scale) as u32)
    } else {
        digits / BigInt::from(10u8).pow(scale as u32)
    }
}

#[inline]
pub(crate) fn pow10(exponent: i64) -> BigDecimal {
    // 10^n is stored as digits=1 with scale=-n, so no division is ever done
    BigDecimal::new(BigInt::from(1u8), -exponent)
}

/// Multiplies `value` by 2^64 and floors the result.
///
/// # Errors
/// * `MathError::InvalidPrice` - If `value` is negative.
/// * `MathError::Overflow` - If the result does not fit in `u128`.
pub fn to_x64(value: &BigDecimal) -> Result<u128> {
    require!(*value >= BigDecimal::zero(), MathError::InvalidPrice);
    let shifted = value * BigDecimal::new(BigInt::from(ONE_X64), 0);
    floor_to_bigint(&shifted)
        .to_u128()
        .ok_or_else(|| MathError::Overflow.into())
}

/// Divides a Q64.64 integer by 2^64.
///
/// The result is exact: `x / 2^64 == x * 5^64 / 10^64`, which has a finite
/// decimal expansion of at most 64 fractional digits.
pub fn from_x64(value: u128) -> BigDecimal {
    let digits = BigInt::from(value) * BigInt::from(5u8).pow(FRAC_BITS);
    BigDecimal::new(digits, FRAC_BITS as i64)
}

/// Converts a UI amount into raw token units, truncating any digits beyond
/// `shift` fractional places.
///
/// # Errors
/// * `MathError::TokenAmountExceedsLimit` - If the scaled value is negative or
///   does not fit in `u64`.
pub fn decimal_to_u64(value: &BigDecimal, shift: u8) -> Result<u64> {
    require!(
        *value >= BigDecimal::zero(),
        MathError::TokenAmountExceedsLimit
    );
    let scaled = value * pow10(shift as i64);
    floor_to_bigint(&scaled)
        .to_u64()
        .ok_or_else(|| MathError::TokenAmountExceedsLimit.into())
}

/// Converts raw token units into a UI amount with `shift` decimals.
pub fn decimal_from_u64(value: u64, shift: u8) -> BigDecimal {
    BigDecimal::new(BigInt::from(value), shift as i64)
}

/// Rounds `value` to exactly `decimals` fractional digits (half-even).
pub fn to_fixed(value: &BigDecimal, decimals: u8) -> BigDecimal {
    value.with_scale_round(decimals as i64, RoundingMode::HalfEven)
}
