//! # whirlpool_quote::math::core_arithmetic
//!
//! Fixed-width integer kernels shared by the tick and liquidity math.
//!
//! ## Features
//! - `u128` operands with `ethnum::U256` intermediates, so every product of two
//!   Q64.64 values (or a Q64.64 value and a shifted liquidity) is computed
//!   without silent truncation.
//! - Explicit floor and ceiling division, because the token formulas round in a
//!   direction chosen by the caller.
//! - Checked narrowing back to `u128` / `u64`, reporting `MathError` instead of
//!   wrapping.

use crate::error::MathError;
use anchor_lang::prelude::*;
use ethnum::U256;

/// Rounding direction applied when an exact quotient is not an integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rounding {
    Down,
    Up,
}

impl Rounding {
    #[inline(always)]
    pub const fn from_round_up(round_up: bool) -> Self {
        if round_up {
            Rounding::Up
        } else {
            Rounding::Down
        }
    }
}

// Multiplies two u128 values in U256 and truncates the product by `shift` bits.
// This is plain truncation (no rounding), which is what the tick interpolation
// tables were generated for.
#[inline(always)]
pub fn mul_shift(a: u128, b: u128, shift: u32) -> Result<u128> {
    let prod = (U256::from(a) * U256::from(b)) >> shift;
    u256_to_u128(prod)
}

/// Divides `numerator` by `denominator` rounding in the requested direction.
///
/// # Errors
/// * `MathError::DivideByZero` - If `denominator` is zero.
#[inline(always)]
pub fn div_round(numerator: U256, denominator: U256, rounding: Rounding) -> Result<U256> {
    require!(denominator != U256::ZERO, MathError::DivideByZero);
    let (q, r) = (numerator / denominator, numerator % denominator);
    match rounding {
        Rounding::Up if r != U256::ZERO => Ok(q + U256::ONE),
        _ => Ok(q),
    }
}

/// Computes `a * b / c` in U256 and narrows the result to `u128`.
#[inline(always)]
pub fn mul_div(a: U256, b: U256, c: U256, rounding: Rounding) -> Result<u128> {
    let prod = a.checked_mul(b).ok_or(MathError::Overflow)?;
    u256_to_u128(div_round(prod, c, rounding)?)
}

#[inline(always)]
pub fn u256_to_u128(value: U256) -> Result<u128> {
    if value > U256::from(u128::MAX) {
        return Err(MathError::Overflow.into());
    }
    Ok(value.as_u128())
}

/// Narrows a token amount to `u64`, the width of an SPL token amount.
#[inline(always)]
pub fn u256_to_token_amount(value: U256) -> Result<u64> {
    if value > U256::from(u64::MAX) {
        return Err(MathError::TokenAmountExceedsLimit.into());
    }
    Ok(value.as_u64())
}
