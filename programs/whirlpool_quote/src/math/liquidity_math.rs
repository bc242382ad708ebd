//! # whirlpool_quote::math::liquidity_math
//!
//! Liquidity ⇄ token amount conversions for a concentrated price range.
//!
//! ## Formulas
//! With `c` the current sqrt price clamped into `[lower, upper]`:
//! - `token_a = L * 2^64 * (upper - c) / (c * upper)`
//! - `token_b = L * (c - lower) / 2^64`
//!
//! Intermediates are `U256`; the numerator of `token_a` needs up to 288 bits
//! for extreme inputs, so its product is checked rather than assumed to fit.

use crate::error::MathError;
use crate::math::core_arithmetic::{div_round, mul_div, u256_to_token_amount, Rounding};
use crate::utils::constants::FRAC_BITS;
use anchor_lang::prelude::*;
use ethnum::U256;

/// Raw token amounts in each mint's smallest unit.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenAmounts {
    pub token_a: u64,
    pub token_b: u64,
}

impl TokenAmounts {
    pub const fn new(token_a: u64, token_b: u64) -> Self {
        Self { token_a, token_b }
    }
}

#[inline(always)]
fn ordered(sqrt_price_0: u128, sqrt_price_1: u128) -> (u128, u128) {
    if sqrt_price_0 <= sqrt_price_1 {
        (sqrt_price_0, sqrt_price_1)
    } else {
        (sqrt_price_1, sqrt_price_0)
    }
}

#[inline(always)]
fn check_range(sqrt_price_lower: u128, sqrt_price_upper: u128) -> Result<()> {
    require!(
        sqrt_price_lower < sqrt_price_upper,
        MathError::InvalidSqrtPriceRange
    );
    Ok(())
}

/// Token A held by `liquidity` between `sqrt_price_current` and `sqrt_price_upper`.
///
/// # Errors
/// * `MathError::InvalidSqrtPriceRange` - If `lower >= upper`.
/// * `MathError::Overflow` - If the intermediate product exceeds 256 bits.
/// * `MathError::TokenAmountExceedsLimit` - If the amount does not fit in `u64`.
pub fn token_a_from_liquidity(
    liquidity: u128,
    sqrt_price_current: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    round_up: bool,
) -> Result<u64> {
    check_range(sqrt_price_lower, sqrt_price_upper)?;
    let current = sqrt_price_current.clamp(sqrt_price_lower, sqrt_price_upper);

    let numerator = (U256::from(liquidity) << FRAC_BITS)
        .checked_mul(U256::from(sqrt_price_upper - current))
        .ok_or(MathError::Overflow)?;
    let denominator = U256::from(current) * U256::from(sqrt_price_upper);

    let amount = div_round(numerator, denominator, Rounding::from_round_up(round_up))?;
    u256_to_token_amount(amount)
}

/// Token B held by `liquidity` between `sqrt_price_lower` and `sqrt_price_current`.
///
/// # Errors
/// * `MathError::InvalidSqrtPriceRange` - If `lower >= upper`.
/// * `MathError::TokenAmountExceedsLimit` - If the amount does not fit in `u64`.
pub fn token_b_from_liquidity(
    liquidity: u128,
    sqrt_price_current: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    round_up: bool,
) -> Result<u64> {
    check_range(sqrt_price_lower, sqrt_price_upper)?;
    let current = sqrt_price_current.clamp(sqrt_price_lower, sqrt_price_upper);

    // L < 2^128 and the price delta < 2^96, so the product always fits
    let numerator = U256::from(liquidity) * U256::from(current - sqrt_price_lower);
    let amount = div_round(
        numerator,
        U256::ONE << FRAC_BITS,
        Rounding::from_round_up(round_up),
    )?;
    u256_to_token_amount(amount)
}

/// Computes both reserves of a position.
///
/// A current price below the range yields only token A, a price at or above
/// the upper bound yields only token B. Both sides are rounded with the same
/// `round_up` flag.
///
/// # Arguments
/// * `liquidity` - Position liquidity.
/// * `sqrt_price_current` - Pool sqrt price (Q64.64), clamped into the range.
/// * `sqrt_price_lower` / `sqrt_price_upper` - Range bounds (Q64.64).
/// * `round_up` - Ceil when true (amounts the user pays), floor otherwise.
/// # Errors
/// * `MathError::InvalidSqrtPriceRange` - If `lower >= upper`.
pub fn token_amounts_from_liquidity(
    liquidity: u128,
    sqrt_price_current: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    round_up: bool,
) -> Result<TokenAmounts> {
    Ok(TokenAmounts {
        token_a: token_a_from_liquidity(
            liquidity,
            sqrt_price_current,
            sqrt_price_lower,
            sqrt_price_upper,
            round_up,
        )?,
        token_b: token_b_from_liquidity(
            liquidity,
            sqrt_price_current,
            sqrt_price_lower,
            sqrt_price_upper,
            round_up,
        )?,
    })
}

/// Liquidity supplied by `amount` of token A over `[sqrt_price_0, sqrt_price_1]`
/// (arguments in either order).
///
/// `L = amount * lower * upper / ((upper - lower) * 2^64)`, floored. A zero
/// width range returns 0.
pub fn liquidity_from_token_a(sqrt_price_0: u128, sqrt_price_1: u128, amount: u64) -> Result<u128> {
    let (lower, upper) = ordered(sqrt_price_0, sqrt_price_1);
    if lower == upper {
        return Ok(0);
    }

    mul_div(
        U256::from(amount),
        U256::from(lower) * U256::from(upper),
        U256::from(upper - lower) << FRAC_BITS,
        Rounding::Down,
    )
}

/// Liquidity supplied by `amount` of token B over `[sqrt_price_0, sqrt_price_1]`
/// (arguments in either order).
///
/// `L = amount * 2^64 / (upper - lower)`, floored. A zero width range returns 0.
pub fn liquidity_from_token_b(sqrt_price_0: u128, sqrt_price_1: u128, amount: u64) -> Result<u128> {
    let (lower, upper) = ordered(sqrt_price_0, sqrt_price_1);
    if lower == upper {
        return Ok(0);
    }

    mul_div(
        U256::from(amount),
        U256::ONE << FRAC_BITS,
        U256::from(upper - lower),
        Rounding::Down,
    )
}

/// Largest liquidity that can be minted without exceeding either amount.
///
/// # Arguments
/// * `sqrt_price_current` - Pool sqrt price (Q64.64).
/// * `sqrt_price_lower` / `sqrt_price_upper` - Range bounds (Q64.64).
/// * `token_amounts` - Available amounts of both tokens.
/// # Returns
/// * At or above the range: the token B liquidity over the whole range.
/// * At or below the range: the token A liquidity over the whole range.
/// * Inside: the smaller of the token A liquidity over `[current, upper]` and
///   the token B liquidity over `[lower, current]`.
pub fn max_liquidity_from_token_amounts(
    sqrt_price_current: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    token_amounts: TokenAmounts,
) -> Result<u128> {
    let (lower, upper) = ordered(sqrt_price_lower, sqrt_price_upper);

    if sqrt_price_current >= upper {
        liquidity_from_token_b(lower, upper, token_amounts.token_b)
    } else if sqrt_price_current <= lower {
        liquidity_from_token_a(lower, upper, token_amounts.token_a)
    } else {
        let liquidity_a = liquidity_from_token_a(sqrt_price_current, upper, token_amounts.token_a)?;
        let liquidity_b = liquidity_from_token_b(lower, sqrt_price_current, token_amounts.token_b)?;
        Ok(liquidity_a.min(liquidity_b))
    }
}
