//! Decimal prices on top of the Q64.64 tick math.
//!
//! Prices are token B per token A, adjusted by the two mints' decimals.
//! The sqrt price direction is exact (integer square root), so only the
//! human-facing side ever touches `BigDecimal`.

use crate::error::MathError;
use crate::math::fixed_point::{floor_to_bigint, from_x64, pow10};
use crate::math::tick_math::{sqrt_price_x64_to_tick_index, tick_index_to_sqrt_price_x64};
use crate::math::tick_spacing::round_to_initializable_tick_index;
use anchor_lang::prelude::*;
use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;
use num_traits::{ToPrimitive, Zero};

/// Convert a Q64.64 sqrt price into a decimal-adjusted price of token B per token A.
///
/// `price = (sqrt_price_x64 / 2^64)^2 * 10^(decimals_a - decimals_b)`, computed
/// exactly.
/// # Arguments
/// * `sqrt_price_x64` - The pool sqrt price in Q64.64.
/// * `decimals_a` - Mint decimals of token A.
/// * `decimals_b` - Mint decimals of token B.
pub fn sqrt_price_x64_to_price(sqrt_price_x64: u128, decimals_a: u8, decimals_b: u8) -> BigDecimal {
    let sqrt_price = from_x64(sqrt_price_x64);
    let decimal_adjust = pow10(decimals_a as i64 - decimals_b as i64);
    &sqrt_price * &sqrt_price * decimal_adjust
}

/// Convert a decimal-adjusted price into a Q64.64 sqrt price.
///
/// The result is `floor(sqrt(price / 10^(decimals_a - decimals_b)) * 2^64)`.
/// It is evaluated as the integer square root of
/// `floor(price / 10^(decimals_a - decimals_b) * 2^128)`, which gives the same
/// value without an approximate decimal square root.
/// # Errors
/// * `MathError::InvalidPrice` - If `price` is negative.
/// * `MathError::Overflow` - If the sqrt price does not fit in `u128`.
pub fn price_to_sqrt_price_x64(price: &BigDecimal, decimals_a: u8, decimals_b: u8) -> Result<u128> {
    require!(*price >= BigDecimal::zero(), MathError::InvalidPrice);

    let adjusted = price * pow10(decimals_b as i64 - decimals_a as i64);
    let shift_128 = BigDecimal::new(BigInt::from(1u8) << 128usize, 0);
    let price_x128 = floor_to_bigint(&(adjusted * shift_128));

    price_x128
        .sqrt()
        .to_u128()
        .ok_or_else(|| MathError::Overflow.into())
}

/// Convert a tick index into a decimal-adjusted price.
pub fn tick_index_to_price(tick: i32, decimals_a: u8, decimals_b: u8) -> Result<BigDecimal> {
    let sqrt_price_x64 = tick_index_to_sqrt_price_x64(tick)?;
    Ok(sqrt_price_x64_to_price(sqrt_price_x64, decimals_a, decimals_b))
}

/// Convert a decimal-adjusted price into the tick whose price range contains it.
/// # Errors
/// * `MathError::SqrtPriceOutOfBounds` - If the price maps outside the tick range.
pub fn price_to_tick_index(price: &BigDecimal, decimals_a: u8, decimals_b: u8) -> Result<i32> {
    let sqrt_price_x64 = price_to_sqrt_price_x64(price, decimals_a, decimals_b)?;
    sqrt_price_x64_to_tick_index(sqrt_price_x64)
}

/// Convert a price into the closest initializable tick, rounding toward zero.
pub fn price_to_initializable_tick_index(
    price: &BigDecimal,
    decimals_a: u8,
    decimals_b: u8,
    tick_spacing: u16,
) -> Result<i32> {
    let tick = price_to_tick_index(price, decimals_a, decimals_b)?;
    round_to_initializable_tick_index(tick, tick_spacing)
}
