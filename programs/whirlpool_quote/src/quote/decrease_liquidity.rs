use crate::math::liquidity_math::token_amounts_from_liquidity;
use crate::math::percentage::Percentage;
use crate::math::tick_math::tick_index_to_sqrt_price_x64;
use crate::quote::validate_tick_range;
use crate::state::{Position, Whirlpool};
use anchor_lang::prelude::*;

/// Inputs for withdrawing a fixed amount of liquidity from a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecreaseLiquidityQuoteParams {
    pub liquidity: u128,
    pub tick_current_index: i32,
    pub sqrt_price: u128,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    pub slippage_tolerance: Percentage,
}

impl DecreaseLiquidityQuoteParams {
    /// Withdraws `liquidity` from `position` at the pool's current price.
    pub fn from_position(
        whirlpool: &Whirlpool,
        position: &Position,
        liquidity: u128,
        slippage_tolerance: Percentage,
    ) -> Self {
        Self {
            liquidity,
            tick_current_index: whirlpool.tick_current_index,
            sqrt_price: whirlpool.sqrt_price,
            tick_lower_index: position.tick_lower_index,
            tick_upper_index: position.tick_upper_index,
            slippage_tolerance,
        }
    }
}

/// Liquidity to burn plus the estimated and minimum token amounts received.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecreaseLiquidityQuote {
    pub liquidity: u128,
    pub token_est_a: u64,
    pub token_est_b: u64,
    pub token_min_a: u64,
    pub token_min_b: u64,
}

/// Quotes a decrease-liquidity instruction.
///
/// Estimates round down because the withdrawer receives them; the minimums
/// then subtract the slippage margin.
///
/// # Errors
/// * `MathError::TickOutOfBounds` - If any tick index is outside the valid range.
/// * `MathError::InvalidTickRange` - If `tick_lower_index >= tick_upper_index`.
pub fn decrease_liquidity_quote_by_liquidity(
    params: &DecreaseLiquidityQuoteParams,
) -> Result<DecreaseLiquidityQuote> {
    validate_tick_range(
        params.tick_current_index,
        params.tick_lower_index,
        params.tick_upper_index,
    )?;

    let lower = tick_index_to_sqrt_price_x64(params.tick_lower_index)?;
    let upper = tick_index_to_sqrt_price_x64(params.tick_upper_index)?;
    let current = params.sqrt_price.clamp(lower, upper);

    let estimate = token_amounts_from_liquidity(params.liquidity, current, lower, upper, false)?;

    Ok(DecreaseLiquidityQuote {
        liquidity: params.liquidity,
        token_est_a: estimate.token_a,
        token_est_b: estimate.token_b,
        token_min_a: params.slippage_tolerance.adjust_sub(estimate.token_a)?,
        token_min_b: params.slippage_tolerance.adjust_sub(estimate.token_b)?,
    })
}
