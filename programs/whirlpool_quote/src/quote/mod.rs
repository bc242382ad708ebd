//! # whirlpool_quote::quote
//!
//! Slippage-bounded quotes for the liquidity instructions.
//!
//! ## Rounding
//! - Increase: estimates round up, bounds are `adjust_add`ed maximums.
//! - Decrease: estimates round down, bounds are `adjust_sub`ed minimums.
//!
//! Both directions err in favour of the instruction sender, so the
//! asymmetry is kept.

pub mod decrease_liquidity;
pub mod increase_liquidity;
pub mod position_status;

pub use decrease_liquidity::*;
pub use increase_liquidity::*;
pub use position_status::*;

use crate::error::MathError;
use crate::math::tick_math::is_tick_in_bounds;
use anchor_lang::prelude::*;

pub(crate) fn validate_tick_range(
    tick_current_index: i32,
    tick_lower_index: i32,
    tick_upper_index: i32,
) -> Result<()> {
    require!(
        is_tick_in_bounds(tick_lower_index)
            && is_tick_in_bounds(tick_upper_index)
            && is_tick_in_bounds(tick_current_index),
        MathError::TickOutOfBounds
    );
    require!(
        tick_lower_index < tick_upper_index,
        MathError::InvalidTickRange
    );
    Ok(())
}

/// Single entry point for the quote functions.
pub struct QuoteBuilder;

impl QuoteBuilder {
    pub fn increase_liquidity_by_input_token(
        params: &IncreaseLiquidityQuoteParams,
    ) -> Result<IncreaseLiquidityQuote> {
        increase_liquidity_quote_by_input_token(params)
    }

    pub fn decrease_liquidity_by_liquidity(
        params: &DecreaseLiquidityQuoteParams,
    ) -> Result<DecreaseLiquidityQuote> {
        decrease_liquidity_quote_by_liquidity(params)
    }
}
