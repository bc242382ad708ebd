use crate::error::MathError;
use crate::math::liquidity_math::{
    liquidity_from_token_a, liquidity_from_token_b, token_amounts_from_liquidity,
};
use crate::math::percentage::Percentage;
use crate::math::tick_math::tick_index_to_sqrt_price_x64;
use crate::quote::position_status::{get_position_status, PositionStatus};
use crate::quote::validate_tick_range;
use crate::state::Whirlpool;
use anchor_lang::prelude::*;

/// Inputs for depositing a fixed amount of one token into a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IncreaseLiquidityQuoteParams {
    pub input_token_amount: u64,
    pub input_token_mint: Pubkey,
    pub token_mint_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub tick_current_index: i32,
    pub sqrt_price: u128,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    pub slippage_tolerance: Percentage,
}

impl IncreaseLiquidityQuoteParams {
    /// Fills the pool fields from a decoded whirlpool account.
    pub fn from_whirlpool(
        whirlpool: &Whirlpool,
        input_token_mint: Pubkey,
        input_token_amount: u64,
        tick_lower_index: i32,
        tick_upper_index: i32,
        slippage_tolerance: Percentage,
    ) -> Self {
        Self {
            input_token_amount,
            input_token_mint,
            token_mint_a: whirlpool.token_mint_a,
            token_mint_b: whirlpool.token_mint_b,
            tick_current_index: whirlpool.tick_current_index,
            sqrt_price: whirlpool.sqrt_price,
            tick_lower_index,
            tick_upper_index,
            slippage_tolerance,
        }
    }
}

/// Liquidity to mint plus the estimated and maximum token amounts to pay.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IncreaseLiquidityQuote {
    pub liquidity: u128,
    pub token_est_a: u64,
    pub token_est_b: u64,
    pub token_max_a: u64,
    pub token_max_b: u64,
}

/// Quotes an increase-liquidity instruction funded by a single input token.
///
/// Estimates round up because the depositor pays them; the maximums then add
/// the slippage margin on top.
///
/// # Errors
/// * `MathError::TickOutOfBounds` - If any tick index is outside the valid range.
/// * `MathError::InvalidTickRange` - If `tick_lower_index >= tick_upper_index`.
/// * `MathError::TokenMintMismatch` - If the input mint is neither pool mint.
pub fn increase_liquidity_quote_by_input_token(
    params: &IncreaseLiquidityQuoteParams,
) -> Result<IncreaseLiquidityQuote> {
    validate_tick_range(
        params.tick_current_index,
        params.tick_lower_index,
        params.tick_upper_index,
    )?;
    require!(
        params.input_token_mint == params.token_mint_a
            || params.input_token_mint == params.token_mint_b,
        MathError::TokenMintMismatch
    );

    let input_is_a = params.input_token_mint == params.token_mint_a;
    let status = get_position_status(
        params.tick_current_index,
        params.tick_lower_index,
        params.tick_upper_index,
    );

    // One-sided ranges cannot be entered with the token they do not hold
    match (status, input_is_a) {
        (PositionStatus::AboveRange, true) | (PositionStatus::BelowRange, false) => {
            msg!(
                "Range [{}, {}) is {:?} at tick {}; input token cannot be deposited",
                params.tick_lower_index,
                params.tick_upper_index,
                status,
                params.tick_current_index
            );
            return Ok(IncreaseLiquidityQuote::default());
        }
        _ => {}
    }

    let lower = tick_index_to_sqrt_price_x64(params.tick_lower_index)?;
    let upper = tick_index_to_sqrt_price_x64(params.tick_upper_index)?;
    let current = params.sqrt_price.clamp(lower, upper);

    let liquidity = if input_is_a {
        liquidity_from_token_a(current, upper, params.input_token_amount)?
    } else {
        liquidity_from_token_b(lower, current, params.input_token_amount)?
    };

    let estimate = token_amounts_from_liquidity(liquidity, current, lower, upper, true)?;

    Ok(IncreaseLiquidityQuote {
        liquidity,
        token_est_a: estimate.token_a,
        token_est_b: estimate.token_b,
        token_max_a: params.slippage_tolerance.adjust_add(estimate.token_a)?,
        token_max_b: params.slippage_tolerance.adjust_add(estimate.token_b)?,
    })
}
