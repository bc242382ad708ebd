use crate::error::MathError;
use crate::math::tick_spacing::get_start_tick_index;
use crate::utils::constants::{
    MAX_SQRT_PRICE_X64, MAX_SWAP_TICK_ARRAYS, MIN_SQRT_PRICE_X64, U64_MAX,
};
use crate::utils::pda::PdaManager;
use anchor_lang::prelude::*;

/// Start indexes of the tick arrays a swap walks through, in walk order.
///
/// a→b walks down from the array holding the current tick. b→a walks up from
/// the array holding `tick_current_index + tick_spacing`. The walk stops early
/// at the edge of the tick range.
///
/// # Errors
/// * `MathError::InvalidTickSpacing` - If `tick_spacing` is zero.
/// * `MathError::TickArrayOutOfBounds` - If not even the first array is addressable.
pub fn get_swap_tick_array_start_indexes(
    tick_current_index: i32,
    tick_spacing: u16,
    a_to_b: bool,
) -> Result<Vec<i32>> {
    let (tick, step) = if a_to_b {
        (tick_current_index, -1)
    } else {
        (tick_current_index.saturating_add(tick_spacing as i32), 1)
    };

    let mut start_indexes = Vec::with_capacity(MAX_SWAP_TICK_ARRAYS);
    for i in 0..MAX_SWAP_TICK_ARRAYS as i32 {
        match get_start_tick_index(tick, tick_spacing, i * step) {
            Ok(start) => start_indexes.push(start),
            Err(e) if e == MathError::TickArrayOutOfBounds.into() && !start_indexes.is_empty() => {
                break
            }
            Err(e) => return Err(e),
        }
    }
    Ok(start_indexes)
}

/// Tick array addresses for a swap on `whirlpool`, in walk order.
pub fn get_swap_tick_array_addresses(
    program_id: &Pubkey,
    whirlpool: &Pubkey,
    tick_current_index: i32,
    tick_spacing: u16,
    a_to_b: bool,
) -> Result<Vec<Pubkey>> {
    Ok(get_swap_tick_array_start_indexes(tick_current_index, tick_spacing, a_to_b)?
        .into_iter()
        .map(|start| PdaManager::tick_array(program_id, whirlpool, start).address)
        .collect())
}

/// The loosest sqrt price limit for a swap direction.
pub fn get_default_sqrt_price_limit(a_to_b: bool) -> u128 {
    if a_to_b {
        MIN_SQRT_PRICE_X64
    } else {
        MAX_SQRT_PRICE_X64
    }
}

/// The loosest bound on the unspecified side of a swap: accept any output, or
/// pay any input.
pub fn get_default_other_amount_threshold(amount_specified_is_input: bool) -> u64 {
    if amount_specified_is_input {
        0
    } else {
        U64_MAX
    }
}
