//! Tick spacing rules and tick-array addressing.
//!
//! Two rounding conventions live here and must not be unified:
//! initializable ticks round toward zero, array start indexes round toward
//! negative infinity.

use crate::error::MathError;
use crate::utils::constants::{MAX_TICK, MIN_TICK, TICK_ARRAY_SIZE};
use anchor_lang::prelude::*;

pub use crate::math::tick_math::is_tick_in_bounds;

/// Returns true if `tick` is a multiple of `tick_spacing`.
///
/// The remainder is taken toward zero, so `-63 % 64 == -63` and the check
/// behaves the same on both sides of zero. A zero spacing never matches.
pub fn is_initializable(tick: i32, tick_spacing: u16) -> bool {
    if tick_spacing == 0 {
        return false;
    }
    let spacing = tick_spacing as i32;
    tick - spacing * (tick / spacing) == 0
}

/// Rounds `tick` toward zero to the nearest multiple of `tick_spacing`.
///
/// # Examples
/// `(63, 64) -> 0`, `(-63, 64) -> 0`, `(-65, 64) -> -64`.
/// # Errors
/// * `MathError::TickOutOfBounds` - If `tick` is outside `[MIN_TICK, MAX_TICK]`.
/// * `MathError::InvalidTickSpacing` - If `tick_spacing` is zero.
pub fn round_to_initializable_tick_index(tick: i32, tick_spacing: u16) -> Result<i32> {
    require!(is_tick_in_bounds(tick), MathError::TickOutOfBounds);
    require!(tick_spacing != 0, MathError::InvalidTickSpacing);
    let spacing = tick_spacing as i32;
    let magnitude = tick.abs();
    Ok(tick.signum() * (magnitude - magnitude % spacing))
}

/// Number of ticks covered by one tick array at the given spacing.
#[inline]
pub fn ticks_in_array(tick_spacing: u16) -> i32 {
    tick_spacing as i32 * TICK_ARRAY_SIZE
}

/// Start index of the tick array containing `tick`, shifted by `offset`
/// whole arrays.
///
/// # Arguments
/// * `tick` - Any tick index; it does not have to be initializable.
/// * `tick_spacing` - Pool tick spacing.
/// * `offset` - Number of arrays to step (negative steps down).
/// # Returns
/// * `Result<i32>` - `(floor(tick / span) + offset) * span`.
/// # Errors
/// * `MathError::InvalidTickSpacing` - If `tick_spacing` is zero.
/// * `MathError::TickArrayOutOfBounds` - If the resulting array lies entirely
///   outside `[MIN_TICK, MAX_TICK]`.
pub fn get_start_tick_index(tick: i32, tick_spacing: u16, offset: i32) -> Result<i32> {
    require!(tick_spacing != 0, MathError::InvalidTickSpacing);

    let span = ticks_in_array(tick_spacing) as i64;
    let real_index = (tick as i64).div_euclid(span);
    let start = (real_index + offset as i64) * span;

    // The array may begin below MIN_TICK as long as part of it is usable
    if start + span <= MIN_TICK as i64 || start > MAX_TICK as i64 {
        msg!(
            "Tick array start {} (tick {}, spacing {}, offset {}) is out of bounds",
            start,
            tick,
            tick_spacing,
            offset
        );
        return Err(MathError::TickArrayOutOfBounds.into());
    }

    Ok(start as i32)
}
