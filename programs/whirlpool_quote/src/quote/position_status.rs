use anchor_lang::prelude::*;

/// Where the pool price sits relative to a position's `[lower, upper)` range.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionStatus {
    /// Current tick is below `lower`; the position holds only token A.
    BelowRange,
    InRange,
    /// Current tick is at or above `upper`; the position holds only token B.
    AboveRange,
}

/// Classifies `tick_current_index` against a position range.
///
/// The lower bound is inclusive and the upper bound exclusive, so a price
/// sitting exactly on `tick_upper_index` is already above the range.
pub fn get_position_status(
    tick_current_index: i32,
    tick_lower_index: i32,
    tick_upper_index: i32,
) -> PositionStatus {
    if tick_current_index >= tick_upper_index {
        PositionStatus::AboveRange
    } else if tick_current_index < tick_lower_index {
        PositionStatus::BelowRange
    } else {
        PositionStatus::InRange
    }
}
