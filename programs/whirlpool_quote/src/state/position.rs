use crate::quote::position_status::{get_position_status, PositionStatus};
use crate::state::DecodeAccount;
use crate::utils::constants::NUM_REWARDS;
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PositionRewardInfo {
    pub growth_inside_checkpoint: u128,
    pub amount_owed: u64,
}

/// A liquidity position NFT's state account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub whirlpool: Pubkey,
    pub position_mint: Pubkey,
    pub liquidity: u128,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,

    pub fee_growth_checkpoint_a: u128,
    pub fee_owed_a: u64,
    pub fee_growth_checkpoint_b: u128,
    pub fee_owed_b: u64,

    pub reward_infos: [PositionRewardInfo; NUM_REWARDS],
}

impl DecodeAccount for Position {
    const NAME: &'static str = "Position";
    const DISCRIMINATOR: [u8; 8] = [170, 188, 143, 228, 122, 64, 247, 208];
}

impl Position {
    pub fn status(&self, tick_current_index: i32) -> PositionStatus {
        get_position_status(tick_current_index, self.tick_lower_index, self.tick_upper_index)
    }
}
