use crate::math::percentage::Percentage;
use crate::state::DecodeAccount;
use crate::utils::constants::{FEE_RATE_MUL_VALUE, NUM_REWARDS, PROTOCOL_FEE_RATE_MUL_VALUE};
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WhirlpoolRewardInfo {
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub authority: Pubkey,
    pub emissions_per_second_x64: u128,
    pub growth_global_x64: u128,
}

impl WhirlpoolRewardInfo {
    /// A reward slot is live once both its mint and vault are set.
    pub fn initialized(&self) -> bool {
        self.mint != Pubkey::default() && self.vault != Pubkey::default()
    }
}

/// Pool state as stored by the whirlpool program.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Whirlpool {
    pub whirlpools_config: Pubkey,
    pub whirlpool_bump: [u8; 1],

    pub tick_spacing: u16,
    pub tick_spacing_seed: [u8; 2],

    // Hundredths of a basis point
    pub fee_rate: u16,
    // Basis points of the fee
    pub protocol_fee_rate: u16,

    pub liquidity: u128,
    pub sqrt_price: u128,
    pub tick_current_index: i32,

    pub protocol_fee_owed_a: u64,
    pub protocol_fee_owed_b: u64,

    pub token_mint_a: Pubkey,
    pub token_vault_a: Pubkey,
    pub fee_growth_global_a: u128,

    pub token_mint_b: Pubkey,
    pub token_vault_b: Pubkey,
    pub fee_growth_global_b: u128,

    pub reward_last_updated_timestamp: u64,
    pub reward_infos: [WhirlpoolRewardInfo; NUM_REWARDS],
}

impl DecodeAccount for Whirlpool {
    const NAME: &'static str = "Whirlpool";
    const DISCRIMINATOR: [u8; 8] = [63, 149, 209, 12, 225, 128, 99, 9];
}

impl Whirlpool {
    /// Swap fee charged on input, e.g. `3000 / 1_000_000` for 0.3%.
    pub fn fee_rate(&self) -> Percentage {
        Percentage {
            numerator: self.fee_rate as u64,
            denominator: FEE_RATE_MUL_VALUE,
        }
    }

    /// Share of the swap fee kept by the protocol.
    pub fn protocol_fee_rate(&self) -> Percentage {
        Percentage {
            numerator: self.protocol_fee_rate as u64,
            denominator: PROTOCOL_FEE_RATE_MUL_VALUE,
        }
    }

    pub fn initialized_rewards(&self) -> impl Iterator<Item = &WhirlpoolRewardInfo> {
        self.reward_infos.iter().filter(|info| info.initialized())
    }
}
