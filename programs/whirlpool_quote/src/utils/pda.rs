//! PDA (Program Derived Address) derivation for whirlpool accounts.
//!
//! Clients use these to address the accounts an instruction touches without
//! fetching anything first.

use crate::utils::constants::*;
use anchor_lang::prelude::*;

/// Information about a derived PDA.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PdaInfo {
    pub address: Pubkey,
    pub bump: u8,
}

impl PdaInfo {
    fn find(seeds: &[&[u8]], program_id: &Pubkey) -> Self {
        let (address, bump) = Pubkey::find_program_address(seeds, program_id);
        Self { address, bump }
    }
}

/// Seed layouts for every whirlpool program account.
pub struct PdaManager;

impl PdaManager {
    /// Derives a pool address.
    ///
    /// # Arguments
    /// * `program_id` - The whirlpool program.
    /// * `whirlpools_config` - Config account the pool belongs to.
    /// * `mint_a` / `mint_b` - Pool mints, in the pool's own order.
    /// * `tick_spacing` - Pool tick spacing, little endian in the seed.
    pub fn whirlpool(
        program_id: &Pubkey,
        whirlpools_config: &Pubkey,
        mint_a: &Pubkey,
        mint_b: &Pubkey,
        tick_spacing: u16,
    ) -> PdaInfo {
        PdaInfo::find(
            &[
                PDA_WHIRLPOOL_SEED,
                whirlpools_config.as_ref(),
                mint_a.as_ref(),
                mint_b.as_ref(),
                &tick_spacing.to_le_bytes(),
            ],
            program_id,
        )
    }

    pub fn position(program_id: &Pubkey, position_mint: &Pubkey) -> PdaInfo {
        PdaInfo::find(&[PDA_POSITION_SEED, position_mint.as_ref()], program_id)
    }

    /// Derives the Metaplex metadata account of a position NFT. This lives under
    /// the metadata program, not the whirlpool program.
    pub fn position_metadata(position_mint: &Pubkey) -> PdaInfo {
        PdaInfo::find(
            &[
                PDA_METADATA_SEED,
                METAPLEX_METADATA_PROGRAM_ID.as_ref(),
                position_mint.as_ref(),
            ],
            &METAPLEX_METADATA_PROGRAM_ID,
        )
    }

    /// Derives a tick array address.
    ///
    /// The start index is encoded as its decimal string (`"-39424"`), not as
    /// little-endian bytes.
    pub fn tick_array(program_id: &Pubkey, whirlpool: &Pubkey, start_tick_index: i32) -> PdaInfo {
        let start = start_tick_index.to_string();
        PdaInfo::find(
            &[PDA_TICK_ARRAY_SEED, whirlpool.as_ref(), start.as_bytes()],
            program_id,
        )
    }

    pub fn oracle(program_id: &Pubkey, whirlpool: &Pubkey) -> PdaInfo {
        PdaInfo::find(&[PDA_ORACLE_SEED, whirlpool.as_ref()], program_id)
    }

    pub fn fee_tier(program_id: &Pubkey, whirlpools_config: &Pubkey, tick_spacing: u16) -> PdaInfo {
        PdaInfo::find(
            &[
                PDA_FEE_TIER_SEED,
                whirlpools_config.as_ref(),
                &tick_spacing.to_le_bytes(),
            ],
            program_id,
        )
    }
}
