use anchor_lang::prelude::*;
use anchor_lang::solana_program::pubkey;

pub const MIN_TICK: i32 = -443_636;
pub const MAX_TICK: i32 = 443_636;
pub const MIN_SQRT_PRICE_X64: u128 = 4_295_048_016;
pub const MAX_SQRT_PRICE_X64: u128 = 79_226_673_515_401_279_992_447_579_055;
pub const FRAC_BITS: u32 = 64; // Q64.64
pub const ONE_X64: u128 = 1u128 << FRAC_BITS;
pub const U64_MAX: u64 = u64::MAX;

/// Number of tick slots held by one tick array account.
pub const TICK_ARRAY_SIZE: i32 = 88;
/// A swap instruction takes at most this many tick arrays.
pub const MAX_SWAP_TICK_ARRAYS: usize = 3;
/// Reward slots per whirlpool and per position.
pub const NUM_REWARDS: usize = 3;

/// `fee_rate` is stored in hundredths of a basis point.
pub const FEE_RATE_MUL_VALUE: u64 = 1_000_000;
/// `protocol_fee_rate` is stored in basis points of the fee.
pub const PROTOCOL_FEE_RATE_MUL_VALUE: u64 = 10_000;

pub const WHIRLPOOL_PROGRAM_ID: Pubkey = pubkey!("whirLbMiicVdio4qvUfM5KAg6Ct8VwpYzGff3uctyCc");
pub const WHIRLPOOLS_CONFIG: Pubkey = pubkey!("2LecshUwdy9xi7meFgHtFJQNSKk4KdTrcpvaB56dP2NQ");
pub const METAPLEX_METADATA_PROGRAM_ID: Pubkey =
    pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

/// Byte length of an SPL token mint account.
pub const MINT_ACCOUNT_LEN: usize = 82;

// PDA seeds
pub const PDA_WHIRLPOOL_SEED: &[u8] = b"whirlpool";
pub const PDA_POSITION_SEED: &[u8] = b"position";
pub const PDA_METADATA_SEED: &[u8] = b"metadata";
pub const PDA_TICK_ARRAY_SEED: &[u8] = b"tick_array";
pub const PDA_FEE_TIER_SEED: &[u8] = b"fee_tier";
pub const PDA_ORACLE_SEED: &[u8] = b"oracle";
