//! Minimal SPL token mint reader.
//!
//! Layout (82 bytes): `mint_authority: COption<Pubkey>` (36), `supply: u64` (8),
//! `decimals: u8`, `is_initialized: bool`, `freeze_authority: COption<Pubkey>` (36).

use crate::error::MathError;
use crate::utils::constants::MINT_ACCOUNT_LEN;
use anchor_lang::prelude::*;

const SUPPLY_OFFSET: usize = 36;
const DECIMALS_OFFSET: usize = 44;
const IS_INITIALIZED_OFFSET: usize = 45;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintInfo {
    pub supply: u64,
    pub decimals: u8,
    pub is_initialized: bool,
}

impl MintInfo {
    /// # Errors
    /// * `MathError::AccountDidNotDeserialize` - If `data` is shorter than a mint
    ///   account.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < MINT_ACCOUNT_LEN {
            msg!(
                "Mint account too short: {} bytes, expected {}",
                data.len(),
                MINT_ACCOUNT_LEN
            );
            return Err(MathError::AccountDidNotDeserialize.into());
        }

        let mut supply = [0u8; 8];
        supply.copy_from_slice(&data[SUPPLY_OFFSET..DECIMALS_OFFSET]);

        Ok(Self {
            supply: u64::from_le_bytes(supply),
            decimals: data[DECIMALS_OFFSET],
            is_initialized: data[IS_INITIALIZED_OFFSET] != 0,
        })
    }
}

/// Reads only the `decimals` byte of a mint account.
pub fn mint_decimals(data: &[u8]) -> Result<u8> {
    MintInfo::decode(data).map(|mint| mint.decimals)
}
