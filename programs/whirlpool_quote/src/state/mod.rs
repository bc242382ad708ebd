//! Typed decoders for the accounts a quote is built from.
//!
//! Every decoder returns a `Result` naming why the bytes were rejected; the
//! caller decides whether a bad account is fatal.

pub mod mint;
pub mod position;
pub mod whirlpool;

pub use mint::*;
pub use position::*;
pub use whirlpool::*;

use crate::error::MathError;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;

pub const ACCOUNT_DISCRIMINATOR_SIZE: usize = 8;

/// First eight bytes of `sha256("account:<name>")`.
pub fn account_discriminator(name: &str) -> [u8; ACCOUNT_DISCRIMINATOR_SIZE] {
    let mut discriminator = [0u8; ACCOUNT_DISCRIMINATOR_SIZE];
    discriminator.copy_from_slice(&hash(format!("account:{}", name).as_bytes()).to_bytes()[..8]);
    discriminator
}

/// An Anchor account whose data is `discriminator || borsh(Self)`.
pub trait DecodeAccount: AnchorDeserialize + Sized {
    const NAME: &'static str;
    const DISCRIMINATOR: [u8; ACCOUNT_DISCRIMINATOR_SIZE];

    /// # Errors
    /// * `MathError::AccountDiscriminatorMismatch` - If the data is shorter than
    ///   a discriminator or starts with a different one.
    /// * `MathError::AccountDidNotDeserialize` - If the body does not match the layout.
    fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < ACCOUNT_DISCRIMINATOR_SIZE
            || data[..ACCOUNT_DISCRIMINATOR_SIZE] != Self::DISCRIMINATOR
        {
            msg!("{} account discriminator mismatch", Self::NAME);
            return Err(MathError::AccountDiscriminatorMismatch.into());
        }

        let mut body = &data[ACCOUNT_DISCRIMINATOR_SIZE..];
        Self::deserialize(&mut body).map_err(|e| {
            msg!("{} account did not deserialize: {}", Self::NAME, e);
            MathError::AccountDidNotDeserialize.into()
        })
    }
}

#[cfg(test)]
pub(crate) fn encode_account<T: DecodeAccount + AnchorSerialize>(account: &T) -> Vec<u8> {
    let mut data = T::DISCRIMINATOR.to_vec();
    account.serialize(&mut data).unwrap();
    data
}
