//! Exact rational percentages and slippage bound adjustment.

use crate::error::MathError;
use crate::math::fixed_point::floor_to_bigint;
use anchor_lang::prelude::*;
use bigdecimal::BigDecimal;
use ethnum::U256;
use num_traits::{ToPrimitive, Zero};
use std::fmt;
use std::str::FromStr;

// from_percentage keeps four decimal places of a percent
const PERCENT_PRECISION: u64 = 10_000;
const PERCENT_DENOMINATOR: u64 = 100 * PERCENT_PRECISION;

/// A non-negative fraction `numerator / denominator` of two `u64`s.
///
/// A zero denominator only ever stands for "no adjustment": the adjust
/// functions return their input unchanged and `to_decimal` yields zero.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Percentage {
    pub numerator: u64,
    pub denominator: u64,
}

impl Percentage {
    /// Builds a percentage from a raw fraction.
    ///
    /// # Errors
    /// * `MathError::InvalidPercentage` - If `denominator` is zero while
    ///   `numerator` is not.
    pub fn from_fraction(numerator: u64, denominator: u64) -> Result<Self> {
        require!(
            denominator != 0 || numerator == 0,
            MathError::InvalidPercentage
        );
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Parses a percent value such as `"0.5"` (meaning 0.5%).
    ///
    /// Accepts `0` or any value in `[0.0001, 100]`. Digits past the fourth
    /// decimal place are truncated and the fraction is stored reduced.
    ///
    /// # Errors
    /// * `MathError::InvalidPercentage` - If the value is outside the accepted range.
    pub fn from_percentage(percent: &BigDecimal) -> Result<Self> {
        let min = BigDecimal::new(1.into(), 4);
        let max = BigDecimal::from(100u32);
        require!(
            percent.is_zero() || (*percent >= min && *percent <= max),
            MathError::InvalidPercentage
        );

        let scaled = percent * BigDecimal::from(PERCENT_PRECISION);
        let numerator = floor_to_bigint(&scaled)
            .to_u64()
            .ok_or(MathError::InvalidPercentage)?;

        let divisor = gcd(numerator, PERCENT_DENOMINATOR);
        Ok(Self {
            numerator: numerator / divisor,
            denominator: PERCENT_DENOMINATOR / divisor,
        })
    }

    /// `from_percentage` on a decimal string.
    pub fn from_percentage_str(percent: &str) -> Result<Self> {
        let value = BigDecimal::from_str(percent).map_err(|_| MathError::InvalidPercentage)?;
        Self::from_percentage(&value)
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn to_decimal(&self) -> BigDecimal {
        if self.denominator == 0 {
            return BigDecimal::zero();
        }
        BigDecimal::from(self.numerator) / BigDecimal::from(self.denominator)
    }

    /// `amount * (denominator + numerator) / denominator`, floored.
    ///
    /// # Errors
    /// * `MathError::TokenAmountExceedsLimit` - If the bound does not fit in `u64`.
    pub fn adjust_add(&self, amount: u64) -> Result<u64> {
        if self.denominator == 0 {
            return Ok(amount);
        }
        let factor = U256::from(self.denominator) + U256::from(self.numerator);
        self.scale(amount, factor)
    }

    /// `amount * (denominator - numerator) / denominator`, floored.
    ///
    /// A numerator larger than the denominator saturates the bound at zero.
    pub fn adjust_sub(&self, amount: u64) -> Result<u64> {
        if self.denominator == 0 {
            return Ok(amount);
        }
        if self.numerator >= self.denominator {
            return Ok(0);
        }
        let factor = U256::from(self.denominator - self.numerator);
        self.scale(amount, factor)
    }

    #[inline(always)]
    fn scale(&self, amount: u64, factor: U256) -> Result<u64> {
        // amount < 2^64 and factor < 2^65, so the product fits comfortably
        let adjusted = U256::from(amount) * factor / U256::from(self.denominator);
        if adjusted > U256::from(u64::MAX) {
            return Err(MathError::TokenAmountExceedsLimit.into());
        }
        Ok(adjusted.as_u64())
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
