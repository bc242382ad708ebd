//! # whirlpool_quote::math::tick_math
//!
//! Tick index ⇄ Q64.64 sqrt price, reproducing the on-chain table-driven
//! algorithm exactly.
//!
//! ## Algorithm
//! - `sqrt_price = 1.0001^(tick / 2)`, built by multiplying precomputed powers
//!   of `sqrt(1.0001)` selected by the bits of `|tick|`.
//! - Positive ticks accumulate `ratio` with 96 fractional bits and drop 32 bits
//!   at the end. Non-positive ticks accumulate `1 / ratio` with 64 fractional
//!   bits directly. The two tables are independent and must not be derived from
//!   one another.
//! - Every multiplication truncates (`>>`), it never rounds.
//!
//! The inverse seeds a candidate from `f64` logarithms and then walks to the
//! unique tick `t` with `f(t) <= sqrt_price < f(t + 1)`.

use crate::error::MathError;
use crate::math::core_arithmetic::mul_shift;
use crate::utils::constants::{MAX_SQRT_PRICE_X64, MAX_TICK, MIN_SQRT_PRICE_X64, MIN_TICK};
use anchor_lang::prelude::*;

// ---------- Positive branch (Q32.96) ---------------------------------------

const POSITIVE_WORKING_BITS: u32 = 96;
const POSITIVE_FINAL_SHIFT: u32 = 32;

// 1.0001^(0/2) and 1.0001^(1/2), Q32.96
const POSITIVE_BASE_EVEN: u128 = 79_228_162_514_264_337_593_543_950_336;
const POSITIVE_BASE_ODD: u128 = 79_232_123_823_359_799_118_286_999_567;

// 1.0001^(2^k / 2) for k = 1..=18, Q32.96
const POSITIVE_FACTORS: [u128; 18] = [
    79_236_085_330_515_764_027_303_304_731,         // 2
    79_244_008_939_048_815_603_706_035_061,         // 4
    79_259_858_533_276_714_757_314_932_305,         // 8
    79_291_567_232_598_584_799_939_703_904,         // 16
    79_355_022_692_464_371_645_785_046_466,         // 32
    79_482_085_999_252_804_386_437_311_141,         // 64
    79_736_823_300_114_093_921_829_183_326,         // 128
    80_248_749_790_819_932_309_965_073_892,         // 256
    81_282_483_887_344_747_381_513_967_011,         // 512
    83_390_072_131_320_151_908_154_831_281,         // 1024
    87_770_609_709_833_776_024_991_924_138,         // 2048
    97_234_110_755_111_693_312_479_820_773,         // 4096
    119_332_217_159_966_728_226_237_229_890,        // 8192
    179_736_315_981_702_064_433_883_588_727,        // 16384
    407_748_233_172_238_350_107_850_275_304,        // 32768
    2_098_478_828_474_011_932_436_660_412_517,      // 65536
    55_581_415_166_113_811_149_459_800_483_533,     // 131072
    38_992_368_544_603_139_932_233_054_999_993_551, // 262144
];

// ---------- Negative branch (Q64.64) ---------------------------------------

const NEGATIVE_WORKING_BITS: u32 = 64;

// 1.0001^(-0/2) and 1.0001^(-1/2), Q64.64
const NEGATIVE_BASE_EVEN: u128 = 18_446_744_073_709_551_616;
const NEGATIVE_BASE_ODD: u128 = 18_445_821_805_675_392_311;

// 1.0001^(-2^k / 2) for k = 1..=18, Q64.64
const NEGATIVE_FACTORS: [u128; 18] = [
    18_444_899_583_751_176_498, // 2
    18_443_055_278_223_354_162, // 4
    18_439_367_220_385_604_838, // 8
    18_431_993_317_065_449_817, // 16
    18_417_254_355_718_160_513, // 32
    18_387_811_781_193_591_352, // 64
    18_329_067_761_203_520_168, // 128
    18_212_142_134_806_087_854, // 256
    17_980_523_815_641_551_639, // 512
    17_526_086_738_831_147_013, // 1024
    16_651_378_430_235_024_244, // 2048
    15_030_750_278_693_429_944, // 4096
    12_247_334_978_882_834_399, // 8192
    8_131_365_268_884_726_200,  // 16384
    3_584_323_654_723_342_297,  // 32768
    696_457_651_847_595_233,    // 65536
    26_294_789_957_452_057,     // 131072
    37_481_735_321_082,         // 262144
];

/// Walks the bits of `abs_tick` above bit 0, multiplying `ratio` by the matching
/// factor and truncating by `working_bits` each time.
#[inline(always)]
fn interpolate(abs_tick: u32, mut ratio: u128, factors: &[u128; 18], working_bits: u32) -> Result<u128> {
    let mut shifted = abs_tick;
    for factor in factors.iter() {
        shifted >>= 1;
        if shifted & 1 != 0 {
            ratio = mul_shift(ratio, *factor, working_bits)?;
        }
    }
    Ok(ratio)
}

#[inline(always)]
fn sqrt_price_positive(tick: u32) -> Result<u128> {
    let base = if tick & 1 == 0 {
        POSITIVE_BASE_EVEN
    } else {
        POSITIVE_BASE_ODD
    };
    let ratio = interpolate(tick, base, &POSITIVE_FACTORS, POSITIVE_WORKING_BITS)?;
    Ok(ratio >> POSITIVE_FINAL_SHIFT)
}

#[inline(always)]
fn sqrt_price_non_positive(abs_tick: u32) -> Result<u128> {
    let base = if abs_tick & 1 == 0 {
        NEGATIVE_BASE_EVEN
    } else {
        NEGATIVE_BASE_ODD
    };
    interpolate(abs_tick, base, &NEGATIVE_FACTORS, NEGATIVE_WORKING_BITS)
}

#[inline(always)]
pub fn is_tick_in_bounds(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

/// Converts a tick index to its Q64.64 sqrt price.
///
/// # Arguments
/// * `tick` - Tick index in `[MIN_TICK, MAX_TICK]`.
/// # Returns
/// * `Result<u128>` - The sqrt price, always within
///   `[MIN_SQRT_PRICE_X64, MAX_SQRT_PRICE_X64]`.
/// # Errors
/// * `MathError::TickOutOfBounds` - If `tick` is outside the valid range. Out of
///   range ticks are rejected, never clamped.
#[inline]
pub fn tick_index_to_sqrt_price_x64(tick: i32) -> Result<u128> {
    require!(is_tick_in_bounds(tick), MathError::TickOutOfBounds);

    if tick > 0 {
        sqrt_price_positive(tick.unsigned_abs())
    } else {
        sqrt_price_non_positive(tick.unsigned_abs())
    }
}

/// Converts a Q64.64 sqrt price to the greatest tick whose sqrt price does not
/// exceed it.
///
/// # Arguments
/// * `sqrt_price_x64` - Sqrt price in `[MIN_SQRT_PRICE_X64, MAX_SQRT_PRICE_X64]`.
/// # Returns
/// * `Result<i32>` - The unique `t` with `f(t) <= sqrt_price_x64 < f(t + 1)`
///   (or `MAX_TICK` at the upper bound).
/// # Errors
/// * `MathError::SqrtPriceOutOfBounds` - If the sqrt price is outside the valid range.
pub fn sqrt_price_x64_to_tick_index(sqrt_price_x64: u128) -> Result<i32> {
    require!(
        (MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64).contains(&sqrt_price_x64),
        MathError::SqrtPriceOutOfBounds
    );

    // Rough estimate. f64 error puts this within a few ticks of the answer.
    let sqrt_price = sqrt_price_x64 as f64 / 2f64.powi(64);
    let price = sqrt_price * sqrt_price;
    let estimate = (price.ln() / 1.0001f64.ln()).floor();
    let mut tick = (estimate as i32).clamp(MIN_TICK, MAX_TICK);

    // Exact correction. f(MIN_TICK) == MIN_SQRT_PRICE_X64 <= sqrt_price_x64, so
    // the downward walk cannot leave the valid range.
    while tick > MIN_TICK && tick_index_to_sqrt_price_x64(tick)? > sqrt_price_x64 {
        tick -= 1;
    }
    while tick < MAX_TICK && tick_index_to_sqrt_price_x64(tick + 1)? <= sqrt_price_x64 {
        tick += 1;
    }

    Ok(tick)
}
