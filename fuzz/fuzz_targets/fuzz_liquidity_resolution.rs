#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use honggfuzz::fuzz;
use whirlpool_quote::math::liquidity_math::{
    max_liquidity_from_token_amounts, token_amounts_from_liquidity, TokenAmounts,
};
use whirlpool_quote::math::tick_math::tick_index_to_sqrt_price_x64;
use whirlpool_quote::utils::constants::{MAX_TICK, MIN_TICK};
use whirlpool_quote::MathError;

#[derive(Debug, Clone)]
struct LiquidityInput {
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    sqrt_price_current: u128,
    amounts: TokenAmounts,
}

impl<'a> Arbitrary<'a> for LiquidityInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        // Work on tick-aligned prices so the range is always non-empty
        let lower = u.int_in_range(MIN_TICK..=MAX_TICK - 1)?;
        let upper = u.int_in_range(lower + 1..=MAX_TICK)?;
        let current = u.int_in_range(MIN_TICK..=MAX_TICK)?;

        let sqrt = |tick| tick_index_to_sqrt_price_x64(tick).map_err(|_| arbitrary::Error::IncorrectFormat);

        Ok(LiquidityInput {
            sqrt_price_lower: sqrt(lower)?,
            sqrt_price_upper: sqrt(upper)?,
            sqrt_price_current: sqrt(current)?,
            amounts: TokenAmounts::new(u.arbitrary()?, u.arbitrary()?),
        })
    }
}

fn fuzz_liquidity_resolution(input: LiquidityInput) {
    let LiquidityInput {
        sqrt_price_lower,
        sqrt_price_upper,
        sqrt_price_current,
        amounts,
    } = input;

    let liquidity = match max_liquidity_from_token_amounts(
        sqrt_price_current,
        sqrt_price_lower,
        sqrt_price_upper,
        amounts,
    ) {
        Ok(liquidity) => liquidity,
        Err(e) => {
            assert_eq!(e, MathError::Overflow.into());
            return;
        }
    };

    // Minting the resolved liquidity never needs more than was supplied
    match token_amounts_from_liquidity(
        liquidity,
        sqrt_price_current,
        sqrt_price_lower,
        sqrt_price_upper,
        false,
    ) {
        Ok(required) => {
            assert!(required.token_a <= amounts.token_a);
            assert!(required.token_b <= amounts.token_b);
        }
        Err(e) => {
            assert!(
                e == MathError::Overflow.into() || e == MathError::TokenAmountExceedsLimit.into(),
                "unexpected error {:?}",
                e
            );
        }
    }
}

fn main() {
    loop {
        fuzz!(|data: LiquidityInput| {
            fuzz_liquidity_resolution(data);
        });
    }
}
