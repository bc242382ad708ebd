#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use honggfuzz::fuzz;
use whirlpool_quote::math::tick_math::{
    is_tick_in_bounds, sqrt_price_x64_to_tick_index, tick_index_to_sqrt_price_x64,
};
use whirlpool_quote::utils::constants::{MAX_SQRT_PRICE_X64, MAX_TICK, MIN_SQRT_PRICE_X64, MIN_TICK};
use whirlpool_quote::MathError;

#[derive(Debug, Clone)]
enum TickInput {
    // Any i32, mostly to hit the bounds checks
    Tick(i32),
    // Any sqrt price inside the valid range
    SqrtPrice(u128),
}

impl<'a> Arbitrary<'a> for TickInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(match u.int_in_range(0u8..=2)? {
            0 => TickInput::Tick(u.arbitrary()?),
            1 => TickInput::Tick(u.int_in_range(MIN_TICK..=MAX_TICK)?),
            _ => TickInput::SqrtPrice(u.int_in_range(MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64)?),
        })
    }
}

fn fuzz_tick(tick: i32) {
    match tick_index_to_sqrt_price_x64(tick) {
        Ok(sqrt_price) => {
            assert!(is_tick_in_bounds(tick));
            assert!((MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64).contains(&sqrt_price));
            assert_eq!(sqrt_price_x64_to_tick_index(sqrt_price).unwrap(), tick);

            if tick < MAX_TICK {
                assert!(tick_index_to_sqrt_price_x64(tick + 1).unwrap() > sqrt_price);
            }
        }
        Err(e) => {
            assert_eq!(e, MathError::TickOutOfBounds.into());
            assert!(!is_tick_in_bounds(tick));
        }
    }
}

fn fuzz_sqrt_price(sqrt_price: u128) {
    let tick = sqrt_price_x64_to_tick_index(sqrt_price).unwrap();
    assert!(tick_index_to_sqrt_price_x64(tick).unwrap() <= sqrt_price);
    if tick < MAX_TICK {
        assert!(sqrt_price < tick_index_to_sqrt_price_x64(tick + 1).unwrap());
    }
}

fn main() {
    loop {
        fuzz!(|data: TickInput| {
            match data {
                TickInput::Tick(tick) => fuzz_tick(tick),
                TickInput::SqrtPrice(sqrt_price) => fuzz_sqrt_price(sqrt_price),
            }
        });
    }
}
