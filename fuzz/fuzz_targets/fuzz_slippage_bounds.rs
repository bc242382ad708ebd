#![no_main]

use arbitrary::Arbitrary;
use honggfuzz::fuzz;
use whirlpool_quote::{MathError, Percentage};

#[derive(Debug, Clone, Arbitrary)]
struct SlippageInput {
    numerator: u64,
    denominator: u64,
    estimate: u64,
}

fn fuzz_slippage_bounds(input: SlippageInput) {
    let percentage = match Percentage::from_fraction(input.numerator, input.denominator) {
        Ok(p) => p,
        Err(e) => {
            assert_eq!(e, MathError::InvalidPercentage.into());
            assert!(input.denominator == 0 && input.numerator != 0);
            return;
        }
    };

    let min = percentage.adjust_sub(input.estimate).unwrap();
    assert!(min <= input.estimate);

    match percentage.adjust_add(input.estimate) {
        Ok(max) => assert!(input.estimate <= max),
        // Only a bound beyond u64 may fail
        Err(e) => {
            assert_eq!(e, MathError::TokenAmountExceedsLimit.into());
            assert!(percentage.numerator > 0);
        }
    }

    if percentage.is_zero() {
        assert_eq!(min, input.estimate);
    }
}

fn main() {
    loop {
        fuzz!(|data: SlippageInput| {
            fuzz_slippage_bounds(data);
        });
    }
}
