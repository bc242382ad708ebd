#[cfg(test)]
mod tests {
    use crate::error::MathError;
    use crate::math::liquidity_math::*;
    use crate::math::tick_math::tick_index_to_sqrt_price_x64;
    use crate::utils::constants::*;

    fn sqrt(tick: i32) -> u128 {
        tick_index_to_sqrt_price_x64(tick).unwrap()
    }

    #[test]
    fn test_zero_liquidity_yields_zero_amounts() {
        let amounts = token_amounts_from_liquidity(0, sqrt(-100), sqrt(-200), sqrt(0), true).unwrap();
        assert_eq!(amounts, TokenAmounts::default());
    }

    #[test]
    fn test_current_at_bounds_is_single_sided() {
        let (lower, upper) = (sqrt(-200), sqrt(200));
        let at_lower = token_amounts_from_liquidity(1_000_000_000, lower, lower, upper, false).unwrap();
        assert_eq!(at_lower.token_b, 0);
        assert!(at_lower.token_a > 0);

        let at_upper = token_amounts_from_liquidity(1_000_000_000, upper, lower, upper, false).unwrap();
        assert_eq!(at_upper.token_a, 0);
        assert!(at_upper.token_b > 0);
    }

    #[test]
    fn test_clamping_matches_bound_values() {
        let (lower, upper) = (sqrt(-200), sqrt(200));
        let below = token_amounts_from_liquidity(1_000_000_000, MIN_SQRT_PRICE_X64, lower, upper, true);
        let at_lower = token_amounts_from_liquidity(1_000_000_000, lower, lower, upper, true);
        assert_eq!(below.unwrap(), at_lower.unwrap());

        let above = token_amounts_from_liquidity(1_000_000_000, MAX_SQRT_PRICE_X64, lower, upper, true);
        let at_upper = token_amounts_from_liquidity(1_000_000_000, upper, lower, upper, true);
        assert_eq!(above.unwrap(), at_upper.unwrap());
    }

    #[test]
    fn test_round_up_differs_by_at_most_one() {
        let (lower, upper) = (sqrt(-36864), sqrt(-22976));
        for liquidity in [1u128, 17, 6_638_825, 1_000_000_007] {
            let down = token_amounts_from_liquidity(liquidity, sqrt(-30000), lower, upper, false).unwrap();
            let up = token_amounts_from_liquidity(liquidity, sqrt(-30000), lower, upper, true).unwrap();
            assert!(up.token_a - down.token_a <= 1);
            assert!(up.token_b - down.token_b <= 1);
        }
    }

    #[test]
    fn test_max_liquidity_never_needs_more_than_supplied() {
        let (lower, upper) = (sqrt(-36864), sqrt(-22976));
        let supplied = TokenAmounts::new(16_588_789, 123_305);
        for current in [sqrt(-36000), sqrt(-34646), sqrt(-30000), sqrt(-23000)] {
            let liquidity = max_liquidity_from_token_amounts(current, lower, upper, supplied).unwrap();
            let required = token_amounts_from_liquidity(liquidity, current, lower, upper, false).unwrap();
            assert!(required.token_a <= supplied.token_a);
            assert!(required.token_b <= supplied.token_b);
        }
    }

    #[test]
    fn test_max_liquidity_accepts_bounds_in_either_order() {
        let (lower, upper) = (sqrt(-36864), sqrt(-22976));
        let amounts = TokenAmounts::new(16_588_789, 123_305);
        let current = 3_263_190_564_384_012_888;
        assert_eq!(
            max_liquidity_from_token_amounts(current, upper, lower, amounts).unwrap(),
            max_liquidity_from_token_amounts(current, lower, upper, amounts).unwrap()
        );
    }

    #[test]
    fn test_overflowing_liquidity_reported() {
        let result = token_a_from_liquidity(u128::MAX, MIN_SQRT_PRICE_X64, MIN_SQRT_PRICE_X64, MAX_SQRT_PRICE_X64, true);
        assert!(result.is_err());

        let result = liquidity_from_token_b(MIN_SQRT_PRICE_X64, MIN_SQRT_PRICE_X64 + 1, u64::MAX);
        assert_eq!(result.unwrap(), (u64::MAX as u128) << 64);

        // Range 1 wide at the top of the price space, so L is astronomically large
        let result = liquidity_from_token_a(MAX_SQRT_PRICE_X64 - 1, MAX_SQRT_PRICE_X64, u64::MAX);
        assert_eq!(result.unwrap_err(), MathError::Overflow.into());
    }
}
