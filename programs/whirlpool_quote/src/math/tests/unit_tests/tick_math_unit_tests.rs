#[cfg(test)]
mod tests {
    use crate::error::MathError;
    use crate::math::price_math::*;
    use crate::math::tick_math::*;
    use crate::math::tick_spacing::*;
    use crate::utils::constants::*;
    use anchor_lang::prelude::*;

    // Helper to assert a specific MathError
    fn assert_math_error<T: std::fmt::Debug>(result: Result<T>, expected: MathError) {
        assert_eq!(result.unwrap_err(), expected.into());
    }

    #[test]
    fn test_one_below_each_sqrt_price_is_previous_tick() {
        for tick in [-443_000, -100_000, -39424, -1, 1, 1584, 100_000, 443_000] {
            let sqrt_price = tick_index_to_sqrt_price_x64(tick).unwrap();
            assert_eq!(sqrt_price_x64_to_tick_index(sqrt_price).unwrap(), tick);
            assert_eq!(sqrt_price_x64_to_tick_index(sqrt_price - 1).unwrap(), tick - 1);
        }
    }

    #[test]
    fn test_initializable_ticks_round_trip_for_common_spacings() {
        for spacing in [1u16, 8, 64, 128] {
            let step = spacing as i32 * 97;
            let mut tick = round_to_initializable_tick_index(MIN_TICK, spacing).unwrap();
            while tick <= MAX_TICK {
                assert!(is_initializable(tick, spacing));
                let sqrt_price = tick_index_to_sqrt_price_x64(tick).unwrap();
                assert_eq!(sqrt_price_x64_to_tick_index(sqrt_price).unwrap(), tick);
                tick += step;
            }
        }
    }

    #[test]
    fn test_start_index_contains_tick() {
        for spacing in [1u16, 64, 128] {
            let span = ticks_in_array(spacing);
            for tick in [MIN_TICK, -39424, -1, 0, 1, 1584, MAX_TICK] {
                let start = get_start_tick_index(tick, spacing, 0).unwrap();
                assert_eq!(start % span, 0);
                assert!(start <= tick && tick < start + span, "{} not in [{}, {})", tick, start, start + span);
            }
        }
    }

    #[test]
    fn test_rounding_conventions_differ_for_negative_ticks() {
        // Initializable rounding goes toward zero, array addressing goes down
        assert_eq!(round_to_initializable_tick_index(-63, 64).unwrap(), 0);
        assert_eq!(get_start_tick_index(-63, 64, 0).unwrap(), -5632);
    }

    #[test]
    fn test_price_helpers_propagate_bounds_errors() {
        assert_math_error(tick_index_to_price(MAX_TICK + 1, 6, 6), MathError::TickOutOfBounds);
        let too_large = sqrt_price_x64_to_price(MAX_SQRT_PRICE_X64 + 1_000_000_000_000, 6, 6);
        assert_math_error(price_to_tick_index(&too_large, 6, 6), MathError::SqrtPriceOutOfBounds);
        assert_math_error(
            price_to_initializable_tick_index(&tick_index_to_price(0, 6, 6).unwrap(), 6, 6, 0),
            MathError::InvalidTickSpacing,
        );
    }

    #[test]
    fn test_price_of_tick_matches_tick_of_price() {
        for tick in [-34648, -620, 0, 1584, 64_000] {
            let price = tick_index_to_price(tick, 9, 6).unwrap();
            assert_eq!(price_to_tick_index(&price, 9, 6).unwrap(), tick);
        }
    }
}
