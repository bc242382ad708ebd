#[cfg(test)]
mod tests {
    use crate::math::tick_math::*;
    use crate::math::tick_spacing::*;
    use crate::utils::constants::*;
    use proptest::prelude::*;

    fn valid_tick() -> impl Strategy<Value = i32> {
        MIN_TICK..=MAX_TICK
    }

    fn valid_sqrt_price() -> impl Strategy<Value = u128> {
        MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64
    }

    fn tick_spacing() -> impl Strategy<Value = u16> {
        prop_oneof![Just(1u16), Just(8u16), Just(64u16), Just(128u16), 1u16..=512u16]
    }

    proptest! {
        #[test]
        fn test_tick_round_trip(tick in valid_tick()) {
            let sqrt_price = tick_index_to_sqrt_price_x64(tick).unwrap();
            prop_assert_eq!(sqrt_price_x64_to_tick_index(sqrt_price).unwrap(), tick);
        }

        #[test]
        fn test_strictly_increasing(tick in MIN_TICK..MAX_TICK) {
            let lower = tick_index_to_sqrt_price_x64(tick).unwrap();
            let upper = tick_index_to_sqrt_price_x64(tick + 1).unwrap();
            prop_assert!(lower < upper);
        }

        #[test]
        fn test_output_within_sqrt_price_bounds(tick in valid_tick()) {
            let sqrt_price = tick_index_to_sqrt_price_x64(tick).unwrap();
            prop_assert!((MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64).contains(&sqrt_price));
        }

        #[test]
        fn test_inverse_brackets_sqrt_price(sqrt_price in valid_sqrt_price()) {
            let tick = sqrt_price_x64_to_tick_index(sqrt_price).unwrap();
            prop_assert!(tick_index_to_sqrt_price_x64(tick).unwrap() <= sqrt_price);
            if tick < MAX_TICK {
                prop_assert!(sqrt_price < tick_index_to_sqrt_price_x64(tick + 1).unwrap());
            }
        }

        #[test]
        fn test_out_of_range_ticks_rejected(tick in prop_oneof![i32::MIN..MIN_TICK, (MAX_TICK + 1)..=i32::MAX]) {
            prop_assert!(tick_index_to_sqrt_price_x64(tick).is_err());
            prop_assert!(!is_tick_in_bounds(tick));
            prop_assert!(round_to_initializable_tick_index(tick, 64).is_err());
        }

        #[test]
        fn test_rounded_tick_is_initializable_and_not_farther_from_zero(
            tick in valid_tick(),
            spacing in tick_spacing(),
        ) {
            let rounded = round_to_initializable_tick_index(tick, spacing).unwrap();
            prop_assert!(is_initializable(rounded, spacing));
            prop_assert!(rounded.abs() <= tick.abs());
            prop_assert!(tick.abs() - rounded.abs() < spacing as i32);
            prop_assert!(rounded == 0 || rounded.signum() == tick.signum());
        }

        #[test]
        fn test_start_index_neighbours(tick in -400_000i32..=400_000, spacing in 1u16..=16u16) {
            let span = ticks_in_array(spacing);
            let start = get_start_tick_index(tick, spacing, 0).unwrap();
            prop_assert!(start <= tick && tick < start + span);
            prop_assert_eq!(get_start_tick_index(tick, spacing, 1).unwrap(), start + span);
            prop_assert_eq!(get_start_tick_index(tick, spacing, -1).unwrap(), start - span);
        }
    }
}
