//! Full sweeps over the tick domain. These take minutes in debug builds and
//! only run with `--features verification`.

#[cfg(test)]
mod tests {
    use crate::math::tick_math::*;
    use crate::utils::constants::*;

    #[test]
    fn test_every_tick_round_trips_and_increases() {
        let mut prev = tick_index_to_sqrt_price_x64(MIN_TICK).unwrap();
        assert_eq!(sqrt_price_x64_to_tick_index(prev).unwrap(), MIN_TICK);

        for tick in MIN_TICK + 1..=MAX_TICK {
            let sqrt_price = tick_index_to_sqrt_price_x64(tick).unwrap();
            assert!(sqrt_price > prev, "not increasing at tick {}", tick);
            assert_eq!(sqrt_price_x64_to_tick_index(sqrt_price).unwrap(), tick);
            assert_eq!(sqrt_price_x64_to_tick_index(sqrt_price - 1).unwrap(), tick - 1);
            prev = sqrt_price;
        }
    }
}
