#[cfg(test)]
mod tests {
    use crate::math::percentage::Percentage;
    use bigdecimal::BigDecimal;
    use proptest::prelude::*;

    fn slippage() -> impl Strategy<Value = Percentage> {
        (1u64..=10_000, 1u64..=1_000_000)
            .prop_filter("numerator must not exceed denominator", |(n, d)| n <= d)
            .prop_map(|(n, d)| Percentage::from_fraction(n, d).unwrap())
    }

    proptest! {
        #[test]
        fn test_slippage_bounds_bracket_estimate(p in slippage(), estimate in 1u64..=u64::MAX / 2) {
            let min = p.adjust_sub(estimate).unwrap();
            let max = p.adjust_add(estimate).unwrap();
            prop_assert!(min <= estimate);
            prop_assert!(estimate <= max);
        }

        #[test]
        fn test_zero_slippage_is_identity(d in 0u64..=u64::MAX, estimate in 0u64..=u64::MAX) {
            let p = Percentage::from_fraction(0, d).unwrap();
            prop_assert_eq!(p.adjust_add(estimate).unwrap(), estimate);
            prop_assert_eq!(p.adjust_sub(estimate).unwrap(), estimate);
        }

        #[test]
        fn test_from_percentage_keeps_value(basis in 1u64..=1_000_000) {
            // basis counts ten-thousandths of a percent
            let percent = BigDecimal::new(basis.into(), 4);
            let p = Percentage::from_percentage(&percent).unwrap();
            prop_assert_eq!(p.to_decimal() * BigDecimal::from(100u32), percent);
        }
    }
}
