//! Yield adjustment: normalized quantity → usable (post-trim) quantity.

use menucost_core::{DomainError, DomainResult, NormalizedQuantity, UsableQuantity};

/// Scale a normalized quantity by an ingredient's yield percent.
///
/// `yield_percent` must lie in (0, 100]. Full floating precision is kept;
/// rounding belongs to the presentation layer.
pub fn apply_yield(qty: NormalizedQuantity, yield_percent: f64) -> DomainResult<UsableQuantity> {
    if !(yield_percent.is_finite() && yield_percent > 0.0 && yield_percent <= 100.0) {
        return Err(DomainError::invalid_yield(yield_percent));
    }
    Ok(UsableQuantity::new(qty.value() * (yield_percent / 100.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_yield_is_identity() {
        let out = apply_yield(NormalizedQuantity::new(2500.0), 100.0).unwrap();
        assert_eq!(out.value(), 2500.0);
    }

    #[test]
    fn trimming_scales_down() {
        let out = apply_yield(NormalizedQuantity::new(1000.0), 65.0).unwrap();
        assert!((out.value() - 650.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_yield_is_rejected() {
        for bad in [0.0, -10.0, 100.1, f64::NAN, f64::INFINITY] {
            let err = apply_yield(NormalizedQuantity::new(1.0), bad).unwrap_err();
            assert!(matches!(err, DomainError::InvalidYield { .. }));
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: output is monotonically non-decreasing in yield percent.
            #[test]
            fn monotone_in_yield_percent(
                qty in 0.0f64..1.0e6,
                lo in 0.01f64..100.0,
                hi in 0.01f64..100.0,
            ) {
                let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
                let a = apply_yield(NormalizedQuantity::new(qty), lo).unwrap();
                let b = apply_yield(NormalizedQuantity::new(qty), hi).unwrap();
                prop_assert!(a.value() <= b.value());
            }

            /// Property: 100% yield returns the normalized quantity unchanged.
            #[test]
            fn full_yield_identity(qty in 0.0f64..1.0e6) {
                let out = apply_yield(NormalizedQuantity::new(qty), 100.0).unwrap();
                prop_assert_eq!(out.value(), qty);
            }
        }
    }
}
