use affilinker::config::DisplayConfig;
use affilinker::offers::{CommissionRange, GeoCommission, commission_range, format_commission, normalize};
use proptest::prelude::*;
use serde_json::json;

#[cfg(test)]
mod range_tests {
    use super::*;

    #[test]
    fn test_rev_share_range_uses_percent() {
        let offer = normalize(&json!({
            "commission_type": "RevShare",
            "commission_percent": 20,
            "geo_commissions": [
                {"country": "US", "commission_percent": 25},
                {"country": "CA", "commission_percent": 15}
            ]
        }));

        assert_eq!(
            commission_range(&offer),
            Some(CommissionRange {
                min: 15.0,
                max: 25.0
            })
        );
    }

    #[test]
    fn test_flat_range_uses_amount() {
        let offer = normalize(&json!({
            "commission_type": "CPA",
            "commission_amount": 30,
            "geo_commissions": [
                {"country": "US", "commission_amount": "45.5", "commission_percent": 99},
                {"country": "DE", "commission_amount": 20},
                {"country": "FR", "commission_amount": 32}
            ]
        }));

        assert_eq!(
            commission_range(&offer),
            Some(CommissionRange {
                min: 20.0,
                max: 45.5
            })
        );
    }

    #[test]
    fn test_zero_or_one_override_has_no_range() {
        let none = normalize(&json!({"commission_amount": 10}));
        assert_eq!(commission_range(&none), None);

        let single = normalize(&json!({
            "geo_commissions": [{"country": "US", "commission_amount": 10}]
        }));
        assert_eq!(commission_range(&single), None);
    }

    #[test]
    fn test_non_numeric_overrides_are_filtered_out() {
        let offer = normalize(&json!({
            "commission_type": "RevShare",
            "geo_commissions": [
                {"country": "US", "commission_percent": 25},
                {"country": "CA", "commission_percent": "n/a"},
                {"country": "MX", "commission_amount": 12}
            ]
        }));

        assert_eq!(
            commission_range(&offer),
            Some(CommissionRange {
                min: 25.0,
                max: 25.0
            })
        );
    }

    #[test]
    fn test_mixed_overrides_range_over_numeric_only() {
        let offer = normalize(&json!({
            "commission_type": "CPL",
            "geo_commissions": [
                {"country": "US", "commission_amount": "n/a"},
                {"country": "CA", "commission_amount": 8},
                {"country": "GB", "commission_amount": "3.5"},
                {"country": "DE"}
            ]
        }));

        assert_eq!(
            commission_range(&offer),
            Some(CommissionRange { min: 3.5, max: 8.0 })
        );
    }

    #[test]
    fn test_no_numeric_overrides_has_no_range() {
        let offer = normalize(&json!({
            "commission_type": "CPA",
            "commission_amount": 15,
            "geo_commissions": [
                {"country": "US", "commission_amount": "soon"},
                {"country": "CA", "commission_amount": null}
            ]
        }));

        assert_eq!(commission_range(&offer), None);
        assert_eq!(format_commission(&offer, &DisplayConfig::default()), "$15.00");
    }

    #[test]
    fn test_geo_commissions_from_json_string() {
        let offer = normalize(&json!({
            "geo_commissions": "[{\"country\":\"US\",\"commission_amount\":4},{\"country\":\"GB\",\"commission_amount\":9}]"
        }));

        assert_eq!(
            commission_range(&offer),
            Some(CommissionRange { min: 4.0, max: 9.0 })
        );
    }
}

#[cfg(test)]
mod format_tests {
    use super::*;

    #[test]
    fn test_custom_currency_and_decimals() {
        let display = DisplayConfig {
            currency_symbol: "€".into(),
            decimals: 1,
            ..Default::default()
        };
        let offer = normalize(&json!({
            "commission_type": "CPS",
            "geo_commissions": [
                {"country": "DE", "commission_amount": 7.24},
                {"country": "FR", "commission_amount": 11}
            ]
        }));

        assert_eq!(format_commission(&offer, &display), "€7.2 - €11.0");
    }

    #[test]
    fn test_single_rev_share_value() {
        let offer = normalize(&json!({"commission_type": "revshare", "commission_percent": "35"}));
        assert_eq!(format_commission(&offer, &DisplayConfig::default()), "35%");
    }
}

fn geo_commission_strategy() -> impl Strategy<Value = GeoCommission> {
    (
        "[A-Z]{2}",
        prop::option::of(0.0f64..500.0),
        prop::option::of(0.0f64..100.0),
    )
        .prop_map(|(country, amount, percent)| GeoCommission {
            country,
            commission_amount: amount,
            commission_percent: percent,
        })
}

proptest! {
    #[test]
    fn prop_range_is_ordered_and_bounds_overrides(
        overrides in prop::collection::vec(geo_commission_strategy(), 0..12),
        rev_share in any::<bool>(),
    ) {
        let mut offer = normalize(&json!({}));
        if rev_share {
            offer.commission_type = "RevShare".parse().unwrap();
        }
        offer.geo_commissions = overrides.clone();

        let numeric: Vec<f64> = overrides
            .iter()
            .filter_map(|gc| gc.value_for(&offer.commission_type))
            .collect();

        match commission_range(&offer) {
            None => prop_assert!(overrides.len() < 2 || numeric.is_empty()),
            Some(range) => {
                prop_assert!(overrides.len() >= 2);
                prop_assert!(range.min <= range.max);
                for v in &numeric {
                    prop_assert!(range.min <= *v && *v <= range.max);
                }
                prop_assert!(numeric.contains(&range.min));
                prop_assert!(numeric.contains(&range.max));
            }
        }
    }
}
