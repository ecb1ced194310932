use affilinker::offers::{
    CommissionType, FilterSpec, Offer, OfferStatus, WORLDWIDE, filter_offers, normalize,
    normalize_all,
};
use proptest::prelude::*;
use serde_json::json;

const NICHES: &[&str] = &["Finance", "Gaming", "Health"];
const GEOS: &[&str] = &["US", "CA", "GB", "DE"];
const TRAFFIC: &[&str] = &["SEO", "Social", "Email"];

fn sample_offers() -> Vec<Offer> {
    normalize_all(&[
        json!({"id": "1", "niche": "Finance", "status": "active", "commission_type": "CPA",
               "commission_amount": 40, "geo_targets": ["US"], "allowed_traffic_sources": ["SEO"]}),
        json!({"id": "2", "niche": "Gaming", "status": "paused", "commission_type": "RevShare",
               "commission_percent": 30, "geo_targets": null, "allowed_traffic_sources": ["Social"]}),
        json!({"id": "3", "niche": "Finance", "status": "active", "commission_type": "CPL",
               "commission_amount": "5", "geo_targets": "[\"US\",\"CA\"]"}),
        json!({"id": "4", "niche": null, "status": "inactive", "geo_targets": {"DE": true}}),
    ])
}

fn ids(offers: &[&Offer]) -> Vec<String> {
    offers.iter().map(|o| o.id.clone()).collect()
}

#[cfg(test)]
mod example_tests {
    use super::*;

    #[test]
    fn test_empty_spec_is_identity() {
        let offers = sample_offers();
        let result = filter_offers(&offers, &FilterSpec::default());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_encoded_geo_targets_match() {
        let offer = normalize(&json!({"id": "x", "geo_targets": "[\"US\",\"CA\"]"}));
        let spec = FilterSpec {
            geos: vec!["CA".into()],
            ..Default::default()
        };
        assert_eq!(filter_offers(std::slice::from_ref(&offer), &spec).len(), 1);
    }

    #[test]
    fn test_worldwide_offer_passes_geo_filter() {
        let offer = normalize(&json!({"id": "x", "geo_targets": null}));
        let spec = FilterSpec {
            geos: vec!["FR".into()],
            ..Default::default()
        };
        assert_eq!(filter_offers(std::slice::from_ref(&offer), &spec).len(), 1);
    }

    #[test]
    fn test_predicates_are_anded() {
        let offers = sample_offers();
        let spec = FilterSpec {
            niches: vec!["finance".into()],
            status: vec![OfferStatus::Active],
            geos: vec!["ca".into()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_offers(&offers, &spec)), vec!["3"]);
    }

    #[test]
    fn test_payout_uses_percent_for_revshare() {
        let offers = sample_offers();
        let spec = FilterSpec {
            payout_min: Some(25.0),
            payout_max: Some(35.0),
            ..Default::default()
        };
        assert_eq!(ids(&filter_offers(&offers, &spec)), vec!["2"]);
    }

    #[test]
    fn test_payout_bounds_inclusive() {
        let offers = sample_offers();
        let spec = FilterSpec {
            payout_min: Some(5.0),
            payout_max: Some(40.0),
            offer_types: vec![CommissionType::Cpa, CommissionType::Cpl],
            ..Default::default()
        };
        assert_eq!(ids(&filter_offers(&offers, &spec)), vec!["1", "3"]);
    }

    #[test]
    fn test_missing_niche_excluded_by_niche_filter() {
        let offers = sample_offers();
        let spec = FilterSpec {
            niches: vec!["Finance".into(), "Gaming".into(), "Health".into()],
            ..Default::default()
        };
        assert!(!ids(&filter_offers(&offers, &spec)).contains(&"4".to_string()));
    }

    #[test]
    fn test_traffic_filter() {
        let offers = sample_offers();
        let spec = FilterSpec {
            traffic_types: vec!["social".into()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_offers(&offers, &spec)), vec!["2"]);
    }

    #[test]
    fn test_spec_deserializes_from_ui_shape() {
        let spec: FilterSpec = serde_json::from_value(json!({
            "niche": ["Finance"],
            "payoutMin": 10,
            "offerTypes": ["CPA", "revshare"],
            "geos": ["US"],
            "trafficTypes": [],
            "statuses": ["active"]
        }))
        .unwrap();

        assert_eq!(spec.niches, vec!["Finance"]);
        assert_eq!(spec.payout_min, Some(10.0));
        assert_eq!(
            spec.offer_types,
            vec![CommissionType::Cpa, CommissionType::RevShare]
        );
        assert_eq!(spec.status, vec![OfferStatus::Active]);
        assert_eq!(spec.active_predicates(), 5);
    }
}

fn commission_type_strategy() -> impl Strategy<Value = CommissionType> {
    prop_oneof![
        Just(CommissionType::Cpa),
        Just(CommissionType::Cpl),
        Just(CommissionType::Cps),
        Just(CommissionType::RevShare),
    ]
}

fn status_strategy() -> impl Strategy<Value = OfferStatus> {
    prop_oneof![
        Just(OfferStatus::Active),
        Just(OfferStatus::Paused),
        Just(OfferStatus::Inactive),
        Just(OfferStatus::Pending),
    ]
}

fn subset(values: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(values.to_vec(), 0..=values.len())
        .prop_map(|v| v.into_iter().map(str::to_string).collect())
}

prop_compose! {
    fn offer_strategy()(
        niche in prop::option::of(prop::sample::select(NICHES.to_vec())),
        status in status_strategy(),
        commission_type in commission_type_strategy(),
        amount in 0u32..100,
        percent in 0u32..50,
        geos in subset(GEOS),
        traffic in subset(TRAFFIC),
    ) -> Offer {
        Offer {
            id: "p".into(),
            name: "prop".into(),
            description: None,
            destination_url: None,
            niche: niche.map(str::to_string),
            status,
            featured: false,
            commission_type,
            commission_amount: amount as f64,
            commission_percent: percent as f64,
            geo_commissions: Vec::new(),
            geo_targets: if geos.is_empty() { vec![WORLDWIDE.to_string()] } else { geos },
            restricted_geos: Vec::new(),
            allowed_traffic_sources: traffic,
        }
    }
}

prop_compose! {
    fn spec_strategy()(
        niches in subset(NICHES),
        payout_min in prop::option::of(0u32..100),
        payout_max in prop::option::of(0u32..100),
        offer_types in prop::collection::vec(commission_type_strategy(), 0..3),
        geos in subset(GEOS),
        traffic_types in subset(TRAFFIC),
        status in prop::collection::vec(status_strategy(), 0..3),
        lowercase in any::<bool>(),
    ) -> FilterSpec {
        let case = |v: Vec<String>| -> Vec<String> {
            if lowercase { v.into_iter().map(|s| s.to_lowercase()).collect() } else { v }
        };
        FilterSpec {
            niches: case(niches),
            payout_min: payout_min.map(f64::from),
            payout_max: payout_max.map(f64::from),
            offer_types,
            geos: case(geos),
            traffic_types: case(traffic_types),
            status,
        }
    }
}

/// 逐条判断的参照实现
fn expected_match(offer: &Offer, spec: &FilterSpec) -> bool {
    let any_eq = |wanted: &[String], have: &str| wanted.iter().any(|w| w.eq_ignore_ascii_case(have));

    let niche_ok = spec.niches.is_empty()
        || offer.niche.as_deref().is_some_and(|n| any_eq(&spec.niches, n));
    let payout = if offer.commission_type == CommissionType::RevShare {
        offer.commission_percent
    } else {
        offer.commission_amount
    };
    let payout_ok = spec.payout_min.is_none_or(|min| payout >= min)
        && spec.payout_max.is_none_or(|max| payout <= max);
    let type_ok = spec.offer_types.is_empty() || spec.offer_types.contains(&offer.commission_type);
    let geo_ok = spec.geos.is_empty()
        || offer.geo_targets == vec![WORLDWIDE.to_string()]
        || offer.geo_targets.iter().any(|g| any_eq(&spec.geos, g));
    let traffic_ok = spec.traffic_types.is_empty()
        || offer
            .allowed_traffic_sources
            .iter()
            .any(|t| any_eq(&spec.traffic_types, t));
    let status_ok = spec.status.is_empty() || spec.status.contains(&offer.status);

    niche_ok && payout_ok && type_ok && geo_ok && traffic_ok && status_ok
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_single_offer_matches_iff_all_predicates_hold(
        offer in offer_strategy(),
        spec in spec_strategy(),
    ) {
        let included = !filter_offers(std::slice::from_ref(&offer), &spec).is_empty();
        prop_assert_eq!(included, expected_match(&offer, &spec));
        prop_assert_eq!(included, spec.matches(&offer));
    }

    #[test]
    fn prop_filter_preserves_order(
        offers in prop::collection::vec(offer_strategy(), 0..20),
        spec in spec_strategy(),
    ) {
        let offers: Vec<Offer> = offers
            .into_iter()
            .enumerate()
            .map(|(i, mut o)| { o.id = i.to_string(); o })
            .collect();
        let result = filter_offers(&offers, &spec);
        let positions: Vec<usize> = result.iter().map(|o| o.id.parse().unwrap()).collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_empty_spec_keeps_everything(
        offers in prop::collection::vec(offer_strategy(), 0..20),
    ) {
        let result = filter_offers(&offers, &FilterSpec::default());
        prop_assert_eq!(result.len(), offers.len());
    }
}
