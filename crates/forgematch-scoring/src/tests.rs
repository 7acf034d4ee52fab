//! Scoring engine tests

use crate::rank;
use forgematch_domain::{
    Budget, Delivery, MatchTemperature, Requirement, Supplier,
};
use proptest::prelude::*;
use serde_json::{json, Value};

fn supplier_with_signals(signals: Value) -> Supplier {
    Supplier {
        business_id: None,
        company_name: "Test Supplier".to_string(),
        hq_location: "United States".to_string(),
        website: None,
        signals: signals.as_object().cloned().unwrap_or_default(),
    }
}

fn requirement_with_delivery(delivery: Delivery) -> Requirement {
    Requirement {
        delivery: Some(delivery),
        ..Default::default()
    }
}

#[test]
fn test_baseline_score_for_empty_record() {
    let ranked = rank(&Requirement::default(), &[supplier_with_signals(json!({}))]);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].match_score, 40);
    assert_eq!(ranked[0].temperature, MatchTemperature::Cold);
    assert!(ranked[0].reasons.is_empty());
    assert_eq!(ranked[0].lead_time_days, None);
    assert_eq!(ranked[0].recycled_content_percent, None);
}

#[test]
fn test_certification_and_capability_bonuses() {
    let supplier = supplier_with_signals(json!({
        "iso_9001": true,
        "as9100": "yes",
        "has_cnc_capability": 1,
    }));
    let ranked = rank(&Requirement::default(), &[supplier]);
    assert_eq!(ranked[0].match_score, 80);
    assert_eq!(ranked[0].temperature, MatchTemperature::Warm);
    assert_eq!(
        ranked[0].reasons,
        vec!["ISO 9001 certified", "AS9100 aerospace certified", "CNC capability"]
    );
    assert_eq!(ranked[0].certifications, vec!["ISO 9001", "AS9100"]);
}

#[test]
fn test_certified_fast_shop_outscores_slow_uncertified() {
    // 7-day target: certified 5-day shop vs bare 30-day shop
    let requirement = requirement_with_delivery(Delivery::Days(7.0));
    let fast = supplier_with_signals(json!({ "iso_9001": true, "lead_time_days": 5 }));
    let slow = supplier_with_signals(json!({ "lead_time_days": 30 }));

    let ranked = rank(&requirement, &[fast, slow]);
    assert_eq!(ranked[0].match_score, 73); // 40 + 18 + 15
    assert_eq!(ranked[1].match_score, 35); // 40 - 5
    assert!(ranked[0].match_score >= ranked[1].match_score + 33);
    assert_eq!(ranked[0].temperature, MatchTemperature::Warm);
    assert_eq!(ranked[1].temperature, MatchTemperature::Cold);
    // Input order is preserved, not sorted
    assert_eq!(ranked[0].lead_time_days, Some(5.0));
    assert_eq!(ranked[1].lead_time_days, Some(30.0));
}

#[test]
fn test_lead_time_brackets_with_target() {
    let requirement = requirement_with_delivery(Delivery::Days(10.0));

    let at_target = rank(&requirement, &[supplier_with_signals(json!({ "lead_time_days": 10 }))]);
    assert_eq!(at_target[0].match_score, 55); // +15
    assert_eq!(at_target[0].reasons, vec!["Meets delivery target (10 days)"]);

    let near = rank(&requirement, &[supplier_with_signals(json!({ "lead_time_days": 17 }))]);
    assert_eq!(near[0].match_score, 47); // +7
    assert_eq!(near[0].reasons, vec!["Near delivery target (17 days)"]);

    let beyond = rank(&requirement, &[supplier_with_signals(json!({ "lead_time_days": 18 }))]);
    assert_eq!(beyond[0].match_score, 35); // -5
    assert_eq!(beyond[0].reasons, vec!["Longer delivery (~18 days)"]);
}

#[test]
fn test_week_target_converts_to_days() {
    let requirement = requirement_with_delivery(Delivery::Weeks(2.0));
    let ranked = rank(&requirement, &[supplier_with_signals(json!({ "lead_time_days": 14 }))]);
    assert_eq!(ranked[0].match_score, 55); // 14 <= 14, meets target
}

#[test]
fn test_lead_time_brackets_without_target() {
    let requirement = Requirement::default();

    let fast = rank(&requirement, &[supplier_with_signals(json!({ "lead_time_days": 10 }))]);
    assert_eq!(fast[0].match_score, 52); // +12
    assert_eq!(fast[0].reasons, vec!["Fast lead time (10 days)"]);

    let standard = rank(&requirement, &[supplier_with_signals(json!({ "lead_time_days": 21 }))]);
    assert_eq!(standard[0].match_score, 46); // +6

    let extended = rank(&requirement, &[supplier_with_signals(json!({ "lead_time_days": 22 }))]);
    assert_eq!(extended[0].match_score, 37); // -3
    assert_eq!(extended[0].reasons, vec!["Extended lead time (22 days)"]);
}

#[test]
fn test_lead_time_from_fallback_signal() {
    let ranked = rank(
        &Requirement::default(),
        &[supplier_with_signals(json!({ "avg_lead_time_days": "9" }))],
    );
    assert_eq!(ranked[0].lead_time_days, Some(9.0));
    assert_eq!(ranked[0].match_score, 52);
}

#[test]
fn test_recycled_content_thresholds() {
    let high = rank(
        &Requirement::default(),
        &[supplier_with_signals(json!({ "recycled_content_percent": 75 }))],
    );
    assert_eq!(high[0].match_score, 50); // +10
    assert_eq!(high[0].reasons, vec!["75% recycled content"]);
    assert_eq!(high[0].recycled_content_percent, Some(75));

    let low = rank(
        &Requirement::default(),
        &[supplier_with_signals(json!({ "recycled_content_percent": 30 }))],
    );
    assert_eq!(low[0].match_score, 45); // +5

    let none = rank(
        &Requirement::default(),
        &[supplier_with_signals(json!({ "recycled_content_percent": 0 }))],
    );
    assert_eq!(none[0].match_score, 40);
    assert_eq!(none[0].recycled_content_percent, None);
}

fn budget_requirement(min: Option<f64>, max: Option<f64>) -> Requirement {
    Requirement {
        budget: Some(Budget { min, max }),
        ..Default::default()
    }
}

#[test]
fn test_budget_overlap_bonus() {
    let requirement = budget_requirement(Some(10_000.0), Some(75_000.0));
    let supplier = supplier_with_signals(json!({
        "est_budget_min": 20_000,
        "est_budget_max": 60_000,
    }));
    let ranked = rank(&requirement, &[supplier]);
    assert_eq!(ranked[0].match_score, 44); // +4
    assert_eq!(ranked[0].reasons, vec!["Matches target budget"]);
}

#[test]
fn test_budget_above_penalty() {
    let requirement = budget_requirement(None, Some(50_000.0));
    let supplier = supplier_with_signals(json!({ "est_budget_min": 80_000 }));
    let ranked = rank(&requirement, &[supplier]);
    assert_eq!(ranked[0].match_score, 34); // -6
    assert_eq!(ranked[0].reasons, vec!["Likely above your budget"]);
}

#[test]
fn test_budget_below_penalty() {
    let requirement = budget_requirement(Some(100_000.0), None);
    let supplier = supplier_with_signals(json!({ "est_budget_max": 40_000 }));
    let ranked = rank(&requirement, &[supplier]);
    assert_eq!(ranked[0].match_score, 38); // -2
    assert_eq!(ranked[0].reasons, vec!["Below requested budget range"]);
}

#[test]
fn test_budget_signals_unavailable_is_neutral() {
    let requirement = budget_requirement(Some(10_000.0), Some(75_000.0));
    let ranked = rank(&requirement, &[supplier_with_signals(json!({}))]);
    assert_eq!(ranked[0].match_score, 40);
    assert_eq!(ranked[0].reasons, vec!["Budget signals unavailable"]);
}

#[test]
fn test_no_budget_requirement_skips_budget_rules() {
    let ranked = rank(
        &Requirement::default(),
        &[supplier_with_signals(json!({ "est_budget_min": 999_999 }))],
    );
    assert_eq!(ranked[0].match_score, 40);
    assert!(ranked[0].reasons.is_empty());
}

#[test]
fn test_requested_certifications_superset_bonus() {
    let requirement = Requirement {
        certifications: vec!["ISO 9001".to_string(), "NADCAP".to_string()],
        ..Default::default()
    };
    let supplier = supplier_with_signals(json!({
        "iso_9001": true,
        "certifications": ["nadcap"],
    }));
    let ranked = rank(&requirement, &[supplier]);
    // 40 + 18 (ISO) + 4 (covers ISO 9001 and NADCAP, case-insensitive)
    assert_eq!(ranked[0].match_score, 62);
    assert!(ranked[0]
        .reasons
        .contains(&"Matches requested certifications".to_string()));
}

#[test]
fn test_requested_certifications_partial_no_bonus() {
    let requirement = Requirement {
        certifications: vec!["ISO 9001".to_string(), "AS9100".to_string()],
        ..Default::default()
    };
    let supplier = supplier_with_signals(json!({ "iso_9001": true }));
    let ranked = rank(&requirement, &[supplier]);
    assert_eq!(ranked[0].match_score, 58); // ISO bonus only
}

#[test]
fn test_certification_union_keeps_existing() {
    let supplier = supplier_with_signals(json!({
        "iso_9001": true,
        "certifications": ["NADCAP"],
    }));
    let ranked = rank(&Requirement::default(), &[supplier]);
    assert_eq!(ranked[0].certifications, vec!["NADCAP", "ISO 9001"]);
}

#[test]
fn test_score_clamped_at_100() {
    let requirement = Requirement {
        delivery: Some(Delivery::Days(30.0)),
        budget: Some(Budget {
            min: Some(1_000.0),
            max: Some(100_000.0),
        }),
        certifications: vec!["ISO 9001".to_string()],
        ..Default::default()
    };
    // 40 +18 +12 +10 +15 +10 +4 +4 = 113 before clamping
    let supplier = supplier_with_signals(json!({
        "iso_9001": true,
        "as9100": true,
        "has_cnc_capability": true,
        "lead_time_days": 5,
        "recycled_content_percent": 90,
        "est_budget_min": 5_000,
        "est_budget_max": 50_000,
    }));
    let ranked = rank(&requirement, &[supplier]);
    assert_eq!(ranked[0].match_score, 100);
    assert_eq!(ranked[0].temperature, MatchTemperature::Hot);
}

#[test]
fn test_order_and_cardinality_preserved() {
    let suppliers = vec![
        supplier_with_signals(json!({ "lead_time_days": 30 })),
        supplier_with_signals(json!({ "iso_9001": true })),
        supplier_with_signals(json!({})),
    ];
    let ranked = rank(&Requirement::default(), &suppliers);
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].lead_time_days, Some(30.0));
    assert!(ranked[1].certifications.contains(&"ISO 9001".to_string()));
}

#[test]
fn test_rank_is_idempotent() {
    let requirement = requirement_with_delivery(Delivery::Weeks(1.0));
    let suppliers = vec![
        supplier_with_signals(json!({ "iso_9001": true, "lead_time_days": 6 })),
        supplier_with_signals(json!({ "recycled_content_percent": 55 })),
    ];
    let first = rank(&requirement, &suppliers);
    let second = rank(&requirement, &suppliers);
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn prop_score_in_range_and_temperature_consistent(
        iso in any::<bool>(),
        as9100 in any::<bool>(),
        cnc in any::<bool>(),
        lead in proptest::option::of(-50.0f64..400.0),
        recycled in -10.0f64..150.0,
        target_days in proptest::option::of(0.0f64..60.0),
    ) {
        let mut signals = serde_json::Map::new();
        signals.insert("iso_9001".to_string(), json!(iso));
        signals.insert("as9100".to_string(), json!(as9100));
        signals.insert("has_cnc_capability".to_string(), json!(cnc));
        if let Some(lead) = lead {
            signals.insert("lead_time_days".to_string(), json!(lead));
        }
        signals.insert("recycled_content_percent".to_string(), json!(recycled));

        let supplier = Supplier {
            business_id: None,
            company_name: "Prop Supplier".to_string(),
            hq_location: "United States".to_string(),
            website: None,
            signals,
        };
        let requirement = Requirement {
            delivery: target_days.map(Delivery::Days),
            ..Default::default()
        };

        let ranked = rank(&requirement, &[supplier]);
        prop_assert!(ranked[0].match_score <= 100);
        prop_assert_eq!(
            ranked[0].temperature,
            MatchTemperature::from_score(ranked[0].match_score)
        );
    }
}
