//! Forgematch Scoring Engine
//!
//! Deterministic, explainable supplier scoring. Every candidate starts at
//! a baseline and independent additive adjustments fire off the
//! requirement and the supplier's signals, each appending a reason
//! string. The output preserves input order; this crate does not sort.
//!
//! Scores are clamped to 0..=100 and summarized into a temperature tier
//! (hot >= 85, warm >= 65, cold otherwise). Re-running on identical
//! inputs yields identical scores and reason lists.

#![warn(missing_docs)]
#![warn(clippy::all)]

use forgematch_domain::{signals, MatchTemperature, RankedSupplier, Requirement, Supplier};

/// Every candidate starts here
pub const BASELINE_SCORE: i32 = 40;

/// Quality-management certification bonus
pub const QUALITY_CERT_BONUS: i32 = 18;

/// Aerospace certification bonus
pub const AEROSPACE_CERT_BONUS: i32 = 12;

/// Manufacturing-capability bonus
pub const CNC_CAPABILITY_BONUS: i32 = 10;

/// Bonus when every requested certification is covered
pub const REQUESTED_CERTS_BONUS: i32 = 4;

/// Score and explain a list of candidate suppliers
///
/// Same cardinality and order as the input. Never fails: absent signals
/// degrade the score and reasons, they do not raise.
pub fn rank(requirement: &Requirement, suppliers: &[Supplier]) -> Vec<RankedSupplier> {
    let target_lead_days = requirement.target_lead_days();
    suppliers
        .iter()
        .map(|supplier| score_supplier(requirement, supplier, target_lead_days))
        .collect()
}

fn score_supplier(
    requirement: &Requirement,
    supplier: &Supplier,
    target_lead_days: Option<f64>,
) -> RankedSupplier {
    let bag = &supplier.signals;
    let mut score = BASELINE_SCORE;
    let mut reasons: Vec<String> = Vec::new();
    let mut certifications: Vec<String> = existing_certifications(supplier);

    if signals::has_quality_cert(bag) {
        score += QUALITY_CERT_BONUS;
        add_certification(&mut certifications, "ISO 9001");
        reasons.push("ISO 9001 certified".to_string());
    }
    if signals::has_aerospace_cert(bag) {
        score += AEROSPACE_CERT_BONUS;
        add_certification(&mut certifications, "AS9100");
        reasons.push("AS9100 aerospace certified".to_string());
    }
    if signals::has_cnc_capability(bag) {
        score += CNC_CAPABILITY_BONUS;
        reasons.push("CNC capability".to_string());
    }

    let lead = signals::lead_time_days(bag);
    if let Some(lead) = lead {
        score += lead_time_adjustment(lead, target_lead_days, &mut reasons);
    }

    let recycled = signals::recycled_content_percent(bag);
    if recycled > 0.0 {
        score += if recycled >= 50.0 { 10 } else { 5 };
        reasons.push(format!("{}% recycled content", format_number(recycled)));
    }

    if let Some(budget) = requirement.budget.as_ref().filter(|b| b.is_bounded()) {
        score += budget_adjustment(budget.min, budget.max, bag, &mut reasons);
    }

    if !requirement.certifications.is_empty() {
        let covered = requirement.certifications.iter().all(|wanted| {
            certifications
                .iter()
                .any(|held| held.eq_ignore_ascii_case(wanted))
        });
        if covered {
            score += REQUESTED_CERTS_BONUS;
            reasons.push("Matches requested certifications".to_string());
        }
    }

    let match_score = score.clamp(0, 100) as u8;
    RankedSupplier {
        supplier: supplier.clone(),
        match_score,
        temperature: MatchTemperature::from_score(match_score),
        reasons,
        lead_time_days: lead,
        recycled_content_percent: (recycled > 0.0).then(|| recycled.round() as u32),
        certifications,
    }
}

/// Lead-time brackets, relative to the target when one exists
fn lead_time_adjustment(lead: f64, target: Option<f64>, reasons: &mut Vec<String>) -> i32 {
    match target {
        Some(target) => {
            if lead <= target {
                reasons.push(format!("Meets delivery target ({} days)", format_number(lead)));
                15
            } else if lead <= target + 7.0 {
                reasons.push(format!("Near delivery target ({} days)", format_number(lead)));
                7
            } else {
                reasons.push(format!("Longer delivery (~{} days)", format_number(lead)));
                -5
            }
        }
        None => {
            if lead <= 10.0 {
                reasons.push(format!("Fast lead time ({} days)", format_number(lead)));
                12
            } else if lead <= 21.0 {
                reasons.push(format!("Standard lead time ({} days)", format_number(lead)));
                6
            } else {
                reasons.push(format!("Extended lead time ({} days)", format_number(lead)));
                -3
            }
        }
    }
}

/// Budget fit against the supplier's estimated range
///
/// Neutral (with a reason) when the supplier exposes no budget signals.
fn budget_adjustment(
    target_min: Option<f64>,
    target_max: Option<f64>,
    bag: &forgematch_domain::SignalMap,
    reasons: &mut Vec<String>,
) -> i32 {
    let (supplier_min, supplier_max) = signals::estimated_budget(bag);

    if supplier_min.is_none() && supplier_max.is_none() {
        reasons.push("Budget signals unavailable".to_string());
        return 0;
    }

    let within_lower = match target_min {
        None => true,
        Some(min) => supplier_max.or(supplier_min).unwrap_or(min) >= min,
    };
    let within_upper = match target_max {
        None => true,
        Some(max) => supplier_min.or(supplier_max).unwrap_or(max) <= max,
    };

    if within_lower && within_upper {
        reasons.push("Matches target budget".to_string());
        4
    } else if matches!((target_max, supplier_min), (Some(max), Some(min)) if min > max) {
        reasons.push("Likely above your budget".to_string());
        -6
    } else if matches!((target_min, supplier_max), (Some(min), Some(max)) if max < min) {
        reasons.push("Below requested budget range".to_string());
        -2
    } else {
        0
    }
}

/// Certifications already attached to the record (`certifications` signal)
fn existing_certifications(supplier: &Supplier) -> Vec<String> {
    supplier
        .signals
        .get("certifications")
        .and_then(serde_json::Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(serde_json::Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn add_certification(certifications: &mut Vec<String>, cert: &str) {
    if !certifications.iter().any(|c| c.eq_ignore_ascii_case(cert)) {
        certifications.push(cert.to_string());
    }
}

/// Render whole numbers without a trailing ".0"
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests;
