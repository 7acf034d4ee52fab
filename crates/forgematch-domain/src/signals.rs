//! Signal accessors - fallback-chain resolvers over the open signal bag
//!
//! The external data source reports enrichment attributes under varying
//! key names and loose value types (booleans as strings, numbers as
//! strings). Each logical field gets one small resolver that walks a
//! documented priority list of keys and coerces the first present value.

use crate::supplier::SignalMap;
use serde_json::Value;

/// Interpret a loose signal value as a boolean flag
///
/// Strings "true", "1", "yes", "y" (trimmed, case-insensitive) are true;
/// numbers are true when positive; null is false; containers are true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::String(s) => {
            matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes" | "y")
        }
        Value::Number(n) => n.as_f64().map_or(false, |v| v > 0.0),
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Coerce a loose signal value to a finite number, if possible
pub fn as_finite_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// First value present along a priority list of keys
fn first_signal<'a>(signals: &'a SignalMap, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| signals.get(*key))
        .filter(|v| !v.is_null())
}

/// True when any key along the chain holds a truthy value
fn truthy_signal(signals: &SignalMap, keys: &[&str]) -> bool {
    first_signal(signals, keys).map_or(false, is_truthy)
}

/// First finite number along the chain
fn numeric_signal(signals: &SignalMap, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| signals.get(*key))
        .find_map(as_finite_number)
}

/// Quality-management certification flag (`iso_9001`, `iso_9001_certified`)
pub fn has_quality_cert(signals: &SignalMap) -> bool {
    truthy_signal(signals, &["iso_9001", "iso_9001_certified"])
}

/// Aerospace certification flag (`as9100`, `as9100_certified`)
pub fn has_aerospace_cert(signals: &SignalMap) -> bool {
    truthy_signal(signals, &["as9100", "as9100_certified"])
}

/// CNC capability flag (`has_cnc_capability`, `cnc_capability`)
pub fn has_cnc_capability(signals: &SignalMap) -> bool {
    truthy_signal(signals, &["has_cnc_capability", "cnc_capability"])
}

/// Lead time in days (`lead_time_days`, else `avg_lead_time_days`)
pub fn lead_time_days(signals: &SignalMap) -> Option<f64> {
    numeric_signal(signals, &["lead_time_days", "avg_lead_time_days"])
}

/// Recycled-content percentage; absent or malformed resolves to zero
pub fn recycled_content_percent(signals: &SignalMap) -> f64 {
    numeric_signal(
        signals,
        &["recycled_content_percent", "sustainability_recycled_percent"],
    )
    .unwrap_or(0.0)
}

/// Estimated project budget bounds (`est_budget_min`, `est_budget_max`)
pub fn estimated_budget(signals: &SignalMap) -> (Option<f64>, Option<f64>) {
    (
        signals.get("est_budget_min").and_then(as_finite_number),
        signals.get("est_budget_max").and_then(as_finite_number),
    )
}
