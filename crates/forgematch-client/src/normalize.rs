//! Normalization of raw business records
//!
//! Each logical field has one resolver that walks a documented priority
//! list over the raw record and its signal bag and returns the first
//! usable value, so the fallback chains stay auditable and testable in
//! isolation.

use forgematch_domain::supplier::{PLACEHOLDER_COMPANY_NAME, PLACEHOLDER_HQ_LOCATION};
use forgematch_domain::{SignalMap, Supplier};
use serde_json::Value;

/// Non-empty string at a key
fn string_at<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Non-empty string from the signal bag
fn signal_string<'a>(signals: &'a SignalMap, key: &str) -> Option<&'a str> {
    signals
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Signal bag: `signals`, else `signal_values`, else empty
pub fn resolve_signals(record: &Value) -> SignalMap {
    ["signals", "signal_values"]
        .iter()
        .find_map(|key| record.get(*key).and_then(Value::as_object))
        .cloned()
        .unwrap_or_default()
}

/// Company name: `company_name`, `name`, signal `company_name`, placeholder
pub fn resolve_company_name(record: &Value, signals: &SignalMap) -> String {
    string_at(record, "company_name")
        .or_else(|| string_at(record, "name"))
        .or_else(|| signal_string(signals, "company_name"))
        .unwrap_or(PLACEHOLDER_COMPANY_NAME)
        .to_string()
}

/// Headquarters: `hq_location`, `location`, `state`, signal `hq_location`,
/// signal `state`, placeholder
pub fn resolve_hq_location(record: &Value, signals: &SignalMap) -> String {
    string_at(record, "hq_location")
        .or_else(|| string_at(record, "location"))
        .or_else(|| string_at(record, "state"))
        .or_else(|| signal_string(signals, "hq_location"))
        .or_else(|| signal_string(signals, "state"))
        .unwrap_or(PLACEHOLDER_HQ_LOCATION)
        .to_string()
}

/// Website: `website`, `domain`, signal `website`; may be absent
pub fn resolve_website(record: &Value, signals: &SignalMap) -> Option<String> {
    string_at(record, "website")
        .or_else(|| string_at(record, "domain"))
        .or_else(|| signal_string(signals, "website"))
        .map(str::to_string)
}

/// Normalize one raw record into the uniform supplier shape
pub fn normalize_record(record: &Value) -> Supplier {
    let signals = resolve_signals(record);
    Supplier {
        business_id: string_at(record, "business_id").map(str::to_string),
        company_name: resolve_company_name(record, &signals),
        hq_location: resolve_hq_location(record, &signals),
        website: resolve_website(record, &signals),
        signals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_company_name_chain() {
        let signals = SignalMap::new();
        assert_eq!(
            resolve_company_name(&json!({ "company_name": "Acme" }), &signals),
            "Acme"
        );
        assert_eq!(resolve_company_name(&json!({ "name": "Beta Corp" }), &signals), "Beta Corp");

        let signals = resolve_signals(&json!({ "signals": { "company_name": "Gamma" } }));
        assert_eq!(resolve_company_name(&json!({}), &signals), "Gamma");
        assert_eq!(
            resolve_company_name(&json!({}), &SignalMap::new()),
            "Untitled Supplier"
        );
    }

    #[test]
    fn test_empty_strings_fall_through() {
        let signals = SignalMap::new();
        assert_eq!(
            resolve_company_name(&json!({ "company_name": "  ", "name": "Real Name" }), &signals),
            "Real Name"
        );
    }

    #[test]
    fn test_hq_location_chain() {
        let signals = SignalMap::new();
        assert_eq!(
            resolve_hq_location(&json!({ "location": "Austin, TX" }), &signals),
            "Austin, TX"
        );
        assert_eq!(resolve_hq_location(&json!({ "state": "OH" }), &signals), "OH");
        assert_eq!(resolve_hq_location(&json!({}), &signals), "United States");

        let signals = resolve_signals(&json!({ "signal_values": { "state": "WA" } }));
        assert_eq!(resolve_hq_location(&json!({}), &signals), "WA");
    }

    #[test]
    fn test_website_chain_may_be_absent() {
        let signals = SignalMap::new();
        assert_eq!(
            resolve_website(&json!({ "domain": "acme.example.com" }), &signals),
            Some("acme.example.com".to_string())
        );
        assert_eq!(resolve_website(&json!({}), &signals), None);
    }

    #[test]
    fn test_signal_bag_priority() {
        let both = json!({
            "signals": { "a": 1 },
            "signal_values": { "b": 2 }
        });
        let signals = resolve_signals(&both);
        assert!(signals.contains_key("a"));
        assert!(!signals.contains_key("b"));
    }

    #[test]
    fn test_normalize_full_record() {
        let record = json!({
            "business_id": "biz-42",
            "name": "Delta Manufacturing",
            "hq_location": "Cleveland, OH",
            "website": "https://delta.example.com",
            "signals": { "iso_9001": true, "lead_time_days": 12 }
        });
        let supplier = normalize_record(&record);
        assert_eq!(supplier.business_id.as_deref(), Some("biz-42"));
        assert_eq!(supplier.company_name, "Delta Manufacturing");
        assert_eq!(supplier.hq_location, "Cleveland, OH");
        assert_eq!(supplier.website.as_deref(), Some("https://delta.example.com"));
        assert_eq!(supplier.signals.get("lead_time_days"), Some(&json!(12)));
    }

    #[test]
    fn test_normalize_bare_record_gets_placeholders() {
        let supplier = normalize_record(&json!({}));
        assert_eq!(supplier.company_name, "Untitled Supplier");
        assert_eq!(supplier.hq_location, "United States");
        assert_eq!(supplier.website, None);
        assert!(supplier.signals.is_empty());
    }
}
