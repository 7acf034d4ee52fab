//! Filter construction for the business-data API
//!
//! Filters follow the upstream "values + include/exclude operator"
//! structure. The base set pins the search to U.S. metal manufacturers;
//! the requirement adds location, lead-time, and budget constraints.

use forgematch_domain::Requirement;
use serde_json::{json, Value};

/// NAICS codes for metal manufacturing
///
/// Iron and steel mills, steel wire drawing, sheet metal work, metal can
/// manufacturing, precision turned products.
pub const NAICS_METAL_MANUFACTURING: [&str; 5] =
    ["331110", "331222", "332322", "332431", "332721"];

/// Build the upstream filter object for a requirement
pub fn build_filters(requirement: &Requirement) -> Value {
    let mut map = serde_json::Map::new();
    map.insert(
        "countries".to_string(),
        json!({ "values": ["United States"], "operator": "include" }),
    );
    map.insert(
        "naics_codes".to_string(),
        json!({ "values": NAICS_METAL_MANUFACTURING, "operator": "include" }),
    );

    if let Some(location) = &requirement.location {
        if let Some(state) = location.state() {
            map.insert(
                "states".to_string(),
                json!({ "values": [state], "operator": "include" }),
            );
        }
        if let Some(zip) = location.zip() {
            map.insert(
                "zip_codes".to_string(),
                json!({ "values": [zip], "operator": "include" }),
            );
        }
    }

    if let Some(target_days) = requirement.target_lead_days().filter(|days| *days > 0.0) {
        map.insert("lead_time_days_max".to_string(), json!(target_days));
    }

    if let Some(budget) = &requirement.budget {
        if let Some(min) = budget.min.filter(|v| *v > 0.0) {
            map.insert("project_budget_min".to_string(), json!(min));
        }
        if let Some(max) = budget.max.filter(|v| *v > 0.0) {
            map.insert("project_budget_max".to_string(), json!(max));
        }
    }

    // Employee floor as a quality filter
    map.insert(
        "employee_count".to_string(),
        json!({ "values": ["10+"], "operator": "include" }),
    );

    Value::Object(map)
}
