//! U.S. state name -> postal code table

use once_cell::sync::Lazy;
use regex::Regex;

/// State names (lower case) and their two-letter postal codes
pub const STATES: [(&str, &str); 50] = [
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("pennsylvania", "PA"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
];

/// Full state names, word-boundary matched, case-insensitive
pub static STATE_NAME: Lazy<Regex> = Lazy::new(|| {
    let names: Vec<&str> = STATES.iter().map(|(name, _)| *name).collect();
    Regex::new(&format!(r"(?i)\b({})\b", names.join("|"))).unwrap()
});

/// Standalone two-letter codes, word-boundary matched
///
/// Deliberately case-sensitive: lower-case prose words like "in", "me",
/// or "or" must not resolve to states.
pub static STATE_CODE: Lazy<Regex> = Lazy::new(|| {
    let codes: Vec<&str> = STATES.iter().map(|(_, code)| *code).collect();
    Regex::new(&format!(r"\b({})\b", codes.join("|"))).unwrap()
});

/// Postal code for a full state name, matched case-insensitively
pub fn state_code_for_name(name: &str) -> Option<&'static str> {
    let lowered = name.trim().to_lowercase();
    STATES
        .iter()
        .find(|(state_name, _)| *state_name == lowered)
        .map(|(_, code)| *code)
}
