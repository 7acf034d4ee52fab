//! Compiled extraction patterns

use forgematch_domain::MaterialFamily;
use once_cell::sync::Lazy;
use regex::Regex;

/// 5-digit ZIP in free text; a ZIP+4 suffix is tolerated, base captured
pub static ZIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{5})(?:-\d{4})?\b").unwrap());

/// Material family keywords, checked in order; steel first since "steel"
/// substrings are the most common
pub static MATERIAL_FAMILIES: Lazy<[(MaterialFamily, Regex); 3]> = Lazy::new(|| {
    [
        (
            MaterialFamily::Steel,
            Regex::new(r"(?i)\b(?:stainless|steel|carbon steel|alloy steel)\b").unwrap(),
        ),
        (
            MaterialFamily::Aluminum,
            Regex::new(r"(?i)\b(?:aluminum|aluminium)\b").unwrap(),
        ),
        (MaterialFamily::Titanium, Regex::new(r"(?i)\btitanium\b").unwrap()),
    ]
});

/// 3-digit grade token in the 100-499 range
///
/// Known imprecision: any word-bounded 3-digit number in range matches,
/// including quantities. The range restriction is the only safeguard.
pub static GRADE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([1-4][0-9]{2})\b").unwrap());

/// Tolerance: optional sign/tilde prefix, decimal, inch or mm unit token
pub static TOLERANCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)[±+\-~]?\s*(\d+(?:\.\d+)?)\s*(?:in(?:ch(?:es)?)?|mm|millimeters?|")"#)
        .unwrap()
});

/// Tolerance, worded "plus/minus N [unit]" form
pub static TOLERANCE_WORDED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(?:plus/minus|\+/-)\s*(\d+(?:\.\d+)?)(?:\s*(?:in|mm|mils?|"))?"#).unwrap()
});

/// Quantity: decimal with separators plus a unit token
pub static QUANTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d[\d,\.]*)\s*(lbs?|pounds?|kg|kilograms?|tons?|units|pcs|pieces?)\b")
        .unwrap()
});

/// Delivery: "in/within N days|weeks"
pub static DELIVERY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:in|within)\s*(\d+(?:\.\d+)?)\s*(days?|weeks?)\b").unwrap());

/// Capability keywords and their canonical labels
pub static CAPABILITIES: Lazy<[(Regex, &str); 4]> = Lazy::new(|| {
    [
        (Regex::new(r"(?i)\bcnc\b").unwrap(), "CNC"),
        (
            Regex::new(r"(?i)\blaser (?:cut|cutting)\b").unwrap(),
            "Laser cutting",
        ),
        (Regex::new(r"(?i)\bwaterjet\b").unwrap(), "Waterjet"),
        (Regex::new(r"(?i)\bwelding\b").unwrap(), "Welding"),
    ]
});

/// Certification keywords and their canonical labels
pub static CERTIFICATIONS: Lazy<[(Regex, &str); 3]> = Lazy::new(|| {
    [
        (Regex::new(r"(?i)iso\s*9001").unwrap(), "ISO 9001"),
        (Regex::new(r"(?i)as\s*9100").unwrap(), "AS9100"),
        (Regex::new(r"(?i)nadcap").unwrap(), "NADCAP"),
    ]
});
