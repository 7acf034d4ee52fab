//! Supplier module - normalized business records

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Open mapping from signal name to value
///
/// The upstream schema is not contractually fixed; enrichment attributes
/// may be added or omitted per record. Named accessors over this map live
/// in [`crate::signals`].
pub type SignalMap = serde_json::Map<String, Value>;

/// Placeholder when no company name can be resolved from a raw record
pub const PLACEHOLDER_COMPANY_NAME: &str = "Untitled Supplier";

/// Placeholder when no headquarters location can be resolved
pub const PLACEHOLDER_HQ_LOCATION: &str = "United States";

/// A business record normalized from the external data source
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Supplier {
    /// Opaque upstream identifier, when the source returned one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_id: Option<String>,
    /// Company name, never empty (placeholder-backed)
    pub company_name: String,
    /// Headquarters location, never empty (placeholder-backed)
    pub hq_location: String,
    /// Website or domain, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Enrichment signal bag
    #[serde(default)]
    pub signals: SignalMap,
}

impl Supplier {
    /// Create a supplier with an empty signal bag
    pub fn new(company_name: impl Into<String>, hq_location: impl Into<String>) -> Self {
        Self {
            business_id: None,
            company_name: company_name.into(),
            hq_location: hq_location.into(),
            website: None,
            signals: SignalMap::new(),
        }
    }
}
