//! Deterministic mock supplier source
//!
//! Stands in for the live business-data API in tests and offline runs.
//! Returns canned suppliers filtered the way the live workflow would:
//! lead times close to the delivery target, state-local suppliers first.

use crate::error::SourceError;
use crate::orchestrator::{SourceResult, SupplierSource};
use async_trait::async_trait;
use forgematch_domain::{signals, Requirement, Supplier};
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Canned supplier source for testing and offline mode
///
/// # Examples
///
/// ```
/// use forgematch_client::{MockSource, SupplierSource};
/// use forgematch_domain::Requirement;
///
/// # async fn example() {
/// let source = MockSource::new();
/// let result = source.fetch_suppliers(&Requirement::default(), "steel").await.unwrap();
/// assert!(!result.suppliers.is_empty());
/// # }
/// ```
pub struct MockSource {
    suppliers: Vec<Supplier>,
    error: Option<SourceError>,
    call_count: AtomicU64,
}

impl MockSource {
    /// Source backed by the standard canned catalog
    pub fn new() -> Self {
        Self::with_suppliers(canned_suppliers())
    }

    /// Source backed by specific supplier records
    pub fn with_suppliers(suppliers: Vec<Supplier>) -> Self {
        Self {
            suppliers,
            error: None,
            call_count: AtomicU64::new(0),
        }
    }

    /// Source that fails every call with the given error
    pub fn failing(error: SourceError) -> Self {
        Self {
            suppliers: Vec::new(),
            error: Some(error),
            call_count: AtomicU64::new(0),
        }
    }

    /// How many times `fetch_suppliers` was called
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SupplierSource for MockSource {
    async fn fetch_suppliers(
        &self,
        requirement: &Requirement,
        query: &str,
    ) -> Result<SourceResult, SourceError> {
        let sequence = self.call_count.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(query, "mock source serving canned suppliers");

        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        let mut selected: Vec<Supplier> = self.suppliers.clone();

        // Keep suppliers within target + 7 days when a target exists
        if let Some(target_days) = requirement.target_lead_days().filter(|d| *d > 0.0) {
            selected.retain(|s| {
                signals::lead_time_days(&s.signals)
                    .map_or(true, |lead| lead <= target_days + 7.0)
            });
        }

        // State-local suppliers first; stable within each group
        if let Some(state) = requirement.location.as_ref().and_then(|l| l.state()) {
            selected.sort_by_key(|s| !s.hq_location.contains(state));
        }

        Ok(SourceResult {
            suppliers: selected,
            correlation_id: Some(format!("mock-{:04}", sequence)),
        })
    }
}

/// The canned catalog: five U.S. metal manufacturers with varied signals
fn canned_suppliers() -> Vec<Supplier> {
    let raw = [
        json!({
            "business_id": "mock-001",
            "company_name": "Precision Metals Inc",
            "hq_location": "Houston, TX",
            "website": "https://precisionmetals.example.com",
            "signals": {
                "company_name": "Precision Metals Inc",
                "iso_9001_certified": true,
                "as9100_certified": true,
                "lead_time_days": 10,
                "has_cnc_capability": true,
                "employee_count": 150,
                "recycled_content_percent": 75,
                "sustainability_score": 8.5,
            }
        }),
        json!({
            "business_id": "mock-002",
            "company_name": "Advanced Manufacturing Solutions",
            "hq_location": "Detroit, MI",
            "website": "https://ams-mfg.example.com",
            "signals": {
                "company_name": "Advanced Manufacturing Solutions",
                "iso_9001_certified": true,
                "as9100_certified": false,
                "lead_time_days": 14,
                "has_cnc_capability": true,
                "employee_count": 85,
                "recycled_content_percent": 60,
                "sustainability_score": 7.2,
            }
        }),
        json!({
            "business_id": "mock-003",
            "company_name": "Midwest Steel Fabricators",
            "hq_location": "Chicago, IL",
            "website": "https://midweststeel.example.com",
            "signals": {
                "company_name": "Midwest Steel Fabricators",
                "iso_9001_certified": true,
                "as9100_certified": false,
                "nadcap_certified": false,
                "lead_time_days": 18,
                "has_cnc_capability": true,
                "employee_count": 220,
                "recycled_content_percent": 45,
                "sustainability_score": 6.8,
            }
        }),
        json!({
            "business_id": "mock-004",
            "company_name": "Titan Aerospace Components",
            "hq_location": "Seattle, WA",
            "website": "https://titanaero.example.com",
            "signals": {
                "company_name": "Titan Aerospace Components",
                "iso_9001_certified": true,
                "as9100_certified": true,
                "nadcap_certified": true,
                "lead_time_days": 12,
                "has_cnc_capability": true,
                "employee_count": 95,
                "recycled_content_percent": 0,
                "sustainability_score": 5.5,
            }
        }),
        json!({
            "business_id": "mock-005",
            "company_name": "Superior Metal Works",
            "hq_location": "Dallas, TX",
            "website": "https://superiormetalworks.example.com",
            "signals": {
                "company_name": "Superior Metal Works",
                "iso_9001_certified": true,
                "as9100_certified": false,
                "lead_time_days": 21,
                "has_cnc_capability": true,
                "employee_count": 65,
                "recycled_content_percent": 30,
                "sustainability_score": 6.0,
            }
        }),
    ];
    raw.iter().map(crate::normalize::normalize_record).collect()
}
