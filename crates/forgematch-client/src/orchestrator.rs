//! Three-stage orchestration against the business-data source

use crate::api::{BusinessApi, BusinessMatch};
use crate::error::SourceError;
use crate::filters::build_filters;
use crate::normalize::normalize_record;
use async_trait::async_trait;
use forgematch_domain::{Requirement, Supplier};
use tracing::{debug, warn};

/// How many match candidates proceed to the fetch stage
pub const TOP_MATCH_COUNT: usize = 5;

/// Result of a successful orchestration run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceResult {
    /// Normalized suppliers; may be empty when nothing matched
    pub suppliers: Vec<Supplier>,
    /// Upstream tracing token from the final completed stage
    pub correlation_id: Option<String>,
}

/// High-level supplier retrieval seam consumed by the pipeline
#[async_trait]
pub trait SupplierSource: Send + Sync {
    /// Retrieve normalized supplier records for a requirement
    ///
    /// An empty supplier list is a successful result; errors carry the
    /// stage taxonomy from [`SourceError`] and imply no partial data.
    async fn fetch_suppliers(
        &self,
        requirement: &Requirement,
        query: &str,
    ) -> Result<SourceResult, SourceError>;
}

/// Outcome of the best-effort stats stage
#[derive(Debug, Clone, PartialEq)]
pub enum StatsOutcome {
    /// Stats endpoint answered with a candidate population estimate
    Assessed {
        /// Estimated candidate count for the filter set
        total_count: u64,
    },
    /// Stats stage failed; orchestration proceeds regardless
    Skipped {
        /// Why the stage was skipped, for logs
        reason: String,
    },
}

/// Drives the stats -> match -> fetch protocol over a [`BusinessApi`]
pub struct Orchestrator<A: BusinessApi> {
    api: A,
}

impl<A: BusinessApi> Orchestrator<A> {
    /// Wrap an endpoint implementation
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Stage 1: market assessment, never fatal
    async fn assess_market(&self, filters: &serde_json::Value) -> StatsOutcome {
        match self.api.stats(filters).await {
            Ok(summary) => StatsOutcome::Assessed {
                total_count: summary.total_count,
            },
            Err(e) => StatsOutcome::Skipped {
                reason: e.to_string(),
            },
        }
    }

    /// Top candidates by descending confidence
    fn top_matches(mut matches: Vec<BusinessMatch>) -> Vec<String> {
        matches.sort_by(|a, b| {
            b.confidence_score
                .unwrap_or(0.0)
                .total_cmp(&a.confidence_score.unwrap_or(0.0))
        });
        matches
            .into_iter()
            .take(TOP_MATCH_COUNT)
            .map(|m| m.business_id)
            .collect()
    }
}

#[async_trait]
impl<A: BusinessApi> SupplierSource for Orchestrator<A> {
    async fn fetch_suppliers(
        &self,
        requirement: &Requirement,
        query: &str,
    ) -> Result<SourceResult, SourceError> {
        let filters = build_filters(requirement);
        debug!(filters = %filters, "starting supplier workflow");

        // Stage 1: best effort
        match self.assess_market(&filters).await {
            StatsOutcome::Assessed { total_count } => {
                debug!(total_count, "market size assessed");
            }
            StatsOutcome::Skipped { reason } => {
                warn!("stats check failed, continuing: {}", reason);
            }
        }

        // Stage 2: fatal on failure
        let page = self.api.match_businesses(query, &filters).await?;
        debug!(
            matched = page.matches.len(),
            correlation_id = page.correlation_id.as_deref(),
            "match stage complete"
        );
        if page.matches.is_empty() {
            return Ok(SourceResult {
                suppliers: Vec::new(),
                correlation_id: page.correlation_id,
            });
        }

        let business_ids = Self::top_matches(page.matches);

        // Stage 3: fatal on failure
        let fetched = self.api.fetch_businesses(&business_ids, &filters).await?;
        let suppliers: Vec<Supplier> = fetched.records.iter().map(normalize_record).collect();
        debug!(fetched = suppliers.len(), "fetch stage complete");

        Ok(SourceResult {
            suppliers,
            correlation_id: fetched.correlation_id,
        })
    }
}
