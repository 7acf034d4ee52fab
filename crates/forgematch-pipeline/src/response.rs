//! Response contract produced by the pipeline

use forgematch_domain::{MatchTemperature, RankedSupplier, RequestContext, RequirementField};
use serde::{Deserialize, Serialize};

/// Outcome of a pipeline run: either ranked results or a follow-up ask
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MatchOutcome {
    /// A required field is missing; ask the caller before searching
    Clarify(Clarification),
    /// Ranked shortlist with a summary message
    Report(MatchReport),
}

/// Clarification request: which fields are needed and how to ask
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clarification {
    /// Fields required before a search can run
    pub fields: Vec<RequirementField>,
    /// Prompt to relay to the user
    pub message: String,
}

/// Ranked shortlist plus the caller-facing summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    /// Human-readable summary line
    pub message: String,
    /// Ranked suppliers, in scoring order
    pub suppliers: Vec<SupplierSummary>,
    /// Optional call-to-action line, present when suppliers were found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
    /// Resolved context for the caller to persist across turns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<RequestContext>,
}

/// The caller-facing projection of a ranked supplier
///
/// Drops internal fields (signal bag, upstream identifier) and keeps
/// what a shortlist view renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierSummary {
    /// Company name
    pub company_name: String,
    /// Headquarters location
    pub hq_location: String,
    /// Match score, 0..=100
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    /// Temperature tier
    #[serde(rename = "matchTemp")]
    pub temperature: MatchTemperature,
    /// Resolved lead time in days, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_time_days: Option<f64>,
    /// Certifications, record-attached plus scoring-detected
    pub certifications: Vec<String>,
    /// Recycled-content percent, when positive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recycled_content_percent: Option<u32>,
    /// Website, when known
    pub website: Option<String>,
    /// Score justifications, in rule-firing order
    pub reasons: Vec<String>,
}

impl From<&RankedSupplier> for SupplierSummary {
    fn from(ranked: &RankedSupplier) -> Self {
        Self {
            company_name: ranked.supplier.company_name.clone(),
            hq_location: ranked.supplier.hq_location.clone(),
            match_score: ranked.match_score,
            temperature: ranked.temperature,
            lead_time_days: ranked.lead_time_days,
            certifications: ranked.certifications.clone(),
            recycled_content_percent: ranked.recycled_content_percent,
            website: ranked.supplier.website.clone(),
            reasons: ranked.reasons.clone(),
        }
    }
}
