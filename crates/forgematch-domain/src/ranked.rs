//! Ranked supplier module - scoring output

use crate::supplier::Supplier;
use serde::{Deserialize, Serialize};

/// Coarse tier summarizing a match score for quick scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTemperature {
    /// Score >= 85
    Hot,
    /// Score >= 65
    Warm,
    /// Everything else
    Cold,
}

impl MatchTemperature {
    /// Tier for a clamped 0-100 score
    pub fn from_score(score: u8) -> Self {
        if score >= 85 {
            MatchTemperature::Hot
        } else if score >= 65 {
            MatchTemperature::Warm
        } else {
            MatchTemperature::Cold
        }
    }

    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTemperature::Hot => "hot",
            MatchTemperature::Warm => "warm",
            MatchTemperature::Cold => "cold",
        }
    }
}

/// A supplier with its explainable match score
///
/// `reasons` is append-only during scoring and never reordered, so the
/// order of reason strings mirrors the order scoring rules fired in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSupplier {
    /// The normalized supplier record
    #[serde(flatten)]
    pub supplier: Supplier,
    /// Match score, clamped to 0..=100
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    /// Temperature tier derived from the score
    #[serde(rename = "matchTemp")]
    pub temperature: MatchTemperature,
    /// Human-readable justifications, in rule-firing order
    pub reasons: Vec<String>,
    /// Resolved lead time, when derivable from the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_time_days: Option<f64>,
    /// Resolved recycled-content percent, when positive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recycled_content_percent: Option<u32>,
    /// Union of record certifications and flags detected during scoring
    pub certifications: Vec<String>,
}
