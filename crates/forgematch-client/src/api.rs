//! Raw endpoint seam and its HTTP implementation
//!
//! The external source exposes three logical endpoints: a stats/count
//! endpoint, a free-text match endpoint returning confidence-ranked
//! identifiers, and a fetch/enrichment endpoint returning raw business
//! records with an open attribute bag. Response shapes vary across
//! deployments, so body parsing is deliberately tolerant.

use crate::error::SourceError;
use crate::limiter::RateLimiter;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.businessdata.example.com/v1";

/// Request timeout for upstream calls (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Signals requested from the fetch endpoint
pub const REQUESTED_SIGNALS: [&str; 16] = [
    "company_name",
    "hq_location",
    "website",
    "domain",
    "employee_count",
    "iso_9001_certified",
    "as9100_certified",
    "nadcap_certified",
    "lead_time_days",
    "avg_lead_time_days",
    "recycled_content_percent",
    "sustainability_score",
    "has_cnc_capability",
    "cnc_capability",
    "manufacturing_capabilities",
    "certifications",
];

/// A confidence-ranked candidate from the match endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusinessMatch {
    /// Opaque upstream identifier
    pub business_id: String,
    /// Company name as matched
    #[serde(default)]
    pub company_name: Option<String>,
    /// Match confidence, larger is better
    #[serde(default)]
    pub confidence_score: Option<f64>,
}

/// Stats endpoint result
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    /// Estimated candidate population for the filter set
    pub total_count: u64,
    /// Upstream tracing token
    pub correlation_id: Option<String>,
}

/// Match endpoint result
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPage {
    /// Candidates, in upstream order
    pub matches: Vec<BusinessMatch>,
    /// Upstream tracing token
    pub correlation_id: Option<String>,
}

/// Fetch endpoint result: raw records, not yet normalized
#[derive(Debug, Clone, PartialEq)]
pub struct FetchPage {
    /// Raw business records with open attribute bags
    pub records: Vec<Value>,
    /// Upstream tracing token
    pub correlation_id: Option<String>,
}

/// The three raw endpoints of the external source
#[async_trait]
pub trait BusinessApi: Send + Sync {
    /// Count candidates matching a filter set
    async fn stats(&self, filters: &Value) -> Result<StatsSummary, SourceError>;

    /// Match free text plus filters to candidate identifiers
    async fn match_businesses(&self, query: &str, filters: &Value)
        -> Result<MatchPage, SourceError>;

    /// Fetch enriched records for matched identifiers
    async fn fetch_businesses(
        &self,
        business_ids: &[String],
        filters: &Value,
    ) -> Result<FetchPage, SourceError>;
}

/// Which endpoint a shared helper is serving (drives error tagging)
#[derive(Debug, Clone, Copy)]
enum Stage {
    Stats,
    Match,
    Fetch,
}

impl Stage {
    fn endpoint_error(
        self,
        message: String,
        status: u16,
        correlation_id: Option<String>,
    ) -> SourceError {
        let status = Some(status);
        match self {
            Stage::Stats => SourceError::Stats { message, status, correlation_id },
            Stage::Match => SourceError::Match { message, status, correlation_id },
            Stage::Fetch => SourceError::Fetch { message, status, correlation_id },
        }
    }

    fn path(self) -> &'static str {
        match self {
            Stage::Stats => "businesses/stats",
            Stage::Match => "businesses/match",
            Stage::Fetch => "businesses",
        }
    }
}

/// HTTP implementation of [`BusinessApi`]
///
/// Bearer-authenticated JSON POSTs, every call funneled through the
/// shared [`RateLimiter`].
pub struct HttpBusinessApi {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
    limiter: Arc<RateLimiter>,
}

impl HttpBusinessApi {
    /// Create an API client
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        limiter: Arc<RateLimiter>,
    ) -> Result<Self, SourceError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(SourceError::NoApiKey);
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| SourceError::Network {
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            client,
            limiter,
        })
    }

    /// POST a payload and apply the tolerant response-body conventions
    async fn post(&self, stage: Stage, payload: &Value) -> Result<(Value, Option<String>), SourceError> {
        let url = format!("{}/{}", self.base_url, stage.path());

        let response = self
            .limiter
            .throttle(|| {
                self.client
                    .post(&url)
                    .bearer_auth(&self.api_key)
                    .json(payload)
                    .send()
            })
            .await
            .map_err(|e| {
                error!(stage = ?stage, "request failed: {}", e);
                SourceError::Network {
                    message: format!("request failed: {}", e),
                }
            })?;

        let status = response.status();
        let header_correlation = response
            .headers()
            .get("x-correlation-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body: Value = response.json().await.unwrap_or_else(|_| json!({}));
        let correlation_id = body
            .get("correlation_id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or(header_correlation);

        debug!(
            stage = ?stage,
            status = status.as_u16(),
            correlation_id = correlation_id.as_deref(),
            "upstream response"
        );

        if !status.is_success() {
            let message = body
                .get("detail")
                .or_else(|| body.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("endpoint error")
                .to_string();
            error!(
                stage = ?stage,
                status = status.as_u16(),
                correlation_id = correlation_id.as_deref(),
                "upstream error: {}",
                message
            );
            return Err(stage.endpoint_error(message, status.as_u16(), correlation_id));
        }

        Ok((body, correlation_id))
    }
}

/// First array present along a priority list of keys
fn first_array<'a>(body: &'a Value, keys: &[&str]) -> Option<&'a Vec<Value>> {
    keys.iter().find_map(|key| body.get(*key).and_then(Value::as_array))
}

#[async_trait]
impl BusinessApi for HttpBusinessApi {
    async fn stats(&self, filters: &Value) -> Result<StatsSummary, SourceError> {
        let payload = json!({ "filters": filters });
        let (body, correlation_id) = self.post(Stage::Stats, &payload).await?;
        Ok(StatsSummary {
            total_count: body.get("total_count").and_then(Value::as_u64).unwrap_or(0),
            correlation_id,
        })
    }

    async fn match_businesses(
        &self,
        query: &str,
        filters: &Value,
    ) -> Result<MatchPage, SourceError> {
        let payload = json!({
            "query": query,
            "filters": filters,
            "limit": 10,
        });
        let (body, correlation_id) = self.post(Stage::Match, &payload).await?;

        let raw = first_array(&body, &["matches", "results"])
            .cloned()
            .unwrap_or_default();
        let mut matches = Vec::with_capacity(raw.len());
        for (idx, candidate) in raw.into_iter().enumerate() {
            match serde_json::from_value::<BusinessMatch>(candidate) {
                Ok(parsed) => matches.push(parsed),
                Err(e) => tracing::warn!("skipping malformed match candidate {}: {}", idx, e),
            }
        }
        Ok(MatchPage { matches, correlation_id })
    }

    async fn fetch_businesses(
        &self,
        business_ids: &[String],
        filters: &Value,
    ) -> Result<FetchPage, SourceError> {
        let payload = json!({
            "business_ids": business_ids,
            "filters": filters,
            "signals": REQUESTED_SIGNALS,
            "page": 1,
            "page_size": business_ids.len().min(100),
        });
        let (body, correlation_id) = self.post(Stage::Fetch, &payload).await?;

        let records = first_array(&body, &["businesses", "data", "results"])
            .cloned()
            .unwrap_or_default();
        Ok(FetchPage { records, correlation_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_array_priority() {
        let body = json!({ "results": [1], "businesses": [2, 3] });
        let found = first_array(&body, &["businesses", "data", "results"]).unwrap();
        assert_eq!(found.len(), 2);

        let body = json!({ "data": [1] });
        assert_eq!(first_array(&body, &["businesses", "data"]).unwrap().len(), 1);
        assert!(first_array(&json!({}), &["matches"]).is_none());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let limiter = Arc::new(RateLimiter::unthrottled());
        let api = HttpBusinessApi::new(DEFAULT_BASE_URL, "", limiter);
        assert_eq!(api.err(), Some(SourceError::NoApiKey));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let limiter = Arc::new(RateLimiter::unthrottled());
        let api = HttpBusinessApi::new("https://example.com/v1/", "key", limiter).unwrap();
        assert_eq!(api.base_url, "https://example.com/v1");
    }

    #[test]
    fn test_match_candidate_shape() {
        let parsed: BusinessMatch = serde_json::from_value(json!({
            "business_id": "biz-9",
            "confidence_score": 0.91
        }))
        .unwrap();
        assert_eq!(parsed.business_id, "biz-9");
        assert_eq!(parsed.confidence_score, Some(0.91));
        assert_eq!(parsed.company_name, None);
    }
}
