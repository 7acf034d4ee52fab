//! Error types for the business-data client

use thiserror::Error;

/// Errors from the external business-data source
///
/// Stats failures are carried so call sites can log them, but the
/// orchestrator never aborts on them; match, fetch, and transport
/// failures are fatal and abort the run with no partial data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    /// API credential is not configured
    #[error("business-data API key missing")]
    NoApiKey,

    /// Stats endpoint failure (best effort, never aborts orchestration)
    #[error("stats endpoint error: {message}")]
    Stats {
        /// Upstream error text
        message: String,
        /// HTTP status, when the response carried one
        status: Option<u16>,
        /// Upstream tracing token, for logs only
        correlation_id: Option<String>,
    },

    /// Match endpoint failure (fatal)
    #[error("match endpoint error: {message}")]
    Match {
        /// Upstream error text
        message: String,
        /// HTTP status, when the response carried one
        status: Option<u16>,
        /// Upstream tracing token, for logs only
        correlation_id: Option<String>,
    },

    /// Fetch endpoint failure (fatal)
    #[error("fetch endpoint error: {message}")]
    Fetch {
        /// Upstream error text
        message: String,
        /// HTTP status, when the response carried one
        status: Option<u16>,
        /// Upstream tracing token, for logs only
        correlation_id: Option<String>,
    },

    /// Transport-level failure (fatal)
    #[error("network error: {message}")]
    Network {
        /// Transport error text
        message: String,
    },
}

impl SourceError {
    /// Stable error code for telemetry; never shown to end users
    pub fn code(&self) -> &'static str {
        match self {
            SourceError::NoApiKey => "NO_API_KEY",
            SourceError::Stats { .. } => "STATS_ERROR",
            SourceError::Match { .. } => "MATCH_ERROR",
            SourceError::Fetch { .. } => "FETCH_ERROR",
            SourceError::Network { .. } => "NETWORK_ERROR",
        }
    }

    /// HTTP-ish status for the error envelope
    pub fn status(&self) -> u16 {
        match self {
            SourceError::NoApiKey => 500,
            SourceError::Network { .. } => 500,
            SourceError::Stats { status, .. }
            | SourceError::Match { status, .. }
            | SourceError::Fetch { status, .. } => status.unwrap_or(502),
        }
    }

    /// Upstream correlation identifier, when one was returned
    pub fn correlation_id(&self) -> Option<&str> {
        match self {
            SourceError::Stats { correlation_id, .. }
            | SourceError::Match { correlation_id, .. }
            | SourceError::Fetch { correlation_id, .. } => correlation_id.as_deref(),
            _ => None,
        }
    }
}
