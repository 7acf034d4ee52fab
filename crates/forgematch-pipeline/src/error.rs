//! Error envelope for the pipeline

use forgematch_client::SourceError;
use thiserror::Error;

/// Errors a pipeline run can surface
///
/// The extractor and scoring engine never fail; everything here is
/// either caller input validation or an upstream data-source failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// The query string was empty or whitespace
    #[error("query required")]
    BadRequest,

    /// A fatal upstream failure from the data source
    #[error(transparent)]
    Upstream(#[from] SourceError),
}

impl PipelineError {
    /// Stable error code for logs and telemetry
    pub fn code(&self) -> &'static str {
        match self {
            PipelineError::BadRequest => "BAD_REQUEST",
            PipelineError::Upstream(e) => e.code(),
        }
    }

    /// HTTP-ish status for the error envelope
    pub fn status(&self) -> u16 {
        match self {
            PipelineError::BadRequest => 400,
            PipelineError::Upstream(e) => e.status(),
        }
    }

    /// Message safe to show an end user; never leaks internal codes
    pub fn user_message(&self) -> &'static str {
        match self {
            PipelineError::BadRequest => "Please describe what you need to source.",
            PipelineError::Upstream(_) => {
                "We couldn't reach the supplier data service. Please try again in a moment."
            }
        }
    }
}
