//! Forgematch Pipeline
//!
//! Composes the supplier-matching pipeline end to end:
//!
//! ```text
//! text + context ─► Extractor ─► Orchestrator ─► Scoring ─► MatchOutcome
//! ```
//!
//! The pipeline is a stateless function of `(query, context)`; the only
//! shared resource is the rate limiter inside whatever
//! [`SupplierSource`](forgematch_client::SupplierSource) implementation
//! is passed in. A missing location is not an error; it surfaces as a
//! clarification outcome so the caller can ask a follow-up question.
//!
//! # Example
//!
//! ```
//! use forgematch_client::MockSource;
//! use forgematch_pipeline::{run_pipeline, MatchOutcome};
//!
//! # async fn example() -> Result<(), forgematch_pipeline::PipelineError> {
//! let source = MockSource::new();
//! let outcome = run_pipeline(&source, "5000 lbs of 304 stainless, CNC, in Texas", None).await?;
//! match outcome {
//!     MatchOutcome::Report(report) => println!("{}", report.message),
//!     MatchOutcome::Clarify(clarify) => println!("need: {:?}", clarify.fields),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod pipeline;
mod response;

pub use error::PipelineError;
pub use pipeline::run_pipeline;
pub use response::{Clarification, MatchOutcome, MatchReport, SupplierSummary};
