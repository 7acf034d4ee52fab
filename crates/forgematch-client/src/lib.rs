//! Forgematch Client
//!
//! Rate-limited orchestration against the external business-data source.
//!
//! # Architecture
//!
//! ```text
//! Requirement ─► filters ─► stats (best effort)
//!                        ─► match (fatal)  ─► top 5 by confidence
//!                        ─► fetch (fatal)  ─► normalize ─► Vec<Supplier>
//! ```
//!
//! All outbound calls funnel through one [`RateLimiter`] instance so the
//! aggregate call volume stays inside the upstream quota no matter how
//! many stages or concurrent pipeline runs are in flight.
//!
//! # Seams
//!
//! - [`BusinessApi`]: the three raw endpoints (stats, match, fetch),
//!   implemented over HTTP by [`HttpBusinessApi`] and by scripted fakes
//!   in tests
//! - [`SupplierSource`]: the high-level "give me normalized suppliers
//!   for this requirement" seam the pipeline consumes, implemented by
//!   [`Orchestrator`] and by the deterministic [`MockSource`]

#![warn(missing_docs)]

mod api;
mod error;
mod filters;
mod limiter;
mod mock;
mod normalize;
mod orchestrator;

pub use api::{
    BusinessApi, BusinessMatch, FetchPage, HttpBusinessApi, MatchPage, StatsSummary,
    DEFAULT_BASE_URL, REQUESTED_SIGNALS,
};
pub use error::SourceError;
pub use filters::{build_filters, NAICS_METAL_MANUFACTURING};
pub use limiter::{RateLimiter, DEFAULT_CALLS_PER_MINUTE};
pub use mock::MockSource;
pub use normalize::normalize_record;
pub use orchestrator::{Orchestrator, SourceResult, StatsOutcome, SupplierSource, TOP_MATCH_COUNT};
