//! Forgematch Domain Layer
//!
//! Core data model for the supplier-matching pipeline. This crate defines
//! the records that flow between the extractor, the data orchestrator, and
//! the scoring engine, and nothing else: no I/O, no business process.
//!
//! ## Key Concepts
//!
//! - **Requirement**: structured sourcing requirements extracted from free
//!   text, with an explicit list of fields that could not be derived
//! - **Supplier**: a normalized business record from the external data
//!   source, carrying an open signal bag for enrichment attributes
//! - **RankedSupplier**: a supplier plus a 0-100 match score, a coarse
//!   temperature tier, and human-readable reasons
//!
//! ## Architecture
//!
//! Records are created fresh per pipeline invocation and discarded after
//! the response is produced. Upstream attribute schemas are not fixed, so
//! supplier signals are modeled as an open `string -> value` mapping with
//! named accessor functions (see [`signals`]) rather than a closed struct.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ranked;
pub mod requirement;
pub mod signals;
pub mod supplier;

// Re-exports for convenience
pub use ranked::{MatchTemperature, RankedSupplier};
pub use requirement::{
    Budget, Delivery, Location, Material, MaterialFamily, Quantity, QuantityUnit, RequestContext,
    Requirement, RequirementField, Tolerance, ToleranceUnit,
};
pub use supplier::{SignalMap, Supplier};
