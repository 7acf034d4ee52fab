//! Forgematch Extractor
//!
//! Converts a free-text sourcing request (plus optional prior-turn
//! context) into a structured [`Requirement`](forgematch_domain::Requirement).
//!
//! # Overview
//!
//! Extraction is a pure function and never fails: a field the text does
//! not mention is represented as absent and recorded in the requirement's
//! `missing` list, not raised as an error. Identical `(text, context)`
//! inputs always produce identical output.
//!
//! # Extraction order
//!
//! Location, material, tolerance, quantity, delivery, capabilities,
//! certifications, budget. Each step is independent of the others, and
//! `missing` entries appear in that same order.
//!
//! # Example
//!
//! ```
//! use forgematch_extractor::extract;
//! use forgematch_domain::{MaterialFamily, RequirementField};
//!
//! let req = extract("5000 lbs of 304 stainless steel, CNC machined, in Texas", None);
//! assert_eq!(req.material.as_ref().unwrap().family, MaterialFamily::Steel);
//! assert_eq!(req.material.as_ref().unwrap().grade.as_deref(), Some("304"));
//! assert!(!req.is_missing(RequirementField::Location));
//! ```

#![warn(missing_docs)]

mod extract;
mod patterns;
mod states;


pub use extract::extract;
pub use states::state_code_for_name;
