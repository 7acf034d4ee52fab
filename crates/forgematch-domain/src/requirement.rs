//! Requirement module - structured sourcing requirements

use serde::{Deserialize, Serialize};

/// Material family recognized by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialFamily {
    /// Steel and steel alloys (stainless, carbon, alloy)
    Steel,
    /// Aluminum / aluminium
    Aluminum,
    /// Titanium
    Titanium,
    /// Any other material mentioned in non-empty text
    Other,
}

impl MaterialFamily {
    /// Get the family name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialFamily::Steel => "steel",
            MaterialFamily::Aluminum => "aluminum",
            MaterialFamily::Titanium => "titanium",
            MaterialFamily::Other => "other",
        }
    }
}

/// A material requirement: family plus an optional grade token (e.g. "304")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Material family
    pub family: MaterialFamily,
    /// Optional 3-digit grade token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

/// Tolerance unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToleranceUnit {
    /// Inches
    #[serde(rename = "in")]
    Inch,
    /// Millimeters
    #[serde(rename = "mm")]
    Millimeter,
}

/// A tolerance requirement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Numeric tolerance value
    pub value: f64,
    /// Unit the value was expressed in
    pub unit: ToleranceUnit,
}

/// Quantity unit bucket
///
/// Tons and piece counts collapse into [`QuantityUnit::Units`]; the
/// upstream filter schema has no distinct mass unit for tons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityUnit {
    /// Pounds
    #[serde(rename = "lbs")]
    Pounds,
    /// Kilograms
    #[serde(rename = "kg")]
    Kilograms,
    /// Generic unit count (also tons, pieces, pcs)
    #[serde(rename = "units")]
    Units,
}

/// A quantity requirement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Numeric quantity (thousands separators stripped)
    pub value: f64,
    /// Unit bucket
    pub unit: QuantityUnit,
}

/// A delivery requirement: day-count or week-count, never both
///
/// Week counts are not converted to days at extraction time;
/// [`Delivery::target_days`] is the single conversion site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delivery {
    /// Delivery within N days
    Days(f64),
    /// Delivery within N weeks
    Weeks(f64),
}

impl Delivery {
    /// Resolve the target lead time in days (weeks convert at x7)
    pub fn target_days(&self) -> f64 {
        match self {
            Delivery::Days(d) => *d,
            Delivery::Weeks(w) => w * 7.0,
        }
    }
}

/// A location requirement: two-letter state code or 5-digit ZIP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Two-letter state code, upper case
    State(String),
    /// 5-digit ZIP code
    Zip(String),
}

impl Location {
    /// The raw token, whichever form it takes
    pub fn token(&self) -> &str {
        match self {
            Location::State(s) => s,
            Location::Zip(z) => z,
        }
    }

    /// The state code, if this is a state location
    pub fn state(&self) -> Option<&str> {
        match self {
            Location::State(s) => Some(s),
            Location::Zip(_) => None,
        }
    }

    /// The ZIP code, if this is a ZIP location
    pub fn zip(&self) -> Option<&str> {
        match self {
            Location::State(_) => None,
            Location::Zip(z) => Some(z),
        }
    }
}

/// A budget range in currency units; at least one bound is present
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Budget {
    /// Lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Budget {
    /// True if at least one finite bound is present
    pub fn is_bounded(&self) -> bool {
        self.min.map_or(false, f64::is_finite) || self.max.map_or(false, f64::is_finite)
    }
}

/// Fields the extractor may report as missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementField {
    /// State or ZIP
    Location,
    /// Material family
    Material,
    /// Delivery window
    Delivery,
    /// Quantity
    Quantity,
    /// Tolerance
    Tolerance,
}

impl RequirementField {
    /// Get the field name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementField::Location => "location",
            RequirementField::Material => "material",
            RequirementField::Delivery => "delivery",
            RequirementField::Quantity => "quantity",
            RequirementField::Tolerance => "tolerance",
        }
    }
}

/// Structured requirements extracted from a sourcing request
///
/// Invariant: a field appears in `missing` iff its structured value is
/// `None` (for `material`, only empty input text produces `None`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Requirement {
    /// Material family and optional grade
    pub material: Option<Material>,
    /// Tolerance value and unit
    pub tolerance: Option<Tolerance>,
    /// Quantity value and unit bucket
    pub quantity: Option<Quantity>,
    /// Delivery window
    pub delivery: Option<Delivery>,
    /// State or ZIP
    pub location: Option<Location>,
    /// Recognized process capabilities (e.g. "CNC")
    pub capabilities: Vec<String>,
    /// Recognized certification tokens (e.g. "ISO 9001")
    pub certifications: Vec<String>,
    /// Budget range from prior-turn context
    pub budget: Option<Budget>,
    /// Fields that could not be derived, in extraction order
    pub missing: Vec<RequirementField>,
}

impl Requirement {
    /// True if the given field could not be derived
    pub fn is_missing(&self, field: RequirementField) -> bool {
        self.missing.contains(&field)
    }

    /// Target lead time in days, if a delivery window was derived
    pub fn target_lead_days(&self) -> Option<f64> {
        self.delivery.map(|d| d.target_days())
    }
}

/// Structured context carried across conversation turns
///
/// All fields optional; the extractor prefers context over text for
/// location and falls back to `delivery_days` when the text has no
/// delivery phrase. Budget is only ever taken from context.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequestContext {
    /// Location token: ZIP, state code, or full state name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Delivery window in days
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "deliveryDays")]
    pub delivery_days: Option<f64>,
    /// Budget range in USD
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "budgetUSD")]
    pub budget: Option<Budget>,
}
