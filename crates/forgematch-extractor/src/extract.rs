//! Extraction of structured requirements from free text

use crate::patterns;
use crate::states;
use forgematch_domain::{
    Delivery, Location, Material, Quantity, QuantityUnit, RequestContext, Requirement,
    RequirementField, Tolerance, ToleranceUnit,
};

/// Extract structured requirements from a sourcing request
///
/// Never fails; fields the text and context do not yield are recorded in
/// the returned requirement's `missing` list. Context wins over text for
/// location; text wins over context for delivery; budget comes from
/// context only.
pub fn extract(text: &str, context: Option<&RequestContext>) -> Requirement {
    let mut missing = Vec::new();

    let location = extract_location(text, context);
    if location.is_none() {
        missing.push(RequirementField::Location);
    }

    let material = extract_material(text);
    if material.is_none() {
        missing.push(RequirementField::Material);
    }

    let tolerance = extract_tolerance(text);
    if tolerance.is_none() {
        missing.push(RequirementField::Tolerance);
    }

    let quantity = extract_quantity(text);
    if quantity.is_none() {
        missing.push(RequirementField::Quantity);
    }

    let delivery = extract_delivery(text, context);
    if delivery.is_none() {
        missing.push(RequirementField::Delivery);
    }

    let capabilities = patterns::CAPABILITIES
        .iter()
        .filter(|(pattern, _)| pattern.is_match(text))
        .map(|(_, label)| (*label).to_string())
        .collect();

    let certifications = patterns::CERTIFICATIONS
        .iter()
        .filter(|(pattern, _)| pattern.is_match(text))
        .map(|(_, label)| (*label).to_string())
        .collect();

    let budget = context
        .and_then(|ctx| ctx.budget)
        .filter(|budget| budget.is_bounded());

    Requirement {
        material,
        tolerance,
        quantity,
        delivery,
        location,
        capabilities,
        certifications,
        budget,
        missing,
    }
}

/// Location: context token first, then ZIP in text, then state name or
/// standalone upper-case code in text
fn extract_location(text: &str, context: Option<&RequestContext>) -> Option<Location> {
    if let Some(token) = context.and_then(|ctx| ctx.location.as_deref()) {
        if let Some(location) = classify_location_token(token) {
            return Some(location);
        }
    }

    if let Some(captures) = patterns::ZIP.captures(text) {
        return Some(Location::Zip(captures[1].to_string()));
    }

    if let Some(captures) = states::STATE_NAME.captures(text) {
        let code = states::state_code_for_name(&captures[1])?;
        return Some(Location::State(code.to_string()));
    }

    states::STATE_CODE
        .captures(text)
        .map(|captures| Location::State(captures[1].to_string()))
}

/// Classify an explicit context token: ZIP, two-letter code, or full name
fn classify_location_token(token: &str) -> Option<Location> {
    let token = token.trim();
    if token.len() == 5 && token.bytes().all(|b| b.is_ascii_digit()) {
        return Some(Location::Zip(token.to_string()));
    }
    if token.len() == 2 && token.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Some(Location::State(token.to_uppercase()));
    }
    states::state_code_for_name(token).map(|code| Location::State(code.to_string()))
}

/// Material: first family whose keywords match wins; a grade token is
/// only searched after a family matched. Non-empty text with no family
/// keywords classifies as `Other`.
fn extract_material(text: &str) -> Option<Material> {
    let family = patterns::MATERIAL_FAMILIES
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(family, _)| *family);

    match family {
        Some(family) => {
            let grade = patterns::GRADE
                .captures(text)
                .map(|captures| captures[1].to_string());
            Some(Material { family, grade })
        }
        None if !text.trim().is_empty() => Some(Material {
            family: forgematch_domain::MaterialFamily::Other,
            grade: None,
        }),
        None => None,
    }
}

fn extract_tolerance(text: &str) -> Option<Tolerance> {
    let captures = patterns::TOLERANCE
        .captures(text)
        .or_else(|| patterns::TOLERANCE_WORDED.captures(text))?;
    let value: f64 = captures[1].parse().ok()?;
    let unit = if captures[0].to_lowercase().contains("mm") {
        ToleranceUnit::Millimeter
    } else {
        ToleranceUnit::Inch
    };
    Some(Tolerance { value, unit })
}

fn extract_quantity(text: &str) -> Option<Quantity> {
    let captures = patterns::QUANTITY.captures(text)?;
    let value: f64 = captures[1].replace(',', "").parse().ok()?;
    let unit_token = captures[2].to_lowercase();
    let unit = if unit_token.starts_with("lb") || unit_token.starts_with("pound") {
        QuantityUnit::Pounds
    } else if unit_token.starts_with("kg") || unit_token.starts_with("kilogram") {
        QuantityUnit::Kilograms
    } else {
        // tons, pcs, pieces, units all land in the generic bucket
        QuantityUnit::Units
    };
    Some(Quantity { value, unit })
}

/// Delivery: text phrase first, then context days. Week counts stay as
/// weeks; conversion to days happens at consumption sites.
fn extract_delivery(text: &str, context: Option<&RequestContext>) -> Option<Delivery> {
    if let Some(captures) = patterns::DELIVERY.captures(text) {
        let value: f64 = captures[1].parse().ok()?;
        if captures[2].to_lowercase().starts_with("week") {
            return Some(Delivery::Weeks(value));
        }
        return Some(Delivery::Days(value));
    }

    context
        .and_then(|ctx| ctx.delivery_days)
        .filter(|days| days.is_finite())
        .map(Delivery::Days)
}
