//! End-to-end pipeline run

use crate::error::PipelineError;
use crate::response::{Clarification, MatchOutcome, MatchReport, SupplierSummary};
use forgematch_client::SupplierSource;
use forgematch_domain::{RequestContext, Requirement, RequirementField};
use forgematch_extractor::extract;
use forgematch_scoring::rank;
use tracing::debug;

/// Run the full pipeline for one sourcing request
///
/// Stateless apart from the throttle inside `source`; see the crate docs
/// for the outcome shapes.
pub async fn run_pipeline<S>(
    source: &S,
    query: &str,
    context: Option<&RequestContext>,
) -> Result<MatchOutcome, PipelineError>
where
    S: SupplierSource + ?Sized,
{
    if query.trim().is_empty() {
        return Err(PipelineError::BadRequest);
    }

    let requirement = extract(query, context);
    debug!(?requirement, "extracted requirements");

    if requirement.is_missing(RequirementField::Location) {
        return Ok(MatchOutcome::Clarify(Clarification {
            fields: vec![RequirementField::Location],
            message: "Provide a state or ZIP code to search.".to_string(),
        }));
    }

    let result = source.fetch_suppliers(&requirement, query).await?;
    debug!(
        suppliers = result.suppliers.len(),
        correlation_id = result.correlation_id.as_deref(),
        "upstream result"
    );

    let ranked = rank(&requirement, &result.suppliers);
    let suppliers: Vec<SupplierSummary> = ranked.iter().map(SupplierSummary::from).collect();

    let (message, cta) = if suppliers.is_empty() {
        (
            "No suppliers matched the filters. Try loosening the requirements.".to_string(),
            None,
        )
    } else {
        (
            format!("Found {} qualified U.S. manufacturers.", suppliers.len()),
            Some("Would you like us to connect you?".to_string()),
        )
    };

    Ok(MatchOutcome::Report(MatchReport {
        message,
        suppliers,
        cta,
        context: echo_context(&requirement),
    }))
}

/// Resolved context echoed back for the caller to persist across turns
fn echo_context(requirement: &Requirement) -> Option<RequestContext> {
    let location = requirement
        .location
        .as_ref()
        .map(|l| l.token().to_string());
    let delivery_days = requirement.target_lead_days().filter(|days| *days > 0.0);
    let budget = requirement.budget.filter(|b| b.is_bounded());

    if location.is_none() && delivery_days.is_none() && budget.is_none() {
        return None;
    }
    Some(RequestContext {
        location,
        delivery_days,
        budget,
    })
}
