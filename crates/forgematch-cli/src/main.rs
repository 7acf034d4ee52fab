//! Forgematch CLI - match a sourcing request to ranked U.S. manufacturers.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use forgematch_client::{
    HttpBusinessApi, MockSource, Orchestrator, RateLimiter, SourceError, SupplierSource,
};
use forgematch_domain::{Budget, MatchTemperature, RequestContext};
use forgematch_pipeline::{run_pipeline, MatchOutcome, MatchReport};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Match a free-text sourcing request against manufacturing suppliers
#[derive(Parser, Debug)]
#[command(name = "forgematch", version, about)]
struct Cli {
    /// The sourcing request, e.g. "5000 lbs of 304 stainless, CNC, in Texas"
    query: String,

    /// Location token (ZIP, state code, or state name) from a prior turn
    #[arg(long)]
    location: Option<String>,

    /// Delivery window in days from a prior turn
    #[arg(long)]
    delivery_days: Option<f64>,

    /// Budget lower bound in USD
    #[arg(long)]
    budget_min: Option<f64>,

    /// Budget upper bound in USD
    #[arg(long)]
    budget_max: Option<f64>,

    /// Use the canned offline catalog instead of the live API
    #[arg(long)]
    mock: bool,

    /// Print the raw response as JSON
    #[arg(long)]
    json: bool,

    /// Business-data API base URL
    #[arg(long, env = "FORGEMATCH_API_URL", default_value = forgematch_client::DEFAULT_BASE_URL)]
    api_url: String,

    /// Business-data API key
    #[arg(long, env = "FORGEMATCH_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Upstream quota in calls per minute
    #[arg(long, default_value_t = forgematch_client::DEFAULT_CALLS_PER_MINUTE)]
    calls_per_minute: u32,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let context = build_context(&cli);
    let source = build_source(&cli)?;

    let outcome = match run_pipeline(source.as_ref(), &cli.query, context.as_ref()).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(code = e.code(), status = e.status(), "pipeline failed: {}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        MatchOutcome::Clarify(clarify) => {
            println!("{}", clarify.message.yellow());
        }
        MatchOutcome::Report(report) => print_report(&report),
    }
    Ok(())
}

fn build_context(cli: &Cli) -> Option<RequestContext> {
    let budget = (cli.budget_min.is_some() || cli.budget_max.is_some()).then(|| Budget {
        min: cli.budget_min,
        max: cli.budget_max,
    });
    if cli.location.is_none() && cli.delivery_days.is_none() && budget.is_none() {
        return None;
    }
    Some(RequestContext {
        location: cli.location.clone(),
        delivery_days: cli.delivery_days,
        budget,
    })
}

/// Live orchestrator when an API key is configured, mock catalog otherwise
fn build_source(cli: &Cli) -> Result<Box<dyn SupplierSource>> {
    if cli.mock {
        return Ok(Box::new(MockSource::new()));
    }
    match &cli.api_key {
        Some(key) if !key.is_empty() => {
            let limiter = Arc::new(RateLimiter::new(cli.calls_per_minute));
            let api = HttpBusinessApi::new(cli.api_url.as_str(), key.as_str(), limiter)?;
            Ok(Box::new(Orchestrator::new(api)))
        }
        _ => {
            tracing::warn!(
                code = SourceError::NoApiKey.code(),
                "no API key configured, falling back to the offline catalog"
            );
            Ok(Box::new(MockSource::new()))
        }
    }
}

fn print_report(report: &MatchReport) {
    println!("{}", report.message.bold());
    for supplier in &report.suppliers {
        let temperature = match supplier.temperature {
            MatchTemperature::Hot => supplier.temperature.as_str().red(),
            MatchTemperature::Warm => supplier.temperature.as_str().yellow(),
            MatchTemperature::Cold => supplier.temperature.as_str().blue(),
        };
        println!();
        println!(
            "  {}  {} [{}]",
            supplier.company_name.bold(),
            supplier.match_score,
            temperature
        );
        println!("    {}", supplier.hq_location);
        if let Some(lead) = supplier.lead_time_days {
            println!("    Lead time: {} days", lead);
        }
        if !supplier.certifications.is_empty() {
            println!("    Certifications: {}", supplier.certifications.join(", "));
        }
        if let Some(recycled) = supplier.recycled_content_percent {
            println!("    Recycled content: {}%", recycled);
        }
        if let Some(website) = &supplier.website {
            println!("    {}", website);
        }
        for reason in &supplier.reasons {
            println!("    - {}", reason);
        }
    }
    if let Some(cta) = &report.cta {
        println!();
        println!("{}", cta);
    }
}
