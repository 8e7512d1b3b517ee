//! Prospect — lead ranking for 3D in-vitro model prospects.
//! Entry point for the `prospect` binary.

mod config;
mod export;
mod filter;
mod table;

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use prospect_common::ProspectError;
use prospect_ranker::pipeline::{rank, SourcePaths};

#[derive(Debug, Parser)]
#[command(name = "prospect", version, about = "Rank contact leads by propensity to buy")]
struct Cli {
    /// Contact roster CSV (overrides prospect.toml)
    #[arg(long)]
    contacts: Option<PathBuf>,

    /// Publication roster CSV (overrides prospect.toml)
    #[arg(long)]
    publications: Option<PathBuf>,

    /// Keep only rows whose columns contain this text (case-insensitive)
    #[arg(long)]
    search: Option<String>,

    /// Write the ranked (and filtered) table to this CSV file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Show at most this many rows (display only; export is unaffected)
    #[arg(long)]
    limit: Option<usize>,

    /// Config file path (defaults to prospect.toml, or PROSPECT_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => config::Config::load_from(path)?,
        None => config::Config::load()?,
    };

    let weights = config.scoring.weights();
    if !weights.validate() {
        warn!("Scoring weights do not sum to 100; scores are still capped at 100");
    }

    let sources = SourcePaths {
        contacts: cli.contacts.unwrap_or(config.sources.contacts),
        publications: cli.publications.unwrap_or(config.sources.publications),
    };

    let outcome = match rank(&sources, &weights) {
        Ok(outcome) => outcome,
        Err(err @ ProspectError::SourceMissing(_)) => {
            anyhow::bail!(
                "Data files missing. Ensure the contact and publication CSVs are in place ({err})"
            );
        }
        Err(err) => return Err(err.into()),
    };
    info!(
        contacts = outcome.contacts_loaded,
        contacts_skipped = outcome.contacts_skipped,
        publications = outcome.publications_loaded,
        publications_skipped = outcome.publications_skipped,
        duration_ms = outcome.duration_ms,
        "Pipeline finished"
    );

    let mut leads = outcome.leads;
    if let Some(query) = cli.search.as_deref() {
        leads.retain(|lead| filter::matches_query(lead, query));
    }

    println!("Found {} qualified leads", leads.len());
    println!();
    table::render(&leads, cli.limit);

    if let Some(path) = cli.export.as_deref() {
        export::write_csv(path, &leads)?;
        info!(path = %path.display(), rows = leads.len(), "Exported ranked leads");
    }

    Ok(())
}
