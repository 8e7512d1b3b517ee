//! Ranking pipeline: load both rosters, merge, score, sort.

use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use prospect_common::{MergedLead, Result};
use prospect_ingestion::{load_contacts, load_publications};

use crate::merge::merge_rosters;
use crate::scorer::score_lead;
use crate::weights::RuleWeights;

/// Locations of the two tabular sources.
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub contacts: PathBuf,
    pub publications: PathBuf,
}

/// Ranked leads plus load diagnostics for one pipeline run.
#[derive(Debug, Clone)]
pub struct RankingOutcome {
    /// Merged rows sorted by probability score, descending.
    pub leads: Vec<MergedLead>,
    pub contacts_loaded: usize,
    pub contacts_skipped: usize,
    pub publications_loaded: usize,
    pub publications_skipped: usize,
    pub duration_ms: u128,
}

/// Run the whole pipeline once, in memory, synchronously.
///
/// Fails only when a source file is missing or unreadable; malformed rows
/// were already dropped by the loaders. Ties keep their pre-sort order:
/// the sort is stable, so equal scores stay in merge order (contact file
/// order, publication file order within a contact).
pub fn rank(sources: &SourcePaths, weights: &RuleWeights) -> Result<RankingOutcome> {
    let started = Instant::now();

    let contacts = load_contacts(&sources.contacts)?;
    let publications = load_publications(&sources.publications)?;

    let mut leads = merge_rosters(&contacts.records, &publications.records);
    for lead in &mut leads {
        lead.probability_score = score_lead(lead, weights);
    }
    leads.sort_by(|a, b| b.probability_score.cmp(&a.probability_score));

    let duration_ms = started.elapsed().as_millis();
    info!(
        leads = leads.len(),
        contacts = contacts.records.len(),
        publications = publications.records.len(),
        duration_ms,
        "Ranked merged leads"
    );

    Ok(RankingOutcome {
        leads,
        contacts_loaded: contacts.records.len(),
        contacts_skipped: contacts.skipped,
        publications_loaded: publications.records.len(),
        publications_skipped: publications.skipped,
        duration_ms,
    })
}
