//! Free-text filtering across every column of a lead row.

use prospect_common::MergedLead;

/// True when any stringified column contains `query`, case-insensitively.
/// An empty query matches everything.
pub fn matches_query(lead: &MergedLead, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystack(lead).contains(&needle)
}

/// The row's columns flattened into one lowercase string, score included.
fn haystack(lead: &MergedLead) -> String {
    let year = lead
        .publication_year
        .map(|y| y.to_string())
        .unwrap_or_default();
    let score = lead.probability_score.to_string();
    [
        lead.name_text(),
        lead.title_text(),
        lead.company_text(),
        lead.hq_text(),
        lead.funding_status_text(),
        lead.linkedin_text(),
        lead.name_key.as_str(),
        lead.publication_title_text(),
        year.as_str(),
        score.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

// ── Tests ───────────────────────────────────────────────────────────────────
