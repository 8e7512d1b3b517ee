//! CSV roster loading with malformed-row tolerance.
//!
//! Mirrors the behaviour of a bulk-download cache load: the whole file is
//! read into memory up front, rows with the wrong shape are dropped, and the
//! drop count is the only trace they leave.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use prospect_common::{ContactRecord, ProspectError, PublicationRecord, Result};

/// Result of loading one tabular source.
#[derive(Debug, Clone)]
pub struct LoadOutcome<T> {
    /// Rows that parsed, in file order.
    pub records: Vec<T>,
    /// Rows dropped because they did not match the tabular format.
    pub skipped: usize,
}

/// Load the contact/company roster.
pub fn load_contacts(path: &Path) -> Result<LoadOutcome<ContactRecord>> {
    let outcome = load_rows(path)?;
    report(path, "contacts", outcome.records.len(), outcome.skipped);
    Ok(outcome)
}

/// Load the publication roster.
pub fn load_publications(path: &Path) -> Result<LoadOutcome<PublicationRecord>> {
    let outcome = load_rows(path)?;
    report(path, "publications", outcome.records.len(), outcome.skipped);
    Ok(outcome)
}

fn report(path: &Path, source: &str, loaded: usize, skipped: usize) {
    info!(path = %path.display(), source, loaded, "Loaded source file");
    if skipped > 0 {
        warn!(path = %path.display(), source, skipped, "Dropped malformed rows");
    }
}

/// Read every row of a headered CSV file into `T`, dropping rows that fail
/// to parse. Fatal only when the file itself is missing or unreadable.
fn load_rows<T: DeserializeOwned>(path: &Path) -> Result<LoadOutcome<T>> {
    if !path.is_file() {
        return Err(ProspectError::SourceMissing(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.deserialize::<T>() {
        match row {
            Ok(record) => records.push(record),
            Err(err) => {
                skipped += 1;
                debug!(%err, "Dropped row");
            }
        }
    }

    Ok(LoadOutcome { records, skipped })
}

// ── Tests ───────────────────────────────────────────────────────────────────
