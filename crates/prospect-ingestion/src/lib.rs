//! prospect-ingestion — Tabular source loading.
//!
//! Reads the two CSV rosters into typed records:
//! - contact roster: Name, Title, Company, HQ, Funding Status, LinkedIn_URL
//! - publication roster: Name, Publication_Title, Publication_Year
//!
//! Rows that do not parse are dropped, not fatal; only a missing or
//! unreadable file aborts the load.

pub mod loader;

pub use loader::{load_contacts, load_publications, LoadOutcome};
