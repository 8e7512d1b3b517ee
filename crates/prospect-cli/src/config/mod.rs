//! Configuration loading for Prospect.
//! Reads prospect.toml from the current directory or path in PROSPECT_CONFIG env var.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use prospect_common::{ProspectError, Result};
use prospect_ranker::weights::RuleWeights;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Locations of the two source files. Defaults match the expected
/// `Data/` layout next to the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_contacts_path")]
    pub contacts: PathBuf,
    #[serde(default = "default_publications_path")]
    pub publications: PathBuf,
}

fn default_contacts_path() -> PathBuf {
    PathBuf::from("Data/linkedin.csv")
}
fn default_publications_path() -> PathBuf {
    PathBuf::from("Data/pubmed_data.csv")
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            contacts: default_contacts_path(),
            publications: default_publications_path(),
        }
    }
}

/// Optional overrides for the rule weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_role_fit")]
    pub role_fit: u8,
    #[serde(default = "default_company_intent")]
    pub company_intent: u8,
    #[serde(default = "default_location_hub")]
    pub location_hub: u8,
    #[serde(default = "default_scientific_relevance")]
    pub scientific_relevance: u8,
}

fn default_role_fit() -> u8 { 30 }
fn default_company_intent() -> u8 { 20 }
fn default_location_hub() -> u8 { 10 }
fn default_scientific_relevance() -> u8 { 40 }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            role_fit:             default_role_fit(),
            company_intent:       default_company_intent(),
            location_hub:         default_location_hub(),
            scientific_relevance: default_scientific_relevance(),
        }
    }
}

impl ScoringConfig {
    pub fn weights(&self) -> RuleWeights {
        RuleWeights {
            role_fit: self.role_fit,
            company_intent: self.company_intent,
            location_hub: self.location_hub,
            scientific_relevance: self.scientific_relevance,
        }
    }
}


impl Config {
    /// Load configuration from prospect.toml.
    /// Checks PROSPECT_CONFIG env var first, then the current directory.
    /// A missing file falls back to defaults; a malformed one is fatal.
    pub fn load() -> Result<Self> {
        let path = std::env::var("PROSPECT_CONFIG").unwrap_or_else(|_| "prospect.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|err| ProspectError::Config(format!("{}: {err}", path.display())))
    }
}
