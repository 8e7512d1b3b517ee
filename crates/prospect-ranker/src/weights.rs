//! Rule weights for the propensity score.

use serde::{Deserialize, Serialize};

/// Weight contributed by each scoring rule when its predicate holds.
/// Defaults sum to exactly 100; the scorer caps the total there regardless.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleWeights {
    /// Title mentions a fit role (toxicology, safety, ...)
    pub role_fit: u8,
    /// Funding status signals budget (series a/b/e, partnered)
    pub company_intent: u8,
    /// HQ sits in a biotech hub
    pub location_hub: u8,
    /// Recent publication on a relevant topic
    pub scientific_relevance: u8,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            role_fit:             30,
            company_intent:       20,
            location_hub:         10,
            scientific_relevance: 40,
        }
    }
}

impl RuleWeights {
    /// Upper bound a score is clamped to, whatever the weights.
    pub const MAX_SCORE: u8 = 100;

    /// Validate that the weights sum to exactly `MAX_SCORE`.
    pub fn validate(&self) -> bool {
        self.total() == u32::from(Self::MAX_SCORE)
    }

    pub(crate) fn total(&self) -> u32 {
        u32::from(self.role_fit)
            + u32::from(self.company_intent)
            + u32::from(self.location_hub)
            + u32::from(self.scientific_relevance)
    }
}
