//! Propensity score computation.
//!
//! Four independent additive rules, each contributing its weight when the
//! predicate holds against the row's lowercased field text. Absent fields
//! read as empty text and simply never match.

use serde::Serialize;

use prospect_common::MergedLead;

use crate::weights::RuleWeights;

/// Title keywords indicating a fit role.
pub const ROLE_KEYWORDS: [&str; 5] = ["toxicology", "safety", "hepatic", "3d", "preclinical"];

/// Funding-status phrases indicating available budget.
pub const FUNDING_SIGNALS: [&str; 4] = ["series a", "series b", "series e", "partnered"];

/// HQ substrings for the major biotech hubs.
pub const HUB_LOCATIONS: [&str; 6] =
    ["boston", "cambridge", "bay area", "san francisco", "basel", "london"];

/// Publication-title keywords for scientific relevance.
pub const RELEVANCE_KEYWORDS: [&str; 6] =
    ["liver", "dili", "toxicity", "3d", "organoid", "organ-chip"];

/// Publications older than this cannot trigger the relevance rule.
pub const RECENT_YEAR_FLOOR: i32 = 2023;

/// Which rules fired for one lead. Kept beside the composite score so the
/// shell (and tests) can explain a ranking.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RuleBreakdown {
    pub role_fit: bool,
    pub company_intent: bool,
    pub location_hub: bool,
    pub scientific_relevance: bool,
}

impl RuleBreakdown {
    /// Evaluate all four predicates against one merged lead.
    pub fn evaluate(lead: &MergedLead) -> Self {
        let title = lead.title_text().to_lowercase();
        let funding = lead.funding_status_text().to_lowercase();
        let hq = lead.hq_text().to_lowercase();
        let publication_title = lead.publication_title_text().to_lowercase();
        let is_recent = lead
            .publication_year
            .map_or(false, |year| year >= RECENT_YEAR_FLOOR);

        Self {
            role_fit: contains_any(&title, &ROLE_KEYWORDS),
            company_intent: contains_any(&funding, &FUNDING_SIGNALS),
            location_hub: contains_any(&hq, &HUB_LOCATIONS),
            scientific_relevance: contains_any(&publication_title, &RELEVANCE_KEYWORDS) && is_recent,
        }
    }

    /// Sum the weights of the rules that fired, capped at `MAX_SCORE`.
    pub fn total(&self, weights: &RuleWeights) -> u8 {
        let mut sum = 0u32;
        if self.role_fit {
            sum += u32::from(weights.role_fit);
        }
        if self.company_intent {
            sum += u32::from(weights.company_intent);
        }
        if self.location_hub {
            sum += u32::from(weights.location_hub);
        }
        if self.scientific_relevance {
            sum += u32::from(weights.scientific_relevance);
        }
        sum.min(u32::from(RuleWeights::MAX_SCORE)) as u8
    }
}

/// Compute the propensity score for one merged lead.
/// Pure and deterministic; never fails.
pub fn score_lead(lead: &MergedLead, weights: &RuleWeights) -> u8 {
    RuleBreakdown::evaluate(lead).total(weights)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use prospect_common::{ContactRecord, PublicationRecord};

    fn lead(
        title: Option<&str>,
        funding: Option<&str>,
        hq: Option<&str>,
        publication: Option<(&str, Option<i32>)>,
    ) -> MergedLead {
        let contact = ContactRecord {
            name: Some("Jane Doe".to_string()),
            title: title.map(String::from),
            company: Some("Hepatica Bio".to_string()),
            hq: hq.map(String::from),
            funding_status: funding.map(String::from),
            linkedin_url: None,
        };
        match publication {
            Some((pub_title, year)) => {
                let publication = PublicationRecord {
                    name: Some("Jane Doe".to_string()),
                    publication_title: Some(pub_title.to_string()),
                    publication_year: year,
                };
                MergedLead::matched(&contact, "jane doe".to_string(), &publication)
            }
            None => MergedLead::unmatched(&contact, "jane doe".to_string()),
        }
    }

    #[test]
    fn test_all_rules_fire_for_exemplar_row() {
        let lead = lead(
            Some("Safety Lead"),
            Some("Series B"),
            Some("Boston, MA"),
            Some(("3D Organoid model of liver toxicity", Some(2024))),
        );
        assert_eq!(score_lead(&lead, &RuleWeights::default()), 100);
    }

    #[test]
    fn test_empty_row_scores_zero() {
        let lead = lead(None, None, None, None);
        assert_eq!(score_lead(&lead, &RuleWeights::default()), 0);
    }

    #[test]
    fn test_stale_publication_does_not_count() {
        let lead = lead(
            Some("Safety Lead"),
            Some("Series B"),
            Some("Boston, MA"),
            Some(("3D Organoid model of liver toxicity", Some(2020))),
        );
        assert_eq!(score_lead(&lead, &RuleWeights::default()), 60);
    }

    #[test]
    fn test_relevant_publication_without_year_does_not_count() {
        let lead = lead(None, None, None, Some(("Liver organoid DILI assay", None)));
        assert_eq!(score_lead(&lead, &RuleWeights::default()), 0);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let lead = lead(Some("HEAD OF TOXICOLOGY"), None, Some("LONDON"), None);
        assert_eq!(score_lead(&lead, &RuleWeights::default()), 40);
    }

    #[test]
    fn test_substring_match_inside_longer_text() {
        // "preclinical" inside a longer title; "cambridge" inside a full HQ.
        let lead = lead(
            Some("VP, Preclinical Development"),
            Some("recently partnered with pharma"),
            Some("Cambridge, UK"),
            None,
        );
        assert_eq!(score_lead(&lead, &RuleWeights::default()), 60);
    }

    #[test]
    fn test_score_is_capped_at_max() {
        let inflated = RuleWeights {
            role_fit: 90,
            company_intent: 90,
            location_hub: 90,
            scientific_relevance: 90,
        };
        let lead = lead(
            Some("3D toxicology"),
            Some("Series A"),
            Some("Basel"),
            Some(("Organ-chip toxicity", Some(2025))),
        );
        assert_eq!(score_lead(&lead, &inflated), RuleWeights::MAX_SCORE);
    }

    #[test]
    fn test_breakdown_reports_fired_rules() {
        let lead = lead(Some("Hepatic biology lead"), None, Some("Bay Area"), None);
        let breakdown = RuleBreakdown::evaluate(&lead);
        assert!(breakdown.role_fit);
        assert!(!breakdown.company_intent);
        assert!(breakdown.location_hub);
        assert!(!breakdown.scientific_relevance);
    }
}
