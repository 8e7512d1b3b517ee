//! Record types for the two tabular sources and the merged lead rows.
//!
//! Every field that comes out of a CSV cell is an `Option`: an absent or
//! empty cell deserializes to `None` and is treated as empty text downstream
//! via the `*_text()` accessors. Rows are never rejected for missing fields.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Contact roster (primary source)
// ---------------------------------------------------------------------------

/// One row of the contact/company roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Company", default)]
    pub company: Option<String>,
    #[serde(rename = "HQ", default)]
    pub hq: Option<String>,
    #[serde(rename = "Funding Status", default)]
    pub funding_status: Option<String>,
    #[serde(rename = "LinkedIn_URL", default)]
    pub linkedin_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Publication roster (secondary source)
// ---------------------------------------------------------------------------

/// One author-publication pairing. A name may appear zero or more times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationRecord {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Publication_Title", default)]
    pub publication_title: Option<String>,
    #[serde(rename = "Publication_Year", deserialize_with = "year_opt", default)]
    pub publication_year: Option<i32>,
}

/// Tolerant year parser: absent, empty, or unparseable cells become `None`.
/// Accepts integer-valued floats ("2024.0") left behind by spreadsheet tools.
fn year_opt<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else { return Ok(None) };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(year) = trimmed.parse::<i32>() {
        return Ok(Some(year));
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 => Ok(Some(f as i32)),
        _ => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Merged lead (left outer join result)
// ---------------------------------------------------------------------------

/// One ranked output row: a contact joined with zero-or-one publication.
/// A contact matching several publications fans out into several leads.
///
/// Field order is the export column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergedLead {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Company", default)]
    pub company: Option<String>,
    #[serde(rename = "HQ", default)]
    pub hq: Option<String>,
    #[serde(rename = "Funding Status", default)]
    pub funding_status: Option<String>,
    #[serde(rename = "LinkedIn_URL", default)]
    pub linkedin_url: Option<String>,
    /// Normalized join key the row was merged on.
    #[serde(rename = "Name_Key", default)]
    pub name_key: String,
    #[serde(rename = "Publication_Title", default)]
    pub publication_title: Option<String>,
    #[serde(rename = "Publication_Year", deserialize_with = "year_opt", default)]
    pub publication_year: Option<i32>,
    /// Propensity score in [0, 100], assigned by the ranking pipeline.
    #[serde(rename = "Probability_Score", default)]
    pub probability_score: u8,
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

impl MergedLead {
    /// Lead for a contact with no publication match.
    pub fn unmatched(contact: &ContactRecord, name_key: String) -> Self {
        Self {
            name: contact.name.clone(),
            title: contact.title.clone(),
            company: contact.company.clone(),
            hq: contact.hq.clone(),
            funding_status: contact.funding_status.clone(),
            linkedin_url: contact.linkedin_url.clone(),
            name_key,
            publication_title: None,
            publication_year: None,
            probability_score: 0,
        }
    }

    /// Lead for a contact joined with one matching publication.
    /// The publication's own `Name` is dropped; the contact's is authoritative.
    pub fn matched(contact: &ContactRecord, name_key: String, publication: &PublicationRecord) -> Self {
        let mut lead = Self::unmatched(contact, name_key);
        lead.publication_title = publication.publication_title.clone();
        lead.publication_year = publication.publication_year;
        lead
    }

    // ── Get-or-default-empty accessors (used uniformly by the scorer) ──────

    pub fn name_text(&self) -> &str {
        text(&self.name)
    }

    pub fn title_text(&self) -> &str {
        text(&self.title)
    }

    pub fn company_text(&self) -> &str {
        text(&self.company)
    }

    pub fn hq_text(&self) -> &str {
        text(&self.hq)
    }

    pub fn funding_status_text(&self) -> &str {
        text(&self.funding_status)
    }

    pub fn linkedin_text(&self) -> &str {
        text(&self.linkedin_url)
    }

    pub fn publication_title_text(&self) -> &str {
        text(&self.publication_title)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> ContactRecord {
        ContactRecord {
            name: Some(name.to_string()),
            title: None,
            company: None,
            hq: None,
            funding_status: None,
            linkedin_url: None,
        }
    }

    #[test]
    fn test_unmatched_lead_has_no_publication_fields() {
        let lead = MergedLead::unmatched(&contact("Jane Doe"), "jane doe".to_string());
        assert_eq!(lead.name_text(), "Jane Doe");
        assert!(lead.publication_title.is_none());
        assert!(lead.publication_year.is_none());
        assert_eq!(lead.probability_score, 0);
    }

    #[test]
    fn test_matched_lead_drops_publication_name() {
        let publication = PublicationRecord {
            name: Some("Dr. Jane Doe".to_string()),
            publication_title: Some("Liver organoids".to_string()),
            publication_year: Some(2024),
        };
        let lead = MergedLead::matched(&contact("Jane Doe"), "jane doe".to_string(), &publication);
        assert_eq!(lead.name_text(), "Jane Doe");
        assert_eq!(lead.publication_title_text(), "Liver organoids");
        assert_eq!(lead.publication_year, Some(2024));
    }

    #[test]
    fn test_accessors_default_to_empty_text() {
        let lead = MergedLead::unmatched(
            &ContactRecord {
                name: None,
                title: None,
                company: None,
                hq: None,
                funding_status: None,
                linkedin_url: None,
            },
            String::new(),
        );
        assert_eq!(lead.name_text(), "");
        assert_eq!(lead.title_text(), "");
        assert_eq!(lead.hq_text(), "");
        assert_eq!(lead.funding_status_text(), "");
        assert_eq!(lead.publication_title_text(), "");
    }
}
