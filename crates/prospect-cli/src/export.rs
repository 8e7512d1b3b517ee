//! CSV export of the ranked table.

use std::path::Path;

use prospect_common::{MergedLead, Result};

/// Write the ranked (and possibly filtered) rows to `path` as CSV.
/// All columns are written, score included, so the file round-trips
/// through the same record type.
pub fn write_csv(path: &Path, leads: &[MergedLead]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for lead in leads {
        writer.serialize(lead)?;
    }
    writer.flush()?;
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use prospect_common::{ContactRecord, PublicationRecord};

    fn lead(name: &str, year: Option<i32>, score: u8) -> MergedLead {
        let contact = ContactRecord {
            name: Some(name.to_string()),
            title: Some("Safety Lead".to_string()),
            company: Some("Hepatica Bio".to_string()),
            hq: Some("Boston, MA".to_string()),
            funding_status: Some("Series B".to_string()),
            linkedin_url: Some("https://linkedin.com/in/x".to_string()),
        };
        let mut lead = match year {
            Some(_) => MergedLead::matched(
                &contact,
                name.to_lowercase(),
                &PublicationRecord {
                    name: Some(name.to_string()),
                    publication_title: Some("Liver organoids".to_string()),
                    publication_year: year,
                },
            ),
            None => MergedLead::unmatched(&contact, name.to_lowercase()),
        };
        lead.probability_score = score;
        lead
    }

    #[test]
    fn test_export_round_trips_scores_and_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranked_leads.csv");
        let leads = vec![lead("Jane Doe", Some(2024), 100), lead("Bob Lee", None, 0)];

        write_csv(&path, &leads).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let parsed: Vec<MergedLead> = reader
            .deserialize::<MergedLead>()
            .collect::<std::result::Result<_, _>>()
            .unwrap();

        assert_eq!(parsed.len(), leads.len());
        for (before, after) in leads.iter().zip(parsed.iter()) {
            assert_eq!(before.name, after.name);
            assert_eq!(before.probability_score, after.probability_score);
            assert_eq!(before.publication_year, after.publication_year);
        }
    }

    #[test]
    fn test_export_header_uses_source_column_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranked_leads.csv");
        write_csv(&path, &[lead("Jane Doe", Some(2024), 100)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(
            header,
            "Name,Title,Company,HQ,Funding Status,LinkedIn_URL,Name_Key,Publication_Title,Publication_Year,Probability_Score"
        );
    }
}
