//! Text rendering of the ranked lead table.

use prospect_common::MergedLead;

const HEADERS: [&str; 7] = [
    "Score",
    "Name",
    "Title",
    "Company",
    "HQ",
    "Funding Status",
    "LinkedIn",
];

/// Print the ranked table. `limit` truncates the display only; the caller
/// keeps the full row set for export.
pub fn render(leads: &[MergedLead], limit: Option<usize>) {
    print!("{}", render_to_string(leads, limit));
}

pub fn render_to_string(leads: &[MergedLead], limit: Option<usize>) -> String {
    let shown = limit.unwrap_or(leads.len()).min(leads.len());
    let rows: Vec<[String; 7]> = leads[..shown].iter().map(row_cells).collect();

    let mut widths: [usize; 7] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADERS.map(String::from), &widths);
    write_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        write_row(&mut out, row, &widths);
    }
    if shown < leads.len() {
        out.push_str(&format!("... {} more rows\n", leads.len() - shown));
    }
    out
}

fn write_row(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{:<w$}", cell, w = *width));
    }
    // No trailing padding after the last column.
    out.push_str(line.trim_end());
    out.push('\n');
}

fn row_cells(lead: &MergedLead) -> [String; 7] {
    [
        format!("{}%", lead.probability_score),
        lead.name_text().to_string(),
        lead.title_text().to_string(),
        lead.company_text().to_string(),
        lead.hq_text().to_string(),
        lead.funding_status_text().to_string(),
        lead.linkedin_text().to_string(),
    ]
}

// ── Tests ───────────────────────────────────────────────────────────────────
