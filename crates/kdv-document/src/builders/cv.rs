// SPDX-License-Identifier: MIT
//
// Tabular CV (Lebenslauf): contact block followed by one paragraph per
// entry, strictly in the order the applicant supplied them.

use kdv_core::{ApplicationRecord, CvEntry};
use kdv_layout::flow::HEADING_SIZE;
use kdv_layout::{ContentBlock, RenderedDocument, TextMeasurer};
use tracing::debug;

use super::render_blocks;

/// Content blocks of the CV.
pub fn blocks(record: &ApplicationRecord) -> Vec<ContentBlock> {
    let mut blocks = vec![
        ContentBlock::heading("Tabellarischer Lebenslauf", HEADING_SIZE),
        ContentBlock::spacer(),
        ContentBlock::paragraph(contact_text(record)),
    ];

    // Input order is meaningful; entries are never re-sorted by date.
    for entry in &record.cv {
        blocks.push(ContentBlock::paragraph(entry_text(entry)));
    }

    blocks
}

/// Build the CV document.
pub fn build(record: &ApplicationRecord, measurer: &impl TextMeasurer) -> RenderedDocument {
    let doc = render_blocks(&blocks(record), measurer);
    debug!(
        entries = record.cv.len(),
        pages = doc.page_count(),
        "cv rendered"
    );
    doc
}

fn contact_text(record: &ApplicationRecord) -> String {
    let p = &record.personal;
    format!(
        "{}\n{}\n{} {}\n{} | {}",
        p.full_name(),
        p.street,
        p.postal_code,
        p.city,
        p.email,
        p.phone
    )
}

/// `"{start} – {end}: {title} ({organization})"` plus the description; the
/// newline between them collapses during wrapping, as a single paragraph.
fn entry_text(entry: &CvEntry) -> String {
    format!(
        "{} – {}: {} ({})\n{}",
        entry.start_date, entry.end_date, entry.title, entry.organization, entry.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kdv_layout::HelveticaMetrics;

    fn entry(start: &str, end: &str, title: &str) -> CvEntry {
        CvEntry {
            start_date: start.into(),
            end_date: end.into(),
            title: title.into(),
            organization: "Org".into(),
            description: format!("Beschreibung {title}"),
        }
    }

    #[test]
    fn entries_keep_input_order() {
        // Deliberately not sorted by date; the rendered order must match
        // the input order.
        let record = ApplicationRecord {
            cv: vec![
                entry("2010", "2014", "Schule"),
                entry("2014", "2018", "Ausbildung"),
                entry("2018", "laufend", "Beruf"),
            ],
            ..Default::default()
        };

        let doc = build(&record, &HelveticaMetrics);
        let order: Vec<usize> = ["Schule", "Ausbildung", "Beruf"]
            .iter()
            .map(|title| {
                doc.runs()
                    .position(|r| r.text.contains(&format!("{title} (Org)")))
                    .expect("entry missing")
            })
            .collect();
        assert!(order[0] < order[1] && order[1] < order[2]);
    }

    #[test]
    fn entry_header_format() {
        let text = entry_text(&entry("2010", "2014", "Schule"));
        assert!(text.starts_with("2010 – 2014: Schule (Org)\n"));
    }

    #[test]
    fn empty_cv_renders_heading_and_contact_only() {
        let doc = build(&ApplicationRecord::default(), &HelveticaMetrics);
        assert_eq!(doc.page_count(), 1);
        assert!(doc.runs().any(|r| r.text == "Tabellarischer Lebenslauf"));
    }
}
