// SPDX-License-Identifier: MIT
//
// Cover letter (Anschreiben): letterhead with the fixed recipient authority
// on the left and the applicant's address on the right, subject line, body,
// and signature placeholder.

use chrono::{Local, NaiveDate};
use kdv_core::ApplicationRecord;
use kdv_layout::flow::HEADING_SIZE;
use kdv_layout::{ContentBlock, RenderedDocument, TextMeasurer};
use tracing::debug;

use super::render_blocks;

/// Fixed recipient: the federal personnel office acting as
/// Wehrersatzbehörde.
const RECIPIENT_LINES: [&str; 5] = [
    "Bundesamt für das",
    "Personalmanagement der Bundeswehr",
    "- Wehrersatzbehörde -",
    "Militärringstraße 1000",
    "50737 Köln",
];

const SUBJECT: &str = "Betreff: Antrag auf Anerkennung als Kriegsdienstverweiger:in";
const SIGNATURE: &str = "Unterschrift: ______________________________";

/// Content blocks of the cover letter for a given letter date.
pub fn blocks(record: &ApplicationRecord, date: NaiveDate) -> Vec<ContentBlock> {
    let date_line = format!("{}, {}", record.personal.city, date.format("%d.%m.%Y"));

    vec![
        ContentBlock::heading("Antrag auf Kriegsdienstverweigerung", HEADING_SIZE),
        ContentBlock::raw_line("Art. 4 Abs. 3 Grundgesetz"),
        ContentBlock::spacer(),
        ContentBlock::AddressColumns {
            left: RECIPIENT_LINES.iter().map(|s| s.to_string()).collect(),
            right: sender_lines(record),
            date_line,
        },
        ContentBlock::raw_line(SUBJECT),
        ContentBlock::spacer(),
        ContentBlock::paragraph(body_text(record)),
        ContentBlock::spacer(),
        ContentBlock::raw_line(SIGNATURE),
    ]
}

/// Build the cover letter dated today.
pub fn build(record: &ApplicationRecord, measurer: &impl TextMeasurer) -> RenderedDocument {
    let blocks = blocks(record, Local::now().date_naive());
    let doc = render_blocks(&blocks, measurer);
    debug!(pages = doc.page_count(), "cover letter rendered");
    doc
}

/// Sender column: name, street, postal code + city, and a contact line if
/// email or phone is present. Empty lines are dropped.
fn sender_lines(record: &ApplicationRecord) -> Vec<String> {
    let personal = &record.personal;
    let contact: Vec<&str> = [personal.email.trim(), personal.phone.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

    let mut lines = vec![
        personal.full_name(),
        personal.street.trim().to_string(),
        format!("{} {}", personal.postal_code, personal.city)
            .trim()
            .to_string(),
    ];
    if !contact.is_empty() {
        lines.push(contact.join(" · "));
    }

    lines.retain(|line| !line.is_empty());
    lines
}

/// Salutation template, interpolated with the service status and — when the
/// authority has already assigned one — the file reference number.
fn body_text(record: &ApplicationRecord) -> String {
    let mut request = String::from(
        "hiermit beantrage ich die Anerkennung als Kriegsdienstverweiger:in \
         gemäß Art. 4 Abs. 3 GG.",
    );

    let status = record.service.status.trim();
    if !status.is_empty() {
        request.push_str(&format!(" Mein dienstlicher Status: {status}."));
    }
    let reference = record.service.reference_number.trim();
    if !reference.is_empty() {
        request.push_str(&format!(" Aktenzeichen: {reference}."));
    }

    format!(
        "Sehr geehrte Damen und Herren,\n\n\
         {request}\n\n\
         Meine Beweggründe schildere ich in der beigefügten \
         Gewissensbegründung. Ein tabellarischer Lebenslauf liegt bei. \
         Ich bitte um Bestätigung des Antragseingangs.\n\n\
         Mit freundlichen Grüßen,\n\n\
         {name}",
        name = record.personal.full_name()
    )
}
