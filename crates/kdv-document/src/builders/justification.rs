// SPDX-License-Identifier: MIT
//
// Justification statement (Gewissensbegründung): fixed intro followed by the
// four conscience segments, each a subheading plus the applicant's narrative.

use kdv_core::ApplicationRecord;
use kdv_layout::flow::{HEADING_SIZE, SUBHEADING_SIZE};
use kdv_layout::{ContentBlock, RenderedDocument, TextMeasurer};
use tracing::debug;

use super::render_blocks;

const INTRO: &str = "Ich stelle den Antrag auf Kriegsdienstverweigerung, weil es \
    meinem Gewissen widerspricht, an Handlungen mitzuwirken, die auf den Einsatz \
    von Waffen oder die Vorbereitung militärischer Gewalt gerichtet sind.";

/// Visible stand-in for a segment the applicant left empty, so every
/// subheading keeps a body under it.
const EMPTY_SEGMENT_MARK: &str = "–";

/// The four titled segments in their fixed order.
fn segments(record: &ApplicationRecord) -> [(&'static str, &str); 4] {
    let c = &record.conscience;
    [
        ("Entstehung des Gewissenskonflikts", &c.conscience_origin),
        ("Weshalb Waffengewalt unvereinbar ist", &c.moral_conflict),
        ("Konkretes friedliches Handeln", &c.actions_taken),
        ("Was ich ablehne", &c.refusal_scope),
    ]
}

/// Content blocks of the justification statement.
pub fn blocks(record: &ApplicationRecord) -> Vec<ContentBlock> {
    let mut blocks = vec![
        ContentBlock::heading("Persönliche Gewissensbegründung", HEADING_SIZE),
        ContentBlock::raw_line(record.personal.full_name()),
        ContentBlock::spacer(),
        ContentBlock::paragraph(INTRO),
        ContentBlock::spacer(),
    ];

    for (heading, text) in segments(record) {
        blocks.push(ContentBlock::heading(heading, SUBHEADING_SIZE));
        let body = text.trim();
        blocks.push(ContentBlock::paragraph(if body.is_empty() {
            EMPTY_SEGMENT_MARK
        } else {
            body
        }));
        blocks.push(ContentBlock::spacer());
    }

    blocks
}

/// Build the justification statement.
pub fn build(record: &ApplicationRecord, measurer: &impl TextMeasurer) -> RenderedDocument {
    let doc = render_blocks(&blocks(record), measurer);
    debug!(pages = doc.page_count(), "justification rendered");
    doc
}
