// SPDX-License-Identifier: MIT
//
// Content blocks and the renderer that flows them onto pages.
//
// A document builder describes its document as an ordered list of
// `ContentBlock`s; the `BlockRenderer` turns that list into positioned text
// runs via the wrapper and page flow. The enum is deliberately closed so a
// new block kind cannot be added without handling it here.

use crate::flow::{PageCursor, PageFlow, PageGeometry, RenderedDocument, BODY_SIZE};
use crate::metrics::TextMeasurer;
use crate::wrap::{split_paragraphs, wrap};

/// One typed unit of document content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// Wrapped text at a heading size, one line-height per line, no gap.
    Heading { text: String, size: f32 },
    /// Body text; blank lines split sub-paragraphs, which are separated by
    /// half a line-height.
    Paragraph { text: String },
    /// Drawn verbatim without wrapping or measuring — fixed-format lines
    /// such as the signature placeholder. An empty raw line is the idiom
    /// for vertical spacing between blocks.
    RawLine { text: String },
    /// Letterhead: `left` lines at the left margin and `right` lines at the
    /// right-column offset, anchored to the same starting height, with the
    /// date line below whichever column ends lower.
    AddressColumns {
        left: Vec<String>,
        right: Vec<String>,
        date_line: String,
    },
}

impl ContentBlock {
    pub fn heading(text: impl Into<String>, size: f32) -> Self {
        Self::Heading {
            text: text.into(),
            size,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn raw_line(text: impl Into<String>) -> Self {
        Self::RawLine { text: text.into() }
    }

    /// Blank raw line used as a one-line vertical spacer.
    pub fn spacer() -> Self {
        Self::RawLine {
            text: String::new(),
        }
    }
}

/// Renders content blocks onto a page flow.
pub struct BlockRenderer<'m, M: TextMeasurer> {
    flow: PageFlow,
    measurer: &'m M,
}

impl<'m, M: TextMeasurer> BlockRenderer<'m, M> {
    pub fn new(geometry: PageGeometry, measurer: &'m M) -> Self {
        Self {
            flow: PageFlow::new(geometry),
            measurer,
        }
    }

    /// Cursor at the top of the first page.
    pub fn start(&self) -> PageCursor {
        self.flow.start()
    }

    /// Render `blocks` in order, starting at `cursor`, returning the cursor
    /// after the last block. Page breaks happen implicitly whenever a line
    /// would land below the bottom margin.
    pub fn render(&mut self, blocks: &[ContentBlock], cursor: PageCursor) -> PageCursor {
        let mut cursor = cursor;
        for block in blocks {
            cursor = match block {
                ContentBlock::Heading { text, size } => self.render_heading(text, *size, cursor),
                ContentBlock::Paragraph { text } => self.render_paragraph(text, cursor),
                ContentBlock::RawLine { text } => self.render_raw_line(text, cursor),
                ContentBlock::AddressColumns {
                    left,
                    right,
                    date_line,
                } => self.render_address_columns(left, right, date_line, cursor),
            };
        }
        cursor
    }

    /// Finish rendering and hand over the document.
    pub fn into_document(self) -> RenderedDocument {
        self.flow.into_document()
    }

    fn geometry(&self) -> PageGeometry {
        *self.flow.geometry()
    }

    fn render_heading(&mut self, text: &str, size: f32, cursor: PageCursor) -> PageCursor {
        let geometry = self.geometry();
        let mut cursor = cursor;
        for line in wrap(text, geometry.usable_width(), size, self.measurer) {
            cursor = self.flow.ensure_space(cursor);
            self.flow.draw(&cursor, geometry.margin, &line, size);
            cursor = self.flow.advance(cursor, geometry.line_height);
        }
        cursor
    }

    fn render_paragraph(&mut self, text: &str, cursor: PageCursor) -> PageCursor {
        let geometry = self.geometry();
        let mut cursor = cursor;
        for (index, paragraph) in split_paragraphs(text).iter().enumerate() {
            if index > 0 {
                cursor = self.flow.advance(cursor, geometry.line_height / 2.0);
            }
            for line in wrap(paragraph, geometry.usable_width(), BODY_SIZE, self.measurer) {
                cursor = self.flow.ensure_space(cursor);
                self.flow.draw(&cursor, geometry.margin, &line, BODY_SIZE);
                cursor = self.flow.advance(cursor, geometry.line_height);
            }
        }
        cursor
    }

    fn render_raw_line(&mut self, text: &str, cursor: PageCursor) -> PageCursor {
        let geometry = self.geometry();
        let cursor = self.flow.ensure_space(cursor);
        if !text.is_empty() {
            self.flow.draw(&cursor, geometry.margin, text, BODY_SIZE);
        }
        self.flow.advance(cursor, geometry.line_height)
    }

    fn render_address_columns(
        &mut self,
        left: &[String],
        right: &[String],
        date_line: &str,
        cursor: PageCursor,
    ) -> PageCursor {
        let geometry = self.geometry();
        let right_x = geometry.width * 2.0 / 3.0;
        let start = self.flow.ensure_space(cursor);

        let mut left_cursor = start;
        for line in left {
            left_cursor = self.flow.ensure_space(left_cursor);
            self.flow.draw(&left_cursor, geometry.margin, line, BODY_SIZE);
            left_cursor = self.flow.advance(left_cursor, geometry.line_height);
        }

        let mut right_cursor = start;
        for line in right {
            right_cursor = self.flow.ensure_space(right_cursor);
            self.flow.draw(&right_cursor, right_x, line, BODY_SIZE);
            right_cursor = self.flow.advance(right_cursor, geometry.line_height);
        }

        // The date goes under the sender column, below whichever column
        // reaches further down the page.
        let mut date_cursor = lower_of(left_cursor, right_cursor);
        date_cursor = self.flow.advance(date_cursor, geometry.line_height * 0.6);
        date_cursor = self.flow.ensure_space(date_cursor);
        self.flow.draw(&date_cursor, right_x, date_line, BODY_SIZE);

        self.flow.advance(date_cursor, geometry.line_height * 1.6)
    }
}

/// The cursor that is further along in the document: later page wins,
/// otherwise the smaller y (closer to the bottom).
fn lower_of(a: PageCursor, b: PageCursor) -> PageCursor {
    if a.page != b.page {
        if a.page > b.page { a } else { b }
    } else if a.y <= b.y {
        a
    } else {
        b
    }
}
