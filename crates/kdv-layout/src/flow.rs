// SPDX-License-Identifier: MIT
//
// Page flow — vertical cursor tracking and automatic page breaks.
//
// Coordinates follow the PDF convention: y is measured in points from the
// bottom of the page, so writing moves the cursor downward by decrementing y.
// The cursor is a plain value threaded through every operation; only the
// accumulating document inside `PageFlow` is mutated, and pages are only
// ever appended.

use tracing::debug;

/// Page dimensions and layout constants, in points.
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    /// Uniform margin on all four sides.
    pub margin: f32,
    pub line_height: f32,
}

impl PageGeometry {
    /// A4 with the application's standard margins.
    pub fn a4() -> Self {
        Self {
            width: 595.28,
            height: 841.89,
            margin: 56.0,
            line_height: 16.0,
        }
    }

    /// Horizontal space available to wrapped text.
    pub fn usable_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Where the write cursor starts on a fresh page.
    pub fn top(&self) -> f32 {
        self.height - self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// Body text size in points.
pub const BODY_SIZE: f32 = 11.0;
/// Document title size.
pub const HEADING_SIZE: f32 = 16.0;
/// Section heading size (justification segments).
pub const SUBHEADING_SIZE: f32 = 13.0;

/// One positioned piece of text on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font_size: f32,
}

/// All text runs of a single page, in draw order.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub runs: Vec<TextRun>,
}

/// A fully laid-out document: ordered pages of ordered text runs. Produced
/// once per builder invocation and immutable afterwards.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub pages: Vec<Page>,
}

impl RenderedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All runs across all pages in page-then-draw order.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.pages.iter().flat_map(|page| page.runs.iter())
    }
}

/// Write position within a document build: active page index and vertical
/// position. A value type — operations return the updated cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    pub page: usize,
    pub y: f32,
}

/// Flows text runs onto pages, allocating a new page whenever a write would
/// land below the bottom margin.
#[derive(Debug)]
pub struct PageFlow {
    geometry: PageGeometry,
    pages: Vec<Page>,
}

impl PageFlow {
    /// Start a flow with one empty page.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![Page::default()],
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Cursor at the top margin of the first page.
    pub fn start(&self) -> PageCursor {
        PageCursor {
            page: 0,
            y: self.geometry.top(),
        }
    }

    /// Guarantee there is room for one more line at the cursor. If not, a
    /// new page becomes active and the cursor resets to its top margin.
    /// Pages are never removed or reordered.
    pub fn ensure_space(&mut self, cursor: PageCursor) -> PageCursor {
        if cursor.y >= self.geometry.margin + self.geometry.line_height {
            return cursor;
        }

        self.pages.push(Page::default());
        let page = self.pages.len() - 1;
        debug!(page, "page break");
        PageCursor {
            page,
            y: self.geometry.top(),
        }
    }

    /// Move the cursor down by `dy` points.
    pub fn advance(&self, cursor: PageCursor, dy: f32) -> PageCursor {
        PageCursor {
            page: cursor.page,
            y: cursor.y - dy,
        }
    }

    /// Place a text run at horizontal position `x` on the cursor's line.
    /// Callers must run [`PageFlow::ensure_space`] first; that ordering is
    /// what keeps text above the bottom margin.
    pub fn draw(&mut self, cursor: &PageCursor, x: f32, text: &str, font_size: f32) {
        self.pages[cursor.page].runs.push(TextRun {
            x,
            y: cursor.y,
            text: text.to_string(),
            font_size,
        });
    }

    /// Finish the flow and hand over the document.
    pub fn into_document(self) -> RenderedDocument {
        RenderedDocument { pages: self.pages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_geometry() -> PageGeometry {
        // Room for exactly 5 lines: usable height 80, line height 16.
        PageGeometry {
            width: 200.0,
            height: 112.0,
            margin: 16.0,
            line_height: 16.0,
        }
    }

    #[test]
    fn fresh_flow_has_one_page() {
        let flow = PageFlow::new(PageGeometry::a4());
        assert_eq!(flow.into_document().page_count(), 1);
    }

    #[test]
    fn ensure_space_is_noop_with_room() {
        let mut flow = PageFlow::new(small_geometry());
        let cursor = flow.start();
        let after = flow.ensure_space(cursor);
        assert_eq!(after, cursor);
    }

    #[test]
    fn write_below_margin_breaks_page() {
        let mut flow = PageFlow::new(small_geometry());
        let mut cursor = flow.start();

        for i in 0..7 {
            cursor = flow.ensure_space(cursor);
            flow.draw(&cursor, 16.0, &format!("Zeile {i}"), 11.0);
            cursor = flow.advance(cursor, 16.0);
        }

        let doc = flow.into_document();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages[0].runs.len(), 5);
        assert_eq!(doc.pages[1].runs.len(), 2);
    }

    #[test]
    fn no_run_lands_below_bottom_margin() {
        let geometry = small_geometry();
        let mut flow = PageFlow::new(geometry);
        let mut cursor = flow.start();

        for _ in 0..40 {
            cursor = flow.ensure_space(cursor);
            flow.draw(&cursor, geometry.margin, "x", 11.0);
            cursor = flow.advance(cursor, geometry.line_height);
        }

        let doc = flow.into_document();
        for run in doc.runs() {
            assert!(run.y >= geometry.margin, "run below margin at y={}", run.y);
        }
    }

    #[test]
    fn lines_keep_order_across_page_break() {
        let mut flow = PageFlow::new(small_geometry());
        let mut cursor = flow.start();

        for i in 0..12 {
            cursor = flow.ensure_space(cursor);
            flow.draw(&cursor, 16.0, &i.to_string(), 11.0);
            cursor = flow.advance(cursor, 16.0);
        }

        let doc = flow.into_document();
        let texts: Vec<&str> = doc.runs().map(|r| r.text.as_str()).collect();
        let expected: Vec<String> = (0..12).map(|i| i.to_string()).collect();
        assert_eq!(texts, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
