// SPDX-License-Identifier: MIT
//
// PDF encoding — turn a `RenderedDocument` into PDF bytes using `printpdf`
// 0.8. printpdf's data-oriented API builds documents from `PdfPage` structs
// containing `Vec<Op>` operation lists, serialised via `PdfDocument::save()`.
//
// Text positions in `RenderedDocument` are already in points from the page's
// bottom-left corner, so runs map directly onto text-cursor ops.

use kdv_core::Result;
use kdv_layout::RenderedDocument;
use printpdf::{
    BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt, TextItem,
};
use tracing::{debug, instrument};

const A4_WIDTH: Mm = Mm(210.0);
const A4_HEIGHT: Mm = Mm(297.0);

/// Encode a rendered document as a standalone PDF with the given title in
/// its metadata. A document without pages still yields one blank page.
#[instrument(skip(document), fields(pages = document.page_count()))]
pub fn encode_document(document: &RenderedDocument, title: &str) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::new(title);

    let mut pages: Vec<PdfPage> = document
        .pages
        .iter()
        .map(|page| {
            let mut ops: Vec<Op> = Vec::with_capacity(page.runs.len() * 5);
            for run in &page.runs {
                ops.push(Op::StartTextSection);
                ops.push(Op::SetTextCursor {
                    pos: Point {
                        x: Pt(run.x),
                        y: Pt(run.y),
                    },
                });
                ops.push(Op::SetFontSizeBuiltinFont {
                    size: Pt(run.font_size),
                    font: BuiltinFont::Helvetica,
                });
                ops.push(Op::WriteTextBuiltinFont {
                    items: vec![TextItem::Text(run.text.clone())],
                    font: BuiltinFont::Helvetica,
                });
                ops.push(Op::EndTextSection);
            }
            PdfPage::new(A4_WIDTH, A4_HEIGHT, ops)
        })
        .collect();

    if pages.is_empty() {
        pages.push(PdfPage::new(A4_WIDTH, A4_HEIGHT, Vec::new()));
    }

    doc.with_pages(pages);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
    debug!(bytes = output.len(), title, "document encoded");

    Ok(output)
}
