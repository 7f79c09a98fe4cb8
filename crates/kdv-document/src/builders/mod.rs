// SPDX-License-Identifier: MIT
//
// The three document builders. Each exposes a `blocks` function producing
// the ordered content-block list (what tests inspect) and a `build` function
// rendering those blocks into a `RenderedDocument`. Builders are pure: empty
// or missing text renders as an empty block, never as an error.

pub mod cover_letter;
pub mod cv;
pub mod justification;

use kdv_layout::flow::PageGeometry;
use kdv_layout::{BlockRenderer, ContentBlock, RenderedDocument, TextMeasurer};

/// Render a block list onto fresh A4 pages.
pub(crate) fn render_blocks(
    blocks: &[ContentBlock],
    measurer: &impl TextMeasurer,
) -> RenderedDocument {
    let mut renderer = BlockRenderer::new(PageGeometry::a4(), measurer);
    let cursor = renderer.start();
    renderer.render(blocks, cursor);
    renderer.into_document()
}
