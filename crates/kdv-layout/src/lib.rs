// SPDX-License-Identifier: MIT
//
// kdv-layout — Text layout and pagination engine.
//
// Everything in this crate is independent of any PDF library: text is
// measured through the `TextMeasurer` trait, wrapped into lines, and flowed
// onto pages as positioned `TextRun`s. The resulting `RenderedDocument` is a
// plain value that the encoding layer turns into bytes.

pub mod blocks;
pub mod flow;
pub mod metrics;
pub mod wrap;

pub use blocks::{BlockRenderer, ContentBlock};
pub use flow::{Page, PageCursor, PageFlow, PageGeometry, RenderedDocument, TextRun};
pub use metrics::{HelveticaMetrics, TextMeasurer};
pub use wrap::{split_paragraphs, wrap};
