// SPDX-License-Identifier: MIT
//
// kdv-document — Builds the three application documents (cover letter,
// justification statement, CV) from an `ApplicationRecord`, encodes them to
// PDF via `printpdf`, and assembles the combined bundle via `lopdf`.

pub mod assemble;
pub mod builders;
pub mod encode;

pub use assemble::BundleAssembler;
pub use encode::encode_document;
