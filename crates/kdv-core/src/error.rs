// SPDX-License-Identifier: MIT
//
// Unified error types for the KDV application generator.

use thiserror::Error;

/// Top-level error type for all generator operations.
///
/// Layout itself never fails: over-wide words overflow the margin and empty
/// content renders as an empty block. Only the document-encoding collaborators
/// (printpdf, lopdf) surface errors, and those abort the whole bundle.
#[derive(Debug, Error)]
pub enum KdvError {
    #[error("PDF encoding failed: {0}")]
    Encode(String),

    #[error("bundle assembly failed: {0}")]
    Assembly(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, KdvError>;
