// SPDX-License-Identifier: MIT
//
// kdv-core — Domain types and error definitions shared across the
// KDV application generator crates.

pub mod error;
pub mod types;

pub use error::{KdvError, Result};
pub use types::*;
