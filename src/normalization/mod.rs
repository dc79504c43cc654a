//! Printing record normalization.
//!
//! Turns heterogeneous step items from the printing-details API into
//! uniform [`crate::models::PrintingRecord`] values:
//! - Locate the nested printing detail
//! - Resolve each field through its ordered fallback chain
//! - Default whatever is still missing

pub mod context;
pub mod fields;
pub mod normalizer;

pub use context::*;
pub use normalizer::*;
