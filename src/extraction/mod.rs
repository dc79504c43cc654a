//! Field extraction module.
//!
//! Dot-path lookup into raw step records and ordered fallback chains.

pub mod fallback;
pub mod json_path;

pub use fallback::*;
pub use json_path::*;
