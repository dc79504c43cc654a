//! Summary statistics over normalized printing records.

pub mod summary;

pub use summary::*;
