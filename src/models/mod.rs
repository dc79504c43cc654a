//! Data models.
//!
//! Normalized printing records, the summary computed over them, and the
//! envelope the printing-details API responds with.

pub mod record;
pub mod response;
pub mod summary;

pub use record::*;
pub use response::*;
pub use summary::*;
