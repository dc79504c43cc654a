//! Retrieval from the printing-details REST API.
//!
//! - `transport` - GET with bearer auth (reqwest, or a test stub)
//! - `client` - credential lookup, envelope checks, normalization

pub mod client;
pub mod transport;

pub use client::*;
pub use transport::*;
