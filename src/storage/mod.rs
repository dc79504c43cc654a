//! Storage module.
//!
//! Injected key-value storage (access token, stored collections) and the
//! job-creation notification queue built on it.

pub mod notifications;
pub mod store;

pub use notifications::*;
pub use store::*;
