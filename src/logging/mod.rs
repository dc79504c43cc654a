//! Structured logging with request context.
//!
//! Every log line is prefixed with the request id (and job number for by-job
//! queries) so one fetch can be followed end to end.

pub mod structured;

pub use structured::*;

/// Initialize the process-wide logger.
///
/// Defaults to `info`; `RUST_LOG` overrides it. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
