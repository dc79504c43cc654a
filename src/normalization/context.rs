//! Normalization context.
//!
//! Carries what a normalization pass needs besides the records themselves:
//! the request id for logging, the job number to fall back on, and the
//! instant used when a record has no usable date.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use crate::logging::structured::LogContext;

/// Job label used for records fetched without a job filter.
pub const UNKNOWN_JOB_NO: &str = "Unknown";

/// Context for one normalization pass.
#[derive(Debug, Clone)]
pub struct NormalizeContext {
    pub request_id: String,
    /// Job number used when neither the detail nor the planning reference has one.
    pub fallback_job_no: String,
    /// Whether this pass belongs to a by-job query.
    pub by_job: bool,
    pub now: DateTime<Utc>,
}

impl NormalizeContext {
    /// Context for an unfiltered fetch.
    pub fn all(fallback_job_no: &str) -> Self {
        Self {
            request_id: new_request_id(),
            fallback_job_no: fallback_job_no.to_string(),
            by_job: false,
            now: Utc::now(),
        }
    }

    /// Context for a by-job fetch; the queried job number is the fallback.
    pub fn for_job(job_no: &str) -> Self {
        Self {
            request_id: new_request_id(),
            fallback_job_no: job_no.to_string(),
            by_job: true,
            now: Utc::now(),
        }
    }

    /// Pin "now" to a fixed instant.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = request_id.to_string();
        self
    }

    pub fn now_iso(&self) -> String {
        self.now.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn log_context(&self) -> LogContext {
        let ctx = LogContext::new(&self.request_id);
        if self.by_job {
            ctx.with_job(&self.fallback_job_no)
        } else {
            ctx
        }
    }

    /// Log prefix for lines emitted by a named client operation.
    pub fn log_context_for(&self, operation: &str) -> LogContext {
        self.log_context().with_operation(operation)
    }
}

impl Default for NormalizeContext {
    fn default() -> Self {
        Self::all(UNKNOWN_JOB_NO)
    }
}

/// Short random id for correlating log lines of one request.
pub fn new_request_id() -> String {
    format!("fetch-{}", &Uuid::new_v4().simple().to_string()[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_request_id_format() {
        let id = new_request_id();
        assert!(id.starts_with("fetch-"));
        assert_eq!(id.len(), "fetch-".len() + 8);
    }

    #[test]
    fn test_now_iso() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap();
        let ctx = NormalizeContext::default().with_now(now);
        assert_eq!(ctx.now_iso(), "2026-03-01T08:30:00.000Z");
    }

    #[test]
    fn test_log_context_includes_job_for_by_job() {
        let ctx = NormalizeContext::for_job("JOB-42").with_request_id("fetch-abc");
        assert_eq!(ctx.log_context().to_string(), "[request=fetch-abc] [job=JOB-42]");

        let ctx = NormalizeContext::all(UNKNOWN_JOB_NO).with_request_id("fetch-abc");
        assert_eq!(ctx.log_context().to_string(), "[request=fetch-abc]");
    }

    #[test]
    fn test_log_context_for_operation() {
        let ctx = NormalizeContext::for_job("JOB-42").with_request_id("fetch-abc");
        assert_eq!(
            ctx.log_context_for("fetch_by_job").to_string(),
            "[request=fetch-abc] [op=fetch_by_job] [job=JOB-42]"
        );
    }
}
