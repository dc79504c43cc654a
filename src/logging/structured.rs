//! Log line prefixes.
//!
//! Every event line starts with the same bracketed tags so one retrieval
//! can be followed through the log: `[request=..] [op=..] [job=..]`.
//! Tags that are not set are left out.

use std::fmt;

/// Correlation tags for one retrieval or normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogContext {
    pub request_id: String,
    pub operation: Option<String>,
    pub job_no: Option<String>,
}

impl LogContext {
    pub fn new(request_id: &str) -> Self {
        Self {
            request_id: request_id.to_string(),
            ..Self::default()
        }
    }

    /// Tag lines with the client operation that produced them.
    pub fn with_operation(mut self, operation: &str) -> Self {
        self.operation = Some(operation.to_string());
        self
    }

    pub fn with_job(mut self, job_no: &str) -> Self {
        self.job_no = Some(job_no.to_string());
        self
    }

    fn tags(&self) -> impl Iterator<Item = (&'static str, &str)> {
        let request = Some(("request", self.request_id.as_str()));
        let operation = self.operation.as_deref().map(|op| ("op", op));
        let job = self.job_no.as_deref().map(|job| ("job", job));
        [request, operation, job].into_iter().flatten()
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (tag, value)) in self.tags().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "[{}={}]", tag, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_context_display() {
        let ctx = LogContext::new("fetch-123");
        assert_eq!(format!("{}", ctx), "[request=fetch-123]");

        let ctx_with_job = ctx.with_job("JOB-42");
        assert_eq!(
            format!("{}", ctx_with_job),
            "[request=fetch-123] [job=JOB-42]"
        );
    }

    #[test]
    fn test_operation_sits_between_request_and_job() {
        let ctx = LogContext::new("fetch-123").with_operation("fetch_all");
        assert_eq!(ctx.to_string(), "[request=fetch-123] [op=fetch_all]");

        let ctx = LogContext::new("fetch-123")
            .with_job("JOB-42")
            .with_operation("fetch_by_job");
        assert_eq!(
            ctx.to_string(),
            "[request=fetch-123] [op=fetch_by_job] [job=JOB-42]"
        );
    }
}
