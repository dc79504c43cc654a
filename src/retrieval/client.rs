//! Printing-details API client.
//!
//! Each fetch runs the same steps:
//! 1. Read the access token from storage
//! 2. GET the endpoint with a bearer header
//! 3. Check the HTTP status
//! 4. Unwrap the `{ success, data }` envelope
//! 5. Normalize every step item
//!
//! All fetch operations propagate failures. `fetch_all_or_empty` is the one
//! place that turns a failure into an empty list, for views that render
//! "no data" either way.

use std::sync::Arc;

use url::Url;

use crate::aggregation::summary::summarize;
use crate::config::ClientConfig;
use crate::error::{RetrievalError, RetrievalResult};
use crate::logging::structured::LogContext;
use crate::models::record::PrintingRecord;
use crate::models::response::PrintingDetailsResponse;
use crate::models::summary::PrintingSummary;
use crate::normalization::context::NormalizeContext;
use crate::normalization::normalizer::normalize_step_records;
use crate::storage::store::{get_credential, KeyValueStore};

use super::transport::{HttpTransport, ReqwestTransport};

const PRINTING_DETAILS_PATH: &str = "printing-details";
const BY_JOB_PATH: &str = "by-job";

pub struct PrintingDetailsClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    store: Arc<dyn KeyValueStore>,
}

impl PrintingDetailsClient {
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            config,
            transport,
            store,
        }
    }

    /// Client using the reqwest transport configured from `config`.
    pub fn from_config(config: ClientConfig, store: Arc<dyn KeyValueStore>) -> RetrievalResult<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::new(config, Arc::new(transport), store))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// All printing-step records.
    pub async fn fetch_all(&self) -> RetrievalResult<Vec<PrintingRecord>> {
        let ctx = NormalizeContext::all(&self.config.unknown_job_label);
        self.fetch(&[PRINTING_DETAILS_PATH], &ctx, "fetch_all").await
    }

    /// All printing-step records, or an empty list if the fetch fails.
    ///
    /// The failure is logged, not returned.
    pub async fn fetch_all_or_empty(&self) -> Vec<PrintingRecord> {
        match self.fetch_all().await {
            Ok(records) => records,
            Err(e) => {
                log::warn!("FETCH_ALL_SUPPRESSED error={} returning=empty", e);
                Vec::new()
            }
        }
    }

    /// Printing-step records of one job.
    pub async fn fetch_by_job(&self, job_no: &str) -> RetrievalResult<Vec<PrintingRecord>> {
        let ctx = NormalizeContext::for_job(job_no);
        self.fetch(&[PRINTING_DETAILS_PATH, BY_JOB_PATH, job_no], &ctx, "fetch_by_job")
            .await
    }

    /// Summary over all printing-step records.
    pub async fn fetch_statistics(&self) -> RetrievalResult<PrintingSummary> {
        let records = self.fetch_all().await?;
        Ok(summarize(&records))
    }

    /// Summary over the printing-step records of one job.
    pub async fn fetch_job_statistics(&self, job_no: &str) -> RetrievalResult<PrintingSummary> {
        let records = self.fetch_by_job(job_no).await?;
        Ok(summarize(&records))
    }

    async fn fetch(
        &self,
        segments: &[&str],
        ctx: &NormalizeContext,
        operation: &str,
    ) -> RetrievalResult<Vec<PrintingRecord>> {
        let log_ctx = ctx.log_context_for(operation);

        let token = get_credential(self.store.as_ref(), &self.config.credential_key)?
            .ok_or_else(|| {
                log::warn!(
                    "{} FETCH_REJECTED reason=missing_credential key={}",
                    log_ctx,
                    self.config.credential_key
                );
                RetrievalError::MissingCredential {
                    key: self.config.credential_key.clone(),
                }
            })?;

        let url = self.endpoint(segments)?;
        log::debug!("{} FETCH_START url={}", log_ctx, url);

        let response = self.transport.get(&url, &token).await.map_err(|e| {
            log::warn!("{} FETCH_FAILED error={}", log_ctx, e);
            e
        })?;

        if !response.is_success() {
            log::warn!("{} FETCH_FAILED status={}", log_ctx, response.status);
            return Err(RetrievalError::Transport {
                status: response.status,
            });
        }

        let items = parse_body(&response.body, &log_ctx)?;
        let records = normalize_step_records(&items, ctx);

        log::info!("{} FETCH_COMPLETE records={}", log_ctx, records.len());
        Ok(records)
    }

    fn endpoint(&self, segments: &[&str]) -> RetrievalResult<String> {
        let invalid = |reason: String| RetrievalError::InvalidBaseUrl {
            url: self.config.base_url.clone(),
            reason,
        };

        let mut url = Url::parse(&self.config.base_url).map_err(|e| invalid(e.to_string()))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| invalid("URL cannot be a base".to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url.into())
    }
}

/// Unwrap the response envelope into raw step items.
fn parse_body(body: &str, ctx: &LogContext) -> RetrievalResult<Vec<serde_json::Value>> {
    let envelope: PrintingDetailsResponse = serde_json::from_str(body).map_err(|e| {
        log::warn!("{} FORMAT_INVALID reason=json error={}", ctx, e);
        RetrievalError::Format(format!("invalid JSON body: {}", e))
    })?;

    envelope.into_records().map_err(|reason| {
        log::warn!("{} FORMAT_INVALID reason={:?}", ctx, reason);
        RetrievalError::Format(reason)
    })
}
