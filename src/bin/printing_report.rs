//! Fetch printing-step records and print them with their summary as JSON.
//!
//! Configuration comes from the environment (see `printlens_core::config`).
//! The access token is read from the JSON store at `PRINTLENS_STORE_PATH`
//! (default `printlens-store.json`). Set `PRINTLENS_JOB_NO` to restrict the
//! report to one job.

use std::sync::Arc;

use anyhow::Context;
use serde_json::json;

use printlens_core::{init_logger, summarize, ClientConfig, JsonFileStore, PrintingDetailsClient};

const ENV_STORE_PATH: &str = "PRINTLENS_STORE_PATH";
const ENV_JOB_NO: &str = "PRINTLENS_JOB_NO";
const DEFAULT_STORE_PATH: &str = "printlens-store.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let config = ClientConfig::from_env();
    let store_path = std::env::var(ENV_STORE_PATH).unwrap_or_else(|_| DEFAULT_STORE_PATH.to_string());
    let store = Arc::new(JsonFileStore::new(&store_path));

    log::info!(
        "REPORT_START base_url={} store={}",
        config.base_url,
        store_path
    );

    let client = PrintingDetailsClient::from_config(config, store)
        .context("failed to build printing-details client")?;

    let job_no = std::env::var(ENV_JOB_NO).ok().filter(|j| !j.trim().is_empty());
    let records = match &job_no {
        Some(job) => client
            .fetch_by_job(job)
            .await
            .with_context(|| format!("failed to fetch printing details for job {}", job))?,
        None => client
            .fetch_all()
            .await
            .context("failed to fetch printing details")?,
    };

    let summary = summarize(&records);
    let report = json!({
        "jobNo": job_no,
        "summary": summary,
        "records": records,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
