//! HTTP transport.
//!
//! The client only needs "GET this URL with this bearer token and hand me
//! the status and body". [`ReqwestTransport`] does that over the network;
//! tests substitute their own implementation.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::RetrievalResult;

/// Raw HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str, bearer_token: &str) -> RetrievalResult<TransportResponse>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> RetrievalResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, bearer_token: &str) -> RetrievalResult<TransportResponse> {
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", bearer_token))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
