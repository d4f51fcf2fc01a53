use crate::domain::model::HttpResponse;
use crate::domain::ports::HttpFetcher;
use crate::utils::error::{IssError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| IssError::ConfigValidationError {
                field: "http.client".to_string(),
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| IssError::transport(url, e))?;

        let status = response.status().as_u16();
        tracing::debug!("API response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| IssError::transport(url, e))?;

        Ok(HttpResponse { status, body })
    }
}
