// src/core/service_client.rs
//! HTTP client for the resume analysis service

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::sync::Arc;
use tracing::{error, info, trace};

use super::config_manager::ServiceConfig;
use super::endpoints::{Endpoint, HELLO_ENDPOINT};
use crate::error::AnalysisError;
use crate::types::{AnalysisInput, AnalysisResult, HelloResponse, TargetRole, TextAnalysisRequest};
use crate::utils;

/// One round trip to an analysis endpoint. The response body is returned
/// as decoded; interpreting its `error` field is left to the caller.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(
        &self,
        endpoint: Endpoint,
        input: &AnalysisInput,
        role: TargetRole,
    ) -> Result<AnalysisResult, AnalysisError>;
}

#[async_trait]
impl<T: AnalysisService + ?Sized> AnalysisService for Arc<T> {
    async fn analyze(
        &self,
        endpoint: Endpoint,
        input: &AnalysisInput,
        role: TargetRole,
    ) -> Result<AnalysisResult, AnalysisError> {
        (**self).analyze(endpoint, input, role).await
    }
}

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create new service client with configuration
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Health check against `GET /hello`
    pub async fn hello(&self) -> Result<HelloResponse> {
        let url = utils::endpoint_url(&self.base_url, HELLO_ENDPOINT);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<HelloResponse>()
                .await
                .context("Failed to parse JSON response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("HTTP {} error: {}", status, error_text)
        }
    }

    fn build_request(
        &self,
        url: &str,
        endpoint: Endpoint,
        input: &AnalysisInput,
        role: TargetRole,
    ) -> Result<reqwest::RequestBuilder, AnalysisError> {
        match (endpoint.accepts_file(), input) {
            (true, AnalysisInput::File(file)) => {
                let part = Part::bytes(file.bytes.clone())
                    .file_name(file.name.clone())
                    .mime_str(file.content_type())?;
                let form = Form::new()
                    .part("file", part)
                    .text("target_role", role.label());
                Ok(self.client.post(url).multipart(form))
            }
            (false, AnalysisInput::Text(text)) => {
                let payload = TextAnalysisRequest {
                    text,
                    target_role: role,
                };
                Ok(self.client.post(url).json(&payload))
            }
            (_, input) => Err(AnalysisError::Validation(format!(
                "{} does not accept {} input",
                endpoint,
                input.kind()
            ))),
        }
    }
}

#[async_trait]
impl AnalysisService for ServiceClient {
    async fn analyze(
        &self,
        endpoint: Endpoint,
        input: &AnalysisInput,
        role: TargetRole,
    ) -> Result<AnalysisResult, AnalysisError> {
        let url = utils::endpoint_url(&self.base_url, endpoint.path());
        let request = self.build_request(&url, endpoint, input, role)?;

        info!("Calling analysis service: {} ({} input, role {})", url, input.kind(), role);

        let response = request.send().await.map_err(|e| {
            error!("Analysis request to {} failed: {}", url, e);
            AnalysisError::Transport(e.to_string())
        })?;

        let status = response.status();
        trace!("Response status: {}", status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Analysis service error response {}: {}", status, error_text);
            return Err(AnalysisError::Service {
                status: status.as_u16(),
            });
        }

        let response_text = response.text().await?;
        trace!("Raw analysis response: {}", response_text);

        let result: AnalysisResult = serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse analysis response: {}", e);
            AnalysisError::from(e)
        })?;

        Ok(result)
    }
}
