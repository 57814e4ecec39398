use super::response::extract_content;
use super::{GenerationService, RequestBody};
use crate::config::Config;
use crate::error::{CreatorError, GenerationError};
use crate::ui::display_verbose;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

/// Chat-completions client for OpenRouter or any OpenAI-compatible endpoint.
pub struct OpenRouterClient {
    http: reqwest::Client,
    api_endpoint: String,
    model: String,
    verbose: bool,
}

impl OpenRouterClient {
    pub fn new(
        api_key: &str,
        api_endpoint: &str,
        model: &str,
        request_timeout: u64,
    ) -> Result<Self, CreatorError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e| {
                CreatorError::Config(format!("Invalid authorization header: {}", e))
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(request_timeout))
            .build()
            .map_err(|e| CreatorError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_endpoint: api_endpoint.to_string(),
            model: model.to_string(),
            verbose: false,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, CreatorError> {
        let api_key = config.require_api_key()?;
        let client = Self::new(
            api_key,
            &config.api_endpoint,
            &config.model,
            config.request_timeout,
        )?;
        Ok(client.with_verbose(config.verbose))
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl GenerationService for OpenRouterClient {
    async fn generate(&self, instruction: &str) -> Result<String, GenerationError> {
        let request_body = RequestBody::for_instruction(&self.model, instruction);

        if self.verbose {
            display_verbose(&format!(
                "POST {} (model={}, {} chars)",
                self.api_endpoint,
                self.model,
                instruction.len()
            ));
        }

        let response = self
            .http
            .post(&self.api_endpoint)
            .json(&request_body)
            .send()
            .await?;

        if self.verbose {
            display_verbose(&format!("Response status: {}", response.status()));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenerationError::new(format!(
                "API error (status {}): {}",
                status, error_text
            )));
        }

        let response_text = response.text().await?;
        let response_json: Value = serde_json::from_str(&response_text)?;
        extract_content(&response_json)
    }
}
