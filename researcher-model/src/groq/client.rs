//! Groq client implementation.

use super::config::GroqConfig;
use super::convert::{self, ChatCompletionResponse};
use crate::retry::{AttemptError, RetryPolicy, send_with_retry};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use researcher_core::{Llm, LlmRequest, LlmResponse, ResearcherError, Result};
use std::time::Duration;

/// Groq client for LLaMA-family models.
///
/// Building a client only validates the configuration and prepares the HTTP
/// connection pool; the API key is first checked by Groq on the first request.
///
/// # Example
///
/// ```rust,ignore
/// use researcher_model::groq::{GroqClient, GroqConfig};
///
/// let client = GroqClient::new(GroqConfig::new(
///     std::env::var("GROQ_API_KEY").unwrap(),
///     "llama-3.1-70b-versatile",
/// ))?;
/// ```
pub struct GroqClient {
    client: Client,
    config: GroqConfig,
    retry_policy: RetryPolicy,
}

impl std::fmt::Debug for GroqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqClient")
            .field("config", &self.config)
            .field("retry_policy", &self.retry_policy)
            .finish()
    }
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Result<Self> {
        if config.model.trim().is_empty() {
            return Err(ResearcherError::Config("Groq model name must not be empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ResearcherError::Model(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config, retry_policy: RetryPolicy::default() })
    }

    #[must_use]
    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    pub fn config(&self) -> &GroqConfig {
        &self.config
    }

    fn api_url(&self) -> String {
        format!("{}/chat/completions", self.config.effective_base_url().trim_end_matches('/'))
    }
}

#[async_trait]
impl Llm for GroqClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn generate_content(&self, request: LlmRequest) -> Result<LlmResponse> {
        let api_url = self.api_url();
        let body = convert::build_request(
            &request,
            &self.config.model,
            self.config.max_tokens,
            self.config.temperature,
        );

        researcher_telemetry::debug!(
            model = %body.model,
            messages = body.messages.len(),
            "sending Groq chat completion request"
        );

        let response = send_with_retry(&self.retry_policy, || {
            let request = self
                .client
                .post(&api_url)
                .bearer_auth(&self.config.api_key)
                .json(&body);
            async move {
                let response = request.send().await?;

                let status = response.status();
                if !status.is_success() {
                    let retry_after = retry_after(response.headers());
                    let body = response.text().await.unwrap_or_default();
                    return Err(AttemptError::Status { status, body, retry_after });
                }

                Ok(response)
            }
        })
        .await?;

        let response_text = response
            .text()
            .await
            .map_err(|e| ResearcherError::Model(format!("Failed to read response: {}", e)))?;

        let chat_response: ChatCompletionResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                ResearcherError::Model(format!(
                    "Failed to parse response: {} - {}",
                    e, response_text
                ))
            })?;

        let response = convert::from_response(&chat_response);
        if let Some(usage) = &response.usage_metadata {
            researcher_telemetry::debug!(
                prompt_tokens = usage.prompt_token_count,
                completion_tokens = usage.candidates_token_count,
                "Groq usage"
            );
        }
        Ok(response)
    }
}

/// `retry-after` in delta-seconds form; HTTP dates are ignored.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
