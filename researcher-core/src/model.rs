use crate::{Result, types::Content};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A hosted language-model client.
///
/// Implementations are configured once (model identifier, credentials) and
/// then shared behind an `Arc`. Construction must not perform network I/O;
/// the first request is where connectivity and credentials are exercised.
#[async_trait]
pub trait Llm: Send + Sync {
    /// The model identifier this client is bound to.
    fn name(&self) -> &str;
    async fn generate_content(&self, req: LlmRequest) -> Result<LlmResponse>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    pub model: String,
    pub contents: Vec<Content>,
    pub config: Option<GenerateContentConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateContentConfig {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmResponse {
    pub content: Option<Content>,
    pub usage_metadata: Option<UsageMetadata>,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageMetadata {
    pub prompt_token_count: u32,
    pub candidates_token_count: u32,
    pub total_token_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Other,
}

impl LlmRequest {
    pub fn new(model: impl Into<String>, contents: Vec<Content>) -> Self {
        Self { model: model.into(), contents, config: None }
    }

    /// Set the generation config.
    pub fn with_config(mut self, config: GenerateContentConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Text of the first `system` message, if any.
    pub fn system_instruction(&self) -> Option<String> {
        self.contents.iter().find(|c| c.role == "system").and_then(Content::text)
    }
}

impl LlmResponse {
    pub fn new(content: Content) -> Self {
        Self { content: Some(content), usage_metadata: None, finish_reason: Some(FinishReason::Stop) }
    }

    /// Text of the response content, if any.
    pub fn text(&self) -> Option<String> {
        self.content.as_ref().and_then(Content::text)
    }
}
