//! Wire types for Groq's OpenAI-compatible chat completions API.

use researcher_core::{Content, FinishReason, LlmRequest, LlmResponse, UsageMetadata};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub stream: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Option<Message>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

pub fn content_to_message(content: &Content) -> Message {
    let role = match content.role.as_str() {
        "model" | "assistant" => "assistant",
        other => other,
    };

    Message { role: role.to_string(), content: content.text() }
}

/// Build the request body. Per-request settings win over client defaults.
pub fn build_request(
    request: &LlmRequest,
    model: &str,
    default_max_tokens: Option<u32>,
    default_temperature: Option<f32>,
) -> ChatCompletionRequest {
    let config = request.config.as_ref();

    ChatCompletionRequest {
        model: model.to_string(),
        messages: request.contents.iter().map(content_to_message).collect(),
        temperature: config.and_then(|c| c.temperature).or(default_temperature),
        top_p: config.and_then(|c| c.top_p),
        max_tokens: config.and_then(|c| c.max_output_tokens).or(default_max_tokens),
        stream: false,
    }
}

fn finish_reason(raw: &str) -> FinishReason {
    match raw {
        "length" => FinishReason::MaxTokens,
        "content_filter" => FinishReason::Safety,
        _ => FinishReason::Stop,
    }
}

pub fn from_response(response: &ChatCompletionResponse) -> LlmResponse {
    let choice = response.choices.first();

    let content = choice
        .and_then(|c| c.message.as_ref())
        .and_then(|m| m.content.as_deref())
        .filter(|text| !text.is_empty())
        .map(|text| Content::new("model").with_text(text));

    LlmResponse {
        content,
        usage_metadata: response.usage.as_ref().map(|u| UsageMetadata {
            prompt_token_count: u.prompt_tokens,
            candidates_token_count: u.completion_tokens,
            total_token_count: u.total_tokens,
        }),
        finish_reason: choice.and_then(|c| c.finish_reason.as_deref()).map(finish_reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use researcher_core::GenerateContentConfig;

    #[test]
    fn test_role_mapping() {
        let msg = content_to_message(&Content::new("model").with_text("hi"));
        assert_eq!(msg.role, "assistant");
        let msg = content_to_message(&Content::new("system").with_text("be brief"));
        assert_eq!(msg.role, "system");
        assert_eq!(msg.content.as_deref(), Some("be brief"));
    }

    #[test]
    fn test_build_request_prefers_request_config() {
        let request = LlmRequest::new("ignored", vec![Content::new("user").with_text("AMD")])
            .with_config(GenerateContentConfig {
                temperature: Some(0.1),
                top_p: None,
                max_output_tokens: Some(512),
            });

        let body = build_request(&request, "llama-3.1-70b-versatile", Some(4096), Some(0.9));
        assert_eq!(body.model, "llama-3.1-70b-versatile");
        assert_eq!(body.temperature, Some(0.1));
        assert_eq!(body.max_tokens, Some(512));
        assert!(!body.stream);

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("top_p").is_none());
    }

    #[test]
    fn test_build_request_falls_back_to_client_defaults() {
        let request = LlmRequest::new("m", vec![]);
        let body = build_request(&request, "m", Some(4096), Some(0.9));
        assert_eq!(body.max_tokens, Some(4096));
        assert_eq!(body.temperature, Some(0.9));
    }

    #[test]
    fn test_from_response() {
        let raw = serde_json::json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1,
            "model": "llama-3.1-70b-versatile",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "## NVIDIA: Investment Report" },
                "finish_reason": "length"
            }],
            "usage": { "prompt_tokens": 900, "completion_tokens": 100, "total_tokens": 1000 }
        });
        let parsed: ChatCompletionResponse = serde_json::from_value(raw).unwrap();
        let response = from_response(&parsed);

        assert_eq!(response.text().as_deref(), Some("## NVIDIA: Investment Report"));
        assert_eq!(response.finish_reason, Some(FinishReason::MaxTokens));
        assert_eq!(response.usage_metadata.unwrap().total_token_count, 1000);
    }

    #[test]
    fn test_from_response_without_choices() {
        let parsed: ChatCompletionResponse =
            serde_json::from_value(serde_json::json!({ "choices": [] })).unwrap();
        let response = from_response(&parsed);
        assert!(response.content.is_none());
        assert!(response.finish_reason.is_none());
    }
}
