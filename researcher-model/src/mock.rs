use async_trait::async_trait;
use researcher_core::{Content, Llm, LlmRequest, LlmResponse, ResearcherError, Result};
use std::sync::Mutex;

enum Scripted {
    Response(LlmResponse),
    Error(String),
}

/// Scripted [`Llm`] for tests.
///
/// Replies are replayed in order; once the script runs out the last entry
/// repeats. With an empty script every call returns an empty response.
pub struct MockLlm {
    name: String,
    script: Vec<Scripted>,
    requests: Mutex<Vec<LlmRequest>>,
}

impl MockLlm {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), script: Vec::new(), requests: Mutex::new(Vec::new()) }
    }

    pub fn with_response(mut self, response: LlmResponse) -> Self {
        self.script.push(Scripted::Response(response));
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_response(LlmResponse::new(Content::new("model").with_text(text)))
    }

    /// Fail the matching call with `ResearcherError::Model(message)`.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.script.push(Scripted::Error(message.into()));
        self
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate_content(&self, req: LlmRequest) -> Result<LlmResponse> {
        let index = {
            let mut requests = self
                .requests
                .lock()
                .map_err(|_| ResearcherError::Model("mock request log poisoned".to_string()))?;
            requests.push(req);
            requests.len() - 1
        };

        match self.script.get(index).or_else(|| self.script.last()) {
            Some(Scripted::Response(response)) => Ok(response.clone()),
            Some(Scripted::Error(message)) => Err(ResearcherError::Model(message.clone())),
            None => Ok(LlmResponse::default()),
        }
    }
}
