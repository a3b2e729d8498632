use crate::prompt::{self, PromptParts};
use chrono::{DateTime, Local};
use researcher_core::{Content, Llm, LlmRequest, ResearcherError, Result};
use std::sync::Arc;

/// A configured assistant bound to one model.
///
/// Cloning is cheap and the clones share the underlying model client.
#[derive(Clone)]
pub struct Assistant {
    name: String,
    model: Arc<dyn Llm>,
    description: Option<String>,
    instructions: Vec<String>,
    markdown: bool,
    add_datetime_to_instructions: bool,
    add_to_system_prompt: Option<String>,
    debug_mode: bool,
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("name", &self.name)
            .field("model", &self.model.name())
            .field("description", &self.description)
            .field("instructions_count", &self.instructions.len())
            .field("markdown", &self.markdown)
            .field("add_datetime_to_instructions", &self.add_datetime_to_instructions)
            .field("debug_mode", &self.debug_mode)
            .finish()
    }
}

pub struct AssistantBuilder {
    name: String,
    model: Option<Arc<dyn Llm>>,
    description: Option<String>,
    instructions: Vec<String>,
    markdown: bool,
    add_datetime_to_instructions: bool,
    add_to_system_prompt: Option<String>,
    debug_mode: bool,
}

impl AssistantBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: None,
            description: None,
            instructions: Vec::new(),
            markdown: false,
            add_datetime_to_instructions: false,
            add_to_system_prompt: None,
            debug_mode: false,
        }
    }

    pub fn model(mut self, model: Arc<dyn Llm>) -> Self {
        self.model = Some(model);
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Append one instruction.
    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instructions.push(instruction.into());
        self
    }

    /// Append instructions, keeping their order.
    pub fn instructions<I, S>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions.extend(instructions.into_iter().map(Into::into));
        self
    }

    pub fn markdown(mut self, markdown: bool) -> Self {
        self.markdown = markdown;
        self
    }

    pub fn add_datetime_to_instructions(mut self, enabled: bool) -> Self {
        self.add_datetime_to_instructions = enabled;
        self
    }

    pub fn add_to_system_prompt(mut self, text: impl Into<String>) -> Self {
        self.add_to_system_prompt = Some(text.into());
        self
    }

    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }

    pub fn build(self) -> Result<Assistant> {
        if self.name.trim().is_empty() {
            return Err(ResearcherError::Agent("Assistant name is required".to_string()));
        }
        let model =
            self.model.ok_or_else(|| ResearcherError::Agent("Model is required".to_string()))?;

        Ok(Assistant {
            name: self.name,
            model,
            description: self.description,
            instructions: self.instructions,
            markdown: self.markdown,
            add_datetime_to_instructions: self.add_datetime_to_instructions,
            add_to_system_prompt: self.add_to_system_prompt,
            debug_mode: self.debug_mode,
        })
    }
}

impl Assistant {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Model identifier the assistant is bound to.
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Configured instructions, without the markdown/datetime entries added at render time.
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    pub fn markdown(&self) -> bool {
        self.markdown
    }

    pub fn add_datetime_to_instructions(&self) -> bool {
        self.add_datetime_to_instructions
    }

    pub fn additional_system_prompt(&self) -> Option<&str> {
        self.add_to_system_prompt.as_deref()
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn system_prompt(&self) -> String {
        self.system_prompt_at(Local::now())
    }

    /// System prompt with the datetime instruction pinned to `now`.
    pub fn system_prompt_at(&self, now: DateTime<Local>) -> String {
        prompt::render(
            &PromptParts {
                description: self.description.as_deref(),
                instructions: &self.instructions,
                markdown: self.markdown,
                add_datetime: self.add_datetime_to_instructions,
                additional: self.add_to_system_prompt.as_deref(),
            },
            now,
        )
    }

    /// Send `message` with the assembled system prompt and return the reply text.
    #[researcher_telemetry::instrument(
        skip(self, message),
        fields(assistant.name = %self.name, model = %self.model.name())
    )]
    pub async fn run(&self, message: &str) -> Result<String> {
        let system_prompt = self.system_prompt();
        if self.debug_mode {
            researcher_telemetry::debug!(system_prompt = %system_prompt, "assembled system prompt");
        }

        let request = LlmRequest::new(
            self.model.name(),
            vec![
                Content::new("system").with_text(system_prompt),
                Content::new("user").with_text(message),
            ],
        );

        let response = self.model.generate_content(request).await?;
        if self.debug_mode {
            researcher_telemetry::debug!(response = ?response, "model response");
        }

        response
            .text()
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ResearcherError::Agent("Model returned an empty response".to_string()))
    }
}
