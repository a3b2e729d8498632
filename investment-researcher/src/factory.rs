use crate::error::{ResearchAssistantError, Result};
use crate::provider::{GroqProvider, ModelProvider};
use crate::template::{ASSISTANT_NAME, DEFAULT_MODEL, DESCRIPTION, INSTRUCTIONS, REPORT_FORMAT};
use researcher_agent::{Assistant, AssistantBuilder};
use researcher_telemetry::{error, info};

/// Inputs of [`create_investment_research_assistant`].
#[derive(Clone, PartialEq, Eq)]
pub struct AssistantSettings {
    pub model: String,
    pub api_key: String,
    pub debug_mode: bool,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self { model: DEFAULT_MODEL.to_string(), api_key: String::new(), debug_mode: true }
    }
}

impl std::fmt::Debug for AssistantSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantSettings")
            .field("model", &self.model)
            .field("api_key", &if self.api_key.is_empty() { "<empty>" } else { "<redacted>" })
            .field("debug_mode", &self.debug_mode)
            .finish()
    }
}

impl AssistantSettings {
    /// Default model and debug mode with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), ..Self::default() }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }
}

/// Build the investment research assistant backed by Groq.
pub fn create_investment_research_assistant(settings: &AssistantSettings) -> Result<Assistant> {
    create_investment_research_assistant_with(settings, &GroqProvider::new())
}

/// Build the investment research assistant with a caller-supplied model provider.
///
/// Only emptiness of the key is checked here; Groq decides whether it is valid.
pub fn create_investment_research_assistant_with(
    settings: &AssistantSettings,
    provider: &dyn ModelProvider,
) -> Result<Assistant> {
    if settings.api_key.is_empty() {
        error!("API key is empty");
        return Err(ResearchAssistantError::missing_api_key());
    }

    build_assistant(settings, provider).map_err(|e| {
        error!(error = %e, "Error creating assistant");
        ResearchAssistantError::configuration(e)
    })
}

fn build_assistant(
    settings: &AssistantSettings,
    provider: &dyn ModelProvider,
) -> researcher_core::Result<Assistant> {
    info!(model = %settings.model, "Attempting to create Groq LLM");
    provider.create_model(&settings.model, &settings.api_key)?;
    info!("Groq LLM created successfully");

    // The assistant owns its own client instance.
    let model = provider.create_model(&settings.model, &settings.api_key)?;
    let assistant = AssistantBuilder::new(ASSISTANT_NAME)
        .model(model)
        .description(DESCRIPTION)
        .instructions(INSTRUCTIONS)
        .markdown(true)
        .add_datetime_to_instructions(true)
        .add_to_system_prompt(REPORT_FORMAT)
        .debug_mode(settings.debug_mode)
        .build()?;
    info!("Assistant created successfully");

    Ok(assistant)
}
