/// Failure to produce a configured assistant.
///
/// Collaborator errors are flattened into their message text so callers
/// never depend on provider-specific error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResearchAssistantError {
    #[error("{0}")]
    InvalidCredential(String),

    #[error("Failed to create assistant: {0}")]
    Configuration(String),
}

pub const MISSING_API_KEY_MESSAGE: &str = "Groq API key is not provided. Please ensure you've entered your API key in the hosting application.";

impl ResearchAssistantError {
    pub(crate) fn missing_api_key() -> Self {
        Self::InvalidCredential(MISSING_API_KEY_MESSAGE.to_string())
    }

    pub(crate) fn configuration(source: impl std::fmt::Display) -> Self {
        Self::Configuration(source.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ResearchAssistantError>;
