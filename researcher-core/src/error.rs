#[derive(Debug, thiserror::Error)]
pub enum ResearcherError {
    #[error("Model error: {0}")]
    Model(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResearcherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ResearcherError::Model("invalid api key".to_string());
        assert_eq!(err.to_string(), "Model error: invalid api key");

        let err = ResearcherError::Agent("Model is required".to_string());
        assert_eq!(err.to_string(), "Agent error: Model is required");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "notes.md not found");
        let err: ResearcherError = io_err.into();
        assert!(matches!(err, ResearcherError::Io(_)));
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ResearcherError = serde_err.into();
        assert!(matches!(err, ResearcherError::Serde(_)));
    }
}
