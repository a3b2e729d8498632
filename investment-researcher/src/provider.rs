use researcher_core::{Llm, Result};
use researcher_model::groq::{GroqClient, GroqConfig};
use std::sync::Arc;

/// Constructs model clients for the factory.
///
/// The factory only talks to this trait, so tests can swap in a provider that
/// counts calls or fails on demand.
pub trait ModelProvider: Send + Sync {
    fn create_model(&self, model: &str, api_key: &str) -> Result<Arc<dyn Llm>>;
}

/// Builds [`GroqClient`]s, optionally against a non-default endpoint.
#[derive(Debug, Clone, Default)]
pub struct GroqProvider {
    base_url: Option<String>,
}

impl GroqProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

impl ModelProvider for GroqProvider {
    fn create_model(&self, model: &str, api_key: &str) -> Result<Arc<dyn Llm>> {
        let mut config = GroqConfig::new(api_key, model);
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        Ok(Arc::new(GroqClient::new(config)?))
    }
}
