//! Environment configuration.

use crate::factory::AssistantSettings;
use crate::template::DEFAULT_MODEL;

pub const API_KEY_ENV: &str = "GROQ_API_KEY";
pub const MODEL_ENV: &str = "GROQ_MODEL";
pub const DEBUG_ENV: &str = "RESEARCHER_DEBUG";
pub const BASE_URL_ENV: &str = "GROQ_BASE_URL";

/// Settings read from the process environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearcherConfig {
    pub settings: AssistantSettings,
    pub base_url: Option<String>,
}

impl ResearcherConfig {
    /// Load `.env`, then read the environment.
    ///
    /// A missing key is left empty so the factory reports it as a credential error.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let model = lookup(MODEL_ENV)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let debug_mode = lookup(DEBUG_ENV).and_then(|v| parse_bool(&v)).unwrap_or(true);

        Self {
            settings: AssistantSettings {
                model,
                api_key: lookup(API_KEY_ENV).unwrap_or_default(),
                debug_mode,
            },
            base_url: lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}
