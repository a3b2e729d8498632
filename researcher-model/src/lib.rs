//! # researcher-model
//!
//! Language-model clients for the investment research assistant.
//!
//! - [`groq::GroqClient`] - Groq's OpenAI-compatible chat completions endpoint
//! - [`MockLlm`] - Scripted model for tests; records every request it receives
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use researcher_model::groq::{GroqClient, GroqConfig};
//!
//! let api_key = std::env::var("GROQ_API_KEY").unwrap();
//! let model = GroqClient::new(GroqConfig::new(api_key, "llama-3.1-70b-versatile")).unwrap();
//! ```

pub mod groq;
pub mod mock;
pub mod retry;

pub use mock::MockLlm;
pub use retry::RetryPolicy;
