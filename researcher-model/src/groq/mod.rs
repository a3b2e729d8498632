//! Groq provider.
//!
//! Groq serves LLaMA-family models behind an OpenAI-compatible
//! `/chat/completions` endpoint. Requests are sent non-streaming; retryable
//! failures (rate limits, 5xx, timeouts) go through [`crate::retry`].
//!
//! # Example
//!
//! ```rust,ignore
//! use researcher_model::groq::{GroqClient, GroqConfig};
//!
//! let client = GroqClient::new(GroqConfig::new(
//!     std::env::var("GROQ_API_KEY").unwrap(),
//!     "llama-3.1-70b-versatile",
//! ))?;
//! ```

mod client;
mod config;
mod convert;

pub use client::GroqClient;
pub use config::{DEFAULT_GROQ_MODEL, DEFAULT_TIMEOUT_SECS, GROQ_API_BASE, GroqConfig};
