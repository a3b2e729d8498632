//! # researcher-core
//!
//! Core traits and types shared by the investment research assistant crates.
//!
//! ## Overview
//!
//! - [`Llm`] - The interface every hosted language-model client implements
//! - [`Content`] / [`Part`] - Conversation messages exchanged with a model
//! - [`LlmRequest`] / [`LlmResponse`] - One round-trip to a model
//! - [`ResearcherError`] / [`Result`] - Unified error handling
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use researcher_core::{Content, Llm, LlmRequest};
//!
//! async fn ask(model: &dyn Llm) -> researcher_core::Result<String> {
//!     let request = LlmRequest::new(
//!         model.name(),
//!         vec![Content::new("user").with_text("Summarize NVDA in one line")],
//!     );
//!     let response = model.generate_content(request).await?;
//!     Ok(response.text().unwrap_or_default())
//! }
//! ```

pub mod error;
pub mod model;
pub mod types;

pub use error::{ResearcherError, Result};
pub use model::{FinishReason, GenerateContentConfig, Llm, LlmRequest, LlmResponse, UsageMetadata};
pub use types::{Content, Part};
