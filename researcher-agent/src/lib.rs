//! # researcher-agent
//!
//! An [`Assistant`] binds a language model to a persona: a description, an
//! ordered instruction list and an extra block of system-prompt text. Each
//! [`Assistant::run`] is a single stateless round-trip to the model.
//!
//! ```rust,ignore
//! use researcher_agent::AssistantBuilder;
//! use std::sync::Arc;
//!
//! let assistant = AssistantBuilder::new("analyst")
//!     .model(Arc::new(model))
//!     .description("You are a careful equity analyst.")
//!     .instruction("Always cite units and currency.")
//!     .markdown(true)
//!     .build()?;
//!
//! let report = assistant.run("AAPL").await?;
//! ```

mod assistant;
mod prompt;

pub use assistant::{Assistant, AssistantBuilder};
pub use prompt::{DATETIME_INSTRUCTION_PREFIX, MARKDOWN_INSTRUCTION};
