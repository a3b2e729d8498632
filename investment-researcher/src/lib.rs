//! # investment-researcher
//!
//! Configures a Groq-backed [`Assistant`] that turns a stock ticker plus notes
//! from junior researchers into a Goldman-Sachs-style investment report in a
//! fixed Markdown format.
//!
//! ```rust,no_run
//! use investment_researcher::{AssistantSettings, create_investment_research_assistant};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let assistant = create_investment_research_assistant(&AssistantSettings::new("gsk_..."))?;
//! let report = assistant.run("NVDA\n\n<research notes>").await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod provider;
pub mod template;

pub use config::ResearcherConfig;
pub use error::{ResearchAssistantError, Result};
pub use factory::{
    AssistantSettings, create_investment_research_assistant,
    create_investment_research_assistant_with,
};
pub use provider::{GroqProvider, ModelProvider};
pub use researcher_agent::Assistant;
pub use template::{DEFAULT_MODEL, REPORT_FORMAT};
