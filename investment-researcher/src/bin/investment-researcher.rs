//! Generate an investment report for one ticker.
//!
//! Run: GROQ_API_KEY=your_key cargo run -p investment-researcher -- NVDA --research notes.md

use anyhow::{Context, Result};
use clap::Parser;
use investment_researcher::{
    GroqProvider, ResearcherConfig, create_investment_research_assistant_with,
};
use researcher_telemetry::Level;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

#[derive(Parser, Debug)]
#[command(name = "investment-researcher")]
#[command(about = "Write an investment report from junior researchers' notes", long_about = None)]
struct Cli {
    /// Stock ticker or company name the report is about
    ticker: String,

    /// File with the junior researchers' notes (reads stdin when omitted)
    #[arg(short, long)]
    research: Option<PathBuf>,

    /// Groq model identifier
    #[arg(short, long)]
    model: Option<String>,

    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the Groq API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Disable the assistant's debug logging
    #[arg(long)]
    no_debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ResearcherConfig::from_env();
    if let Some(model) = cli.model {
        config.settings.model = model;
    }
    if let Some(api_key) = cli.api_key {
        config.settings.api_key = api_key;
    }
    if cli.no_debug {
        config.settings.debug_mode = false;
    }
    if cli.base_url.is_some() {
        config.base_url = cli.base_url;
    }

    let level = if config.settings.debug_mode { Level::DEBUG } else { Level::INFO };
    researcher_telemetry::init_telemetry_with_level("investment-researcher", level)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let mut provider = GroqProvider::new();
    if let Some(base_url) = &config.base_url {
        provider = provider.with_base_url(base_url.clone());
    }

    let assistant = create_investment_research_assistant_with(&config.settings, &provider)?;

    let notes = match &cli.research {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read research notes from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("failed to read research notes from stdin")?;
            buffer
        }
    };

    let prompt = format!("{}\n\n{}", cli.ticker.trim(), notes.trim());
    let report = assistant.run(&prompt).await.context("report generation failed")?;
    println!("{report}");

    Ok(())
}
