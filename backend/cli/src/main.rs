mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use deckforge_deck::JsonDeckWriter;
use deckforge_pipeline::Orchestrator;
use deckforge_planner::providers::OpenAiProvider;
use deckforge_planner::{GenerationOptions, OutlinePlanner, SectionExpander, StructuredClient};

use config::Config;

#[derive(Parser)]
#[command(name = "deckforge")]
#[command(about = "Deckforge — report-to-slide-deck generation pipeline")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a presentation from a report
    Generate {
        /// File containing the user's requirements text
        #[arg(short, long)]
        requirements: PathBuf,
        /// File containing the source report
        #[arg(short = 'p', long)]
        report: PathBuf,
        /// Model identifier (overrides DECKFORGE_MODEL)
        #[arg(short, long)]
        model: Option<String>,
        /// Output file path; derived from the deck title when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            requirements,
            report,
            model,
            output,
        } => {
            let requirements_text = std::fs::read_to_string(&requirements)
                .with_context(|| format!("reading {}", requirements.display()))?;
            let report_text = std::fs::read_to_string(&report)
                .with_context(|| format!("reading {}", report.display()))?;

            let orchestrator = build_orchestrator(&config, model)?;
            let path = orchestrator
                .build(&requirements_text, &report_text, output.as_deref())
                .await?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn build_orchestrator(config: &Config, model_override: Option<String>) -> Result<Orchestrator> {
    let Some(api_key) = config.api_key.clone() else {
        bail!("DECKFORGE_API_KEY is not set");
    };

    let provider =
        Arc::new(OpenAiProvider::new(api_key).with_base_url(config.base_url.clone()));

    let mut options = GenerationOptions::new(model_override.unwrap_or_else(|| config.model.clone()));
    options.max_tokens = config.max_tokens;
    options.temperature = config.temperature;
    options.report_char_limit = config.report_char_limit;
    options.timeout = config.request_timeout();

    info!(
        model = %options.model,
        report_char_limit = ?options.report_char_limit,
        "Pipeline configured"
    );

    let client = StructuredClient::new(provider, options);
    Ok(Orchestrator::new(
        OutlinePlanner::new(client.clone()),
        SectionExpander::new(client),
        Box::new(JsonDeckWriter),
        &config.output_dir,
    ))
}
