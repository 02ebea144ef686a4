//! SocialSage CLI binary.
//!
//! This binary drafts posts for every platform from one idea, renders their
//! images and saves them to disk.

use clap::Parser;
use socialsage::observability::{ObservabilityConfig, init_observability_with_config};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, GenerateOptions, list_tones, run_generate};

    // GEMINI_API_KEY may live in .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut observability = ObservabilityConfig::new().with_json_logs(cli.json_logs);
    if cli.verbose {
        observability = observability.with_log_level("debug");
    }
    init_observability_with_config(observability)?;

    match cli.command {
        Commands::Generate {
            idea,
            tone,
            out_dir,
            retry_failed,
            json,
        } => {
            let options = GenerateOptions {
                out_dir,
                retry_failed,
                json,
            };
            run_generate(&idea, tone, options).await?;
        }

        Commands::Tones => list_tones(),
    }

    Ok(())
}
