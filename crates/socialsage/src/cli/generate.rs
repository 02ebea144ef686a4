//! Generation command handler.

use socialsage::{Idea, SocialSageResult, Tone};
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// Output options for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Overrides the configured output directory.
    pub out_dir: Option<PathBuf>,
    /// Regenerate each failed image once.
    pub retry_failed: bool,
    /// Print the final state as JSON.
    pub json: bool,
}

/// Print every tone the text model can be asked for.
pub fn list_tones() {
    for tone in Tone::iter() {
        println!("{}", tone);
    }
}

/// Run one generation and render the result.
///
/// A blank idea is rejected before any request is made.
#[cfg(feature = "gemini")]
#[tracing::instrument(skip(idea, options), fields(json = options.json))]
pub async fn run_generate(idea: &str, tone: Tone, options: GenerateOptions) -> SocialSageResult<()> {
    use socialsage::{
        GeminiClient, JsonError, SocialSageConfig, Studio, failed_platforms, render_state,
        write_images,
    };

    let idea = Idea::new(idea)?;
    let config = SocialSageConfig::load()?;
    let client = GeminiClient::with_config(config.gemini().clone())?;
    let studio = Studio::new(client);

    studio.generate(idea.as_str(), tone).await;
    let mut state = studio.wait_for_images().await;

    if options.retry_failed {
        let failed = failed_platforms(&state);
        if !failed.is_empty() {
            tracing::info!(count = failed.len(), "Retrying failed images");
            for platform in failed {
                studio.regenerate_image(platform);
            }
            state = studio.wait_for_images().await;
        }
    }

    if options.json {
        let json = serde_json::to_string_pretty(&state)
            .map_err(|e| JsonError::new(e.to_string()))?;
        println!("{}", json);
    } else {
        println!("{}", render_state(&state));
    }

    if let Some(error) = state.error() {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }

    let dir = options
        .out_dir
        .unwrap_or_else(|| config.output().directory().clone());
    for path in write_images(&state, &dir).await? {
        eprintln!("Saved {}", path.display());
    }

    Ok(())
}

#[cfg(not(feature = "gemini"))]
pub async fn run_generate(
    idea: &str,
    _tone: Tone,
    _options: GenerateOptions,
) -> SocialSageResult<()> {
    Idea::new(idea)?;
    eprintln!("Error: No content provider enabled. Rebuild with --features gemini");
    std::process::exit(1);
}
