//! Generative-AI provider integrations for SocialSage.
//!
//! Each provider implements [`socialsage_interface::ContentService`] behind
//! its own feature flag.
//!
//! # Available Providers
//!
//! - **Gemini** (Google) - Enable with `gemini` feature (on by default)
//!
//! # Example
//!
//! ```no_run
//! use socialsage_core::Tone;
//! use socialsage_interface::ContentService;
//! use socialsage_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let posts = client.generate_text("Launching eco cup line", Tone::Professional).await?;
//! println!("{}", posts.twitter().text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{GeminiConfig, GeminiConfigBuilder, OutputConfig, SocialSageConfig};

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    GeminiClient, GenerateContentRequest, GenerateContentResponse, PredictRequest,
    PredictResponse, posts_schema, text_prompt,
};
