//! SocialSage - social media content studio
//!
//! SocialSage turns one product idea and a tone of voice into three
//! platform-specific posts (Facebook, Twitter / X, Instagram), then renders a
//! matching image for each post at that platform's aspect ratio.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use socialsage::{GeminiClient, Idea, Studio, Tone};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let studio = Studio::new(GeminiClient::new()?);
//!     let idea = Idea::new("Launching eco cup line")?;
//!
//!     studio.generate(idea.as_str(), Tone::Professional).await;
//!     let state = studio.wait_for_images().await;
//!     println!("{}", socialsage::render_state(&state));
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `gemini` - Google Gemini text and Imagen image generation (default)
//! - `api` - Marker feature that enables tests against the live API
//!
//! # Architecture
//!
//! SocialSage is organized as a workspace with focused crates:
//!
//! - `socialsage_error` - Error types
//! - `socialsage_core` - Data model (tones, platforms, posts, image slots)
//! - `socialsage_interface` - `ContentService` trait definition
//! - `socialsage_models` - Provider implementations and configuration
//! - `socialsage_studio` - Generation orchestrator
//!
//! This crate (`socialsage`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Re-export core crates (always available)
pub use socialsage_core::*;
pub use socialsage_error::*;
pub use socialsage_interface::*;
pub use socialsage_studio::*;

// Re-export optional crates based on features
#[cfg(feature = "gemini")]
pub use socialsage_models::*;

pub mod observability;

mod output;

pub use output::{failed_platforms, render_state, write_images};
