//! Core data types for the SocialSage content studio.
//!
//! This crate provides the data model shared by the content service adapters,
//! the generation orchestrator and any renderer: tones, platforms, generated
//! posts, and the per-platform run state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod content;
mod idea;
mod image;
mod platform;
mod state;
mod tone;

pub use content::{GeneratedContent, SocialPosts};
pub use idea::Idea;
pub use image::{ImageData, ImageState, ImageStatus};
pub use platform::{AspectRatio, Platform};
pub use state::{PlatformResult, RunState};
pub use tone::Tone;
