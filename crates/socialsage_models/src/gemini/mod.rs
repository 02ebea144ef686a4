//! Google Gemini REST API integration.
//!
//! Posts are drafted with `generateContent` under a fixed response schema;
//! images are rendered by an Imagen model through `predict`.

mod client;
mod dto;
mod prompt;

pub use client::GeminiClient;
pub use dto::{GenerateContentRequest, GenerateContentResponse, PredictRequest, PredictResponse};
pub use prompt::{posts_schema, text_prompt};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, socialsage_error::GeminiError>;
