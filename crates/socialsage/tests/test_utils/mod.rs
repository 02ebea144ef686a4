//! Test utilities for the SocialSage facade.

use async_trait::async_trait;
use socialsage::{
    AspectRatio, ContentService, GeminiError, GeminiErrorKind, GeneratedContent, SocialPosts,
    SocialSageResult, Studio, StudioState, Tone,
};
use std::collections::HashSet;

/// Tiny PNG-like payload (`\x89PNG`) used for every successful image.
pub const PNG_DATA_URL: &str = "data:image/png;base64,iVBORw==";

/// Content service with fixed posts whose image calls fail for chosen prompts.
pub struct FixedService {
    failing_prompts: HashSet<String>,
}

impl FixedService {
    pub fn new() -> Self {
        Self {
            failing_prompts: HashSet::new(),
        }
    }

    pub fn failing(mut self, prompt: &str) -> Self {
        self.failing_prompts.insert(prompt.to_string());
        self
    }
}

pub fn posts() -> SocialPosts {
    SocialPosts::new(
        GeneratedContent::new("Meet our eco cups, built to last.", "facebook prompt"),
        GeneratedContent::new("Sip sustainably #eco", "twitter prompt"),
        GeneratedContent::new("Morning ritual, zero waste #cups", "instagram prompt"),
    )
}

#[async_trait]
impl ContentService for FixedService {
    async fn generate_text(&self, _idea: &str, _tone: Tone) -> SocialSageResult<SocialPosts> {
        Ok(posts())
    }

    async fn generate_image(
        &self,
        prompt: &str,
        _aspect_ratio: AspectRatio,
    ) -> SocialSageResult<String> {
        if self.failing_prompts.contains(prompt) {
            return Err(GeminiError::new(GeminiErrorKind::NoImageGenerated).into());
        }
        Ok(PNG_DATA_URL.to_string())
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }

    fn text_model(&self) -> &str {
        "fixed-text"
    }

    fn image_model(&self) -> &str {
        "fixed-image"
    }
}

/// Runs one generation to completion against `service`.
pub async fn finished_run(service: FixedService) -> (Studio, StudioState) {
    let studio = Studio::new(service);
    studio.generate("Launching eco cup line", Tone::Professional).await;
    let state = studio.wait_for_images().await;
    (studio, state)
}
