//! The remote content service seam.

use async_trait::async_trait;
use socialsage_core::{AspectRatio, SocialPosts, Tone};
use socialsage_error::SocialSageResult;

/// A generative-AI provider able to draft posts and render images.
///
/// Each method is a single request/response round trip. Implementations keep
/// no per-call state and never retry; failures are handed back to the caller
/// unchanged.
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Drafts one post and one image prompt for every platform.
    ///
    /// # Errors
    ///
    /// Fails when the provider errors, returns no text, or returns text that
    /// does not match the three-platform schema.
    async fn generate_text(&self, idea: &str, tone: Tone) -> SocialSageResult<SocialPosts>;

    /// Renders a single image and returns it as a displayable url.
    ///
    /// # Errors
    ///
    /// Fails when the provider errors or returns no image data.
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> SocialSageResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model used for the text phase.
    fn text_model(&self) -> &str;

    /// Model used for the image phase.
    fn image_model(&self) -> &str;
}
