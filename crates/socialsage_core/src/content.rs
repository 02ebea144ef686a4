//! Text-phase output: one post and one image prompt per platform.

use crate::Platform;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A drafted post together with the prompt for its image.
///
/// # Examples
///
/// ```
/// use socialsage_core::GeneratedContent;
///
/// let content = GeneratedContent::new("New cups!", "A ceramic cup on moss");
/// let json = serde_json::to_value(&content).unwrap();
/// assert_eq!(json["imagePrompt"], "A ceramic cup on moss");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    /// Post body, ready to paste.
    text: String,
    /// Prompt handed to the image model.
    image_prompt: String,
}

impl GeneratedContent {
    /// Creates a post from its text and image prompt.
    pub fn new(text: impl Into<String>, image_prompt: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image_prompt: image_prompt.into(),
        }
    }
}

/// The structured answer of the text model.
///
/// All three platforms are required; a response missing any of them fails
/// to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct SocialPosts {
    /// Facebook post
    facebook: GeneratedContent,
    /// Twitter / X post
    twitter: GeneratedContent,
    /// Instagram post
    instagram: GeneratedContent,
}

impl SocialPosts {
    /// Bundles the three posts of a run.
    pub fn new(
        facebook: GeneratedContent,
        twitter: GeneratedContent,
        instagram: GeneratedContent,
    ) -> Self {
        Self {
            facebook,
            twitter,
            instagram,
        }
    }

    /// The post drafted for `platform`.
    pub fn for_platform(&self, platform: Platform) -> &GeneratedContent {
        match platform {
            Platform::Facebook => &self.facebook,
            Platform::Twitter => &self.twitter,
            Platform::Instagram => &self.instagram,
        }
    }
}
