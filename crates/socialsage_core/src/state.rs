//! Per-run state: one slot per platform.

use crate::{GeneratedContent, ImageState, Platform, SocialPosts};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A platform's post paired with the status of its image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlatformResult {
    /// Drafted post, absent until the text phase succeeds.
    content: Option<GeneratedContent>,
    /// Image status for this platform.
    image: ImageState,
}

impl PlatformResult {
    /// A slot whose post is ready and whose image is being generated.
    pub fn pending(content: GeneratedContent) -> Self {
        Self {
            content: Some(content),
            image: ImageState::loading(),
        }
    }

    /// Mutable access to the image half of the slot.
    pub fn image_mut(&mut self) -> &mut ImageState {
        &mut self.image
    }
}

/// Results of a run, keyed by platform.
///
/// Every platform always has a slot. Posts are only ever installed all at
/// once through [`RunState::from_posts`], so either every slot has content
/// or none does.
///
/// # Examples
///
/// ```
/// use socialsage_core::{GeneratedContent, Platform, RunState, SocialPosts};
///
/// let empty = RunState::default();
/// assert!(!empty.has_content());
///
/// let post = GeneratedContent::new("text", "prompt");
/// let posts = SocialPosts::new(post.clone(), post.clone(), post);
/// let run = RunState::from_posts(&posts);
/// assert!(run.has_content());
/// assert!(run.get(Platform::Twitter).image().is_loading());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    facebook: PlatformResult,
    twitter: PlatformResult,
    instagram: PlatformResult,
}

impl RunState {
    /// Installs the posts of a finished text phase with every image loading.
    pub fn from_posts(posts: &SocialPosts) -> Self {
        Self {
            facebook: PlatformResult::pending(posts.facebook().clone()),
            twitter: PlatformResult::pending(posts.twitter().clone()),
            instagram: PlatformResult::pending(posts.instagram().clone()),
        }
    }

    /// The slot for `platform`.
    pub fn get(&self, platform: Platform) -> &PlatformResult {
        match platform {
            Platform::Facebook => &self.facebook,
            Platform::Twitter => &self.twitter,
            Platform::Instagram => &self.instagram,
        }
    }

    /// Mutable access to exactly one slot.
    pub fn get_mut(&mut self, platform: Platform) -> &mut PlatformResult {
        match platform {
            Platform::Facebook => &mut self.facebook,
            Platform::Twitter => &mut self.twitter,
            Platform::Instagram => &mut self.instagram,
        }
    }

    /// Slots in platform order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &PlatformResult)> {
        Platform::iter().map(move |platform| (platform, self.get(platform)))
    }

    /// Whether the text phase of this run has completed.
    pub fn has_content(&self) -> bool {
        self.iter().all(|(_, slot)| slot.content.is_some())
    }

    /// Whether any image request is still in flight.
    pub fn any_loading(&self) -> bool {
        self.iter().any(|(_, slot)| slot.image.is_loading())
    }
}
