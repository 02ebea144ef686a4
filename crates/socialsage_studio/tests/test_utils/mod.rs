//! Test utilities for SocialSage studio tests.
//!
//! This module provides a mock content service and helpers for waiting on
//! studio state.

pub mod mock_service;

#[allow(unused_imports)]
pub use mock_service::{MockContentService, MockImage, MockText};

use socialsage_core::{GeneratedContent, SocialPosts};
use socialsage_studio::{Studio, StudioState};
use std::time::Duration;

/// Three posts whose image prompts carry `tag`, so runs can be told apart.
pub fn sample_posts(tag: &str) -> SocialPosts {
    SocialPosts::new(
        GeneratedContent::new(
            format!("{tag}: join our community as we launch"),
            format!("{tag} facebook prompt"),
        ),
        GeneratedContent::new(format!("{tag} #eco #launch"), format!("{tag} twitter prompt")),
        GeneratedContent::new(
            format!("{tag} caption #cups"),
            format!("{tag} instagram prompt"),
        ),
    )
}

/// Waits (with a timeout) until the studio state satisfies `predicate`.
pub async fn wait_until(
    studio: &Studio,
    predicate: impl FnMut(&StudioState) -> bool,
) -> StudioState {
    let mut receiver = studio.subscribe();
    tokio::time::timeout(Duration::from_secs(5), receiver.wait_for(predicate))
        .await
        .expect("timed out waiting for studio state")
        .expect("studio state channel closed")
        .clone()
}
