//! Terminal rendering and image download for a finished run.

use socialsage_core::{ImageData, ImageStatus, Platform};
use socialsage_error::{SocialSageResult, StorageError, StorageErrorKind};
use socialsage_studio::StudioState;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Platforms whose post exists but whose image failed.
pub fn failed_platforms(state: &StudioState) -> Vec<Platform> {
    state
        .results()
        .iter()
        .filter(|(_, slot)| {
            slot.content().is_some() && matches!(slot.image().status(), ImageStatus::Failed(_))
        })
        .map(|(platform, _)| platform)
        .collect()
}

/// Renders the run-level error and one card per platform.
///
/// # Examples
///
/// ```
/// use socialsage::{StudioState, render_state};
///
/// let rendered = render_state(&StudioState::default());
/// assert!(rendered.contains("No posts yet"));
/// ```
pub fn render_state(state: &StudioState) -> String {
    let mut lines = Vec::new();

    if let Some(error) = state.error() {
        lines.push(format!("Error: {}", error));
    }
    if *state.is_generating_text() {
        lines.push("Drafting posts...".to_string());
    }
    if !state.results().has_content() {
        if state.error().is_none() && !state.is_generating_text() {
            lines.push("No posts yet.".to_string());
        }
        return lines.join("\n");
    }

    for (platform, slot) in state.results().iter() {
        let Some(content) = slot.content() else {
            continue;
        };

        lines.push(format!(
            "== {} ({}) ==",
            platform.label(),
            platform.aspect_ratio()
        ));
        lines.push(content.text().clone());
        lines.push(String::new());
        lines.push(format!("Image prompt: {}", content.image_prompt()));
        lines.push(match slot.image().status() {
            ImageStatus::Idle => "Image: none".to_string(),
            ImageStatus::Loading => "Image: generating...".to_string(),
            ImageStatus::Failed(message) => format!("Image failed: {}", message),
            ImageStatus::Ready(_) => format!("Image: ready ({})", platform.image_file_name()),
        });
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Saves every ready image to `dir` as `<platform>-social-image.png`.
///
/// Slots without a ready image are skipped. Returns the written paths in
/// platform order.
///
/// # Errors
///
/// Fails if the directory cannot be created, a url cannot be decoded, or a
/// file cannot be written.
#[instrument(skip(state), fields(dir = %dir.display()))]
pub async fn write_images(state: &StudioState, dir: &Path) -> SocialSageResult<Vec<PathBuf>> {
    let ready: Vec<(Platform, &str)> = state
        .results()
        .iter()
        .filter_map(|(platform, slot)| match slot.image().status() {
            ImageStatus::Ready(url) => Some((platform, url)),
            _ => None,
        })
        .collect();

    if ready.is_empty() {
        debug!("No ready images to save");
        return Ok(Vec::new());
    }

    tokio::fs::create_dir_all(dir).await.map_err(|e| {
        StorageError::new(StorageErrorKind::DirectoryCreation(format!(
            "{}: {}",
            dir.display(),
            e
        )))
    })?;

    let mut written = Vec::with_capacity(ready.len());
    for (platform, url) in ready {
        let image = ImageData::from_data_url(url)?;

        let path = dir.join(platform.image_file_name());
        tokio::fs::write(&path, image.bytes()).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        debug!(%platform, path = %path.display(), bytes = image.bytes().len(), "Saved image");
        written.push(path);
    }

    Ok(written)
}
