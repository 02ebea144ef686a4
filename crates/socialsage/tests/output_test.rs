//! Tests for rendering and saving a finished run.

mod test_utils;

use socialsage::{Platform, StudioState, failed_platforms, render_state, write_images};
use test_utils::{FixedService, finished_run};

#[tokio::test]
async fn test_render_shows_every_platform_card() {
    let (_, state) = finished_run(FixedService::new()).await;

    let rendered = render_state(&state);
    assert!(rendered.contains("== Facebook (4:3) =="));
    assert!(rendered.contains("== Twitter / X (16:9) =="));
    assert!(rendered.contains("== Instagram (1:1) =="));
    assert!(rendered.contains("Sip sustainably #eco"));
    assert!(rendered.contains("Image prompt: instagram prompt"));
    assert!(rendered.contains("Image: ready (twitter-social-image.png)"));
    assert!(!rendered.contains("Error:"));
}

#[tokio::test]
async fn test_render_shows_slot_failure_message() {
    let (_, state) = finished_run(FixedService::new().failing("twitter prompt")).await;

    let rendered = render_state(&state);
    assert!(rendered.contains("Image failed: No image generated."));
    assert!(rendered.contains("Sip sustainably #eco"));
}

#[test]
fn test_render_empty_state() {
    assert_eq!(render_state(&StudioState::default()), "No posts yet.");
}

#[tokio::test]
async fn test_failed_platforms_lists_only_failures() {
    let (_, state) = finished_run(FixedService::new().failing("facebook prompt")).await;
    assert_eq!(failed_platforms(&state), vec![Platform::Facebook]);

    let (_, state) = finished_run(FixedService::new()).await;
    assert!(failed_platforms(&state).is_empty());
}

#[tokio::test]
async fn test_write_images_saves_ready_slots() -> anyhow::Result<()> {
    let (_, state) = finished_run(FixedService::new().failing("instagram prompt")).await;
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("images");

    let written = write_images(&state, &out).await?;

    assert_eq!(
        written,
        vec![
            out.join("facebook-social-image.png"),
            out.join("twitter-social-image.png"),
        ]
    );
    assert_eq!(std::fs::read(&written[0])?, vec![0x89, 0x50, 0x4e, 0x47]);
    assert!(!out.join("instagram-social-image.png").exists());
    Ok(())
}

#[tokio::test]
async fn test_write_images_without_ready_images_creates_nothing() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("never");

    let written = write_images(&StudioState::default(), &out).await?;

    assert!(written.is_empty());
    assert!(!out.exists());
    Ok(())
}

#[tokio::test]
async fn test_state_serializes_for_json_output() -> anyhow::Result<()> {
    let (_, state) = finished_run(FixedService::new()).await;

    let json = serde_json::to_value(&state)?;
    assert_eq!(json["isGeneratingText"], false);
    assert_eq!(json["runId"], 1);
    assert_eq!(
        json["results"]["twitter"]["content"]["imagePrompt"],
        "twitter prompt"
    );
    Ok(())
}
