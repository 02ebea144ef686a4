//! Generation orchestrator for the SocialSage content studio.
//!
//! A [`Studio`] runs the text phase against a
//! [`ContentService`](socialsage_interface::ContentService), publishes the
//! three drafted posts at once, then renders one image per platform in
//! independent tasks. Renderers observe progress through [`StudioState`]
//! snapshots.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod state;
mod studio;

pub use state::StudioState;
pub use studio::Studio;
