//! Trait definitions for SocialSage content providers.
//!
//! The orchestrator only ever talks to a [`ContentService`], so the hosted
//! provider can be swapped for a mock in tests or for another vendor.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::ContentService;
