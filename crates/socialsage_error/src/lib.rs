//! Error types for SocialSage.
//!
//! This crate provides the foundation error types used throughout the SocialSage workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Location details are useful in logs but not in front of a user, so every
//! error also exposes a plain message through [`SocialSageError::user_message`].
//!
//! # Examples
//!
//! ```
//! use socialsage_error::{SocialSageResult, ConfigError};
//!
//! fn load_settings() -> SocialSageResult<String> {
//!     Err(ConfigError::new("Missing [gemini] section"))?
//! }
//!
//! match load_settings() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e.user_message()),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod json;
mod storage;
mod validation;

pub use config::ConfigError;
pub use error::{SocialSageError, SocialSageErrorKind, SocialSageResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
pub use validation::ValidationError;
