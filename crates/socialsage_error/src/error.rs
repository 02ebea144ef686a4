//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, JsonError, StorageError, ValidationError};

/// Every failure a SocialSage operation can report.
///
/// # Examples
///
/// ```
/// use socialsage_error::{SocialSageError, JsonError};
///
/// let json_err = JsonError::new("missing field `twitter`");
/// let err: SocialSageError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SocialSageErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Rejected user input
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Gemini provider error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Image file output error
    #[from(StorageError)]
    Storage(StorageError),
}

/// SocialSage error with kind discrimination.
///
/// # Examples
///
/// ```
/// use socialsage_error::{SocialSageError, SocialSageResult, GeminiError, GeminiErrorKind};
///
/// fn might_fail() -> SocialSageResult<()> {
///     Err(GeminiError::new(GeminiErrorKind::EmptyResponse))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert_eq!(err.user_message(), "No response text received from Gemini.");
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("SocialSage Error: {}", _0)]
pub struct SocialSageError(Box<SocialSageErrorKind>);

impl SocialSageError {
    /// Create a new error from a kind.
    pub fn new(kind: SocialSageErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SocialSageErrorKind {
        &self.0
    }

    /// The innermost message, without type prefixes or source locations.
    ///
    /// This is what a renderer shows in the run-level banner or next to a
    /// failed image slot.
    pub fn user_message(&self) -> String {
        match self.kind() {
            SocialSageErrorKind::Json(e) => e.message.clone(),
            SocialSageErrorKind::Config(e) => e.message.clone(),
            SocialSageErrorKind::Validation(e) => e.message.clone(),
            SocialSageErrorKind::Gemini(e) => e.kind.to_string(),
            SocialSageErrorKind::Storage(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to SocialSageErrorKind
impl<T> From<T> for SocialSageError
where
    T: Into<SocialSageErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for SocialSage operations.
pub type SocialSageResult<T> = std::result::Result<T, SocialSageError>;
