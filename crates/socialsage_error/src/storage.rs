//! Errors raised while saving generated images to disk.

/// What went wrong writing an image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StorageErrorKind {
    /// Output directory could not be created
    #[display("Failed to create output directory: {}", _0)]
    DirectoryCreation(String),
    /// Image file could not be written
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Slot has no image url, or the url is not a base64 data url
    #[display("Invalid image data: {}", _0)]
    InvalidImage(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use socialsage_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::FileWrite("out/twitter-social-image.png".to_string()));
/// assert!(format!("{}", err).contains("Failed to write file"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
