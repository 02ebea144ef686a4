//! Validated user idea.

use serde::{Deserialize, Serialize};
use socialsage_error::ValidationError;

/// A non-empty, trimmed description of what the posts should be about.
///
/// Building an `Idea` is how input collectors enforce that a run is never
/// started for blank input.
///
/// # Examples
///
/// ```
/// use socialsage_core::Idea;
///
/// let idea = Idea::new("  Launching eco cup line \n").unwrap();
/// assert_eq!(idea.as_str(), "Launching eco cup line");
/// assert!(Idea::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
pub struct Idea(String);

impl Idea {
    /// Trims `raw` and rejects it when nothing is left.
    #[track_caller]
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new("Idea must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The trimmed idea text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Idea {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Idea> for String {
    fn from(idea: Idea) -> Self {
        idea.0
    }
}

impl AsRef<str> for Idea {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
