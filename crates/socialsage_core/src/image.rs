//! Per-platform image status and inline image payloads.

use base64::Engine;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use socialsage_error::{SocialSageResult, StorageError, StorageErrorKind};

/// Image half of a platform slot.
///
/// A slot is in exactly one of four conditions: idle (nothing requested),
/// loading, failed, or ready. [`ImageState::fail`] leaves the url alone, but
/// every attempt starts with [`ImageState::begin`] or [`ImageState::loading`],
/// which clear it, so a failed slot never shows a stale image.
///
/// # Examples
///
/// ```
/// use socialsage_core::{ImageState, ImageStatus};
///
/// let mut image = ImageState::loading();
/// assert_eq!(image.status(), ImageStatus::Loading);
///
/// image.fail("Failed");
/// assert!(!image.is_loading());
/// assert_eq!(image.status(), ImageStatus::Failed("Failed"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct ImageState {
    /// Displayable url, empty when there is none.
    url: String,
    /// Whether a request for this slot is in flight.
    #[getter(skip)]
    loading: bool,
    /// Message of the last failed attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Borrowed view of an [`ImageState`] for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus<'a> {
    /// No image requested yet
    Idle,
    /// Request in flight
    Loading,
    /// Last attempt failed
    Failed(&'a str),
    /// Image available at the url
    Ready(&'a str),
}

impl ImageState {
    /// A slot with a request in flight.
    pub fn loading() -> Self {
        Self {
            url: String::new(),
            loading: true,
            error: None,
        }
    }

    /// A slot holding a finished image.
    pub fn ready(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            loading: false,
            error: None,
        }
    }

    /// Whether a request for this slot is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Marks a new attempt as started, dropping any earlier url and error.
    pub fn begin(&mut self) {
        *self = Self::loading();
    }

    /// Records a successful attempt.
    pub fn succeed(&mut self, url: impl Into<String>) {
        *self = Self::ready(url);
    }

    /// Records a failed attempt.
    ///
    /// The url is not touched; after [`ImageState::begin`] it is empty.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Current condition of the slot.
    pub fn status(&self) -> ImageStatus<'_> {
        if self.loading {
            ImageStatus::Loading
        } else if let Some(error) = &self.error {
            ImageStatus::Failed(error)
        } else if !self.url.is_empty() {
            ImageStatus::Ready(&self.url)
        } else {
            ImageStatus::Idle
        }
    }
}

/// A decoded `data:` url, as produced by the image adapter.
///
/// # Examples
///
/// ```
/// use socialsage_core::ImageData;
///
/// let image = ImageData::from_data_url("data:image/png;base64,iVBORw==").unwrap();
/// assert_eq!(image.mime(), "image/png");
/// assert_eq!(image.bytes()[..2], [0x89, 0x50]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ImageData {
    /// MIME type declared by the url.
    mime: String,
    /// Raw image bytes.
    bytes: Vec<u8>,
}

impl ImageData {
    /// Wraps raw bytes of the given MIME type.
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    /// Parses a base64 `data:` url.
    ///
    /// # Errors
    ///
    /// Fails when the url is not a base64 data url or the payload is not
    /// valid base64.
    #[track_caller]
    pub fn from_data_url(url: &str) -> SocialSageResult<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| invalid_image("Image url is not a data url"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| invalid_image("Data url has no payload"))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| invalid_image("Data url is not base64 encoded"))?;

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| invalid_image(format!("Bad base64 payload: {}", e)))?;

        Ok(Self::new(mime, bytes))
    }

    /// Encodes the image back into a displayable `data:` url.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

#[track_caller]
fn invalid_image(message: impl Into<String>) -> StorageError {
    StorageError::new(StorageErrorKind::InvalidImage(message.into()))
}
