//! Target platforms and their image geometry.

use serde::{Deserialize, Serialize};

/// Aspect ratios the image model accepts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum AspectRatio {
    /// Square
    #[display("1:1")]
    #[serde(rename = "1:1")]
    Square,
    /// Widescreen landscape
    #[display("16:9")]
    #[serde(rename = "16:9")]
    Landscape,
    /// Classic landscape
    #[display("4:3")]
    #[serde(rename = "4:3")]
    Classic,
    /// Classic portrait
    #[display("3:4")]
    #[serde(rename = "3:4")]
    ClassicPortrait,
    /// Tall portrait
    #[display("9:16")]
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    /// Wire representation sent to the image model.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Landscape => "16:9",
            AspectRatio::Classic => "4:3",
            AspectRatio::ClassicPortrait => "3:4",
            AspectRatio::Portrait => "9:16",
        }
    }
}

/// A social network that receives one post per run.
///
/// # Examples
///
/// ```
/// use socialsage_core::{AspectRatio, Platform};
/// use strum::IntoEnumIterator;
///
/// assert_eq!(Platform::iter().count(), 3);
/// assert_eq!(Platform::Twitter.aspect_ratio(), AspectRatio::Landscape);
/// assert_eq!(Platform::Instagram.to_string(), "instagram");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Long-form community posts
    #[display("facebook")]
    Facebook,
    /// Short hashtag posts on Twitter / X
    #[display("twitter")]
    Twitter,
    /// Visual captions
    #[display("instagram")]
    Instagram,
}

impl Platform {
    /// Fixed image geometry for this platform.
    pub fn aspect_ratio(&self) -> AspectRatio {
        match self {
            Platform::Facebook => AspectRatio::Classic,
            Platform::Twitter => AspectRatio::Landscape,
            Platform::Instagram => AspectRatio::Square,
        }
    }

    /// Human-facing name.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter / X",
            Platform::Instagram => "Instagram",
        }
    }

    /// File name a downloaded image is saved under.
    pub fn image_file_name(&self) -> String {
        format!("{}-social-image.png", self)
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "facebook" => Ok(Platform::Facebook),
            "twitter" | "x" => Ok(Platform::Twitter),
            "instagram" => Ok(Platform::Instagram),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}
