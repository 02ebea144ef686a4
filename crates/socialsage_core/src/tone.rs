//! Tone of voice for generated posts.

use serde::{Deserialize, Serialize};

/// The voice every post in a run is written in.
///
/// The display form is exactly what the text model is told.
///
/// # Examples
///
/// ```
/// use socialsage_core::Tone;
///
/// assert_eq!(Tone::Luxury.to_string(), "Luxury");
/// assert_eq!("witty".parse::<Tone>().unwrap(), Tone::Witty);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
pub enum Tone {
    /// Polished and businesslike
    #[default]
    Professional,
    /// Playful, with wordplay
    Witty,
    /// Time-sensitive, action-driving
    Urgent,
    /// Warm and conversational
    Friendly,
    /// Premium, aspirational
    Luxury,
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "professional" => Ok(Tone::Professional),
            "witty" => Ok(Tone::Witty),
            "urgent" => Ok(Tone::Urgent),
            "friendly" => Ok(Tone::Friendly),
            "luxury" => Ok(Tone::Luxury),
            _ => Err(format!("Unknown tone: {}", s)),
        }
    }
}
