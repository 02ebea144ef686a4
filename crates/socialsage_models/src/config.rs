//! Configuration loading for SocialSage.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from socialsage.toml)
//! - User overrides (./socialsage.toml or ~/.config/socialsage/socialsage.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use socialsage_error::{ConfigError, SocialSageError, SocialSageResult};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Gemini endpoint and model selection.
///
/// ```toml
/// [gemini]
/// base_url = "https://generativelanguage.googleapis.com/v1beta"
/// text_model = "gemini-3-pro-preview"
/// image_model = "imagen-4.0-generate-001"
/// image_mime_type = "image/png"
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Getters, Deserialize, Serialize, derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct GeminiConfig {
    /// REST API root, without a trailing slash.
    base_url: String,
    /// Model that drafts the posts.
    text_model: String,
    /// Model that renders the images.
    image_model: String,
    /// Encoding requested from the image model.
    image_mime_type: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            text_model: "gemini-3-pro-preview".to_string(),
            image_model: "imagen-4.0-generate-001".to_string(),
            image_mime_type: "image/png".to_string(),
        }
    }
}

impl GeminiConfig {
    /// Creates a new config builder.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }
}

/// Where downloaded images are written.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Target directory for `<platform>-social-image.png` files.
    directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

/// Top-level SocialSage configuration.
///
/// # Example
///
/// ```no_run
/// use socialsage_models::SocialSageConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SocialSageConfig::load()?;
/// println!("Text model: {}", config.gemini().text_model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Deserialize, Serialize)]
pub struct SocialSageConfig {
    /// Gemini provider settings
    #[serde(default)]
    gemini: GeminiConfig,
    /// Image download settings
    #[serde(default)]
    output: OutputConfig,
}

impl SocialSageConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> SocialSageResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                SocialSageError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SocialSageError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (socialsage.toml shipped with the workspace)
    /// 2. User config in home directory (~/.config/socialsage/socialsage.toml)
    /// 3. User config in current directory (./socialsage.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> SocialSageResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/socialsage/socialsage.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("socialsage").required(false));

        builder
            .build()
            .map_err(|e| {
                SocialSageError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SocialSageError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

const DEFAULT_CONFIG: &str = include_str!("../../../socialsage.toml");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_match_code_defaults() {
        let bundled: SocialSageConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(bundled, SocialSageConfig::default());
    }

    #[test]
    fn builder_overrides_single_fields() {
        let config = GeminiConfig::builder()
            .text_model("gemini-2.5-flash")
            .build()
            .unwrap();

        assert_eq!(config.text_model(), "gemini-2.5-flash");
        assert_eq!(config.image_model(), "imagen-4.0-generate-001");
    }
}
