//! Gemini client implementing [`ContentService`].
//!
//! # Example
//!
//! ```no_run
//! use socialsage_core::{AspectRatio, Tone};
//! use socialsage_interface::ContentService;
//! use socialsage_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//!
//! let posts = client.generate_text("Launching eco cup line", Tone::Professional).await?;
//! let url = client
//!     .generate_image(posts.instagram().image_prompt(), AspectRatio::Square)
//!     .await?;
//! assert!(url.starts_with("data:image/"));
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use std::env;
use tracing::{debug, instrument, warn};

use socialsage_core::{AspectRatio, SocialPosts, Tone};
use socialsage_error::{GeminiError, GeminiErrorKind, SocialSageResult};
use socialsage_interface::ContentService;

use super::GeminiResult;
use super::dto::{GenerateContentRequest, GenerateContentResponse, PredictRequest, PredictResponse};
use super::prompt::{posts_schema, text_prompt};
use crate::GeminiConfig;

/// Client for the Google Gemini REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    config: GeminiConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", self.config.base_url())
            .field("text_model", self.config.text_model())
            .field("image_model", self.config.image_model())
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client with default models.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> SocialSageResult<Self> {
        Self::with_config(GeminiConfig::default())
    }

    /// Create a new Gemini client using the given endpoint and models.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set or the HTTP client cannot
    /// be built.
    #[instrument(name = "gemini_client_with_config", skip_all)]
    pub fn with_config(config: GeminiConfig) -> SocialSageResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        Self::with_api_key(api_key, config)
    }

    /// Create a new Gemini client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the HTTP client cannot be built.
    #[instrument(name = "gemini_client_with_api_key", skip_all)]
    pub fn with_api_key(api_key: impl Into<String>, config: GeminiConfig) -> SocialSageResult<Self> {
        Self::new_internal(api_key.into(), config).map_err(Into::into)
    }

    fn new_internal(api_key: String, config: GeminiConfig) -> GeminiResult<Self> {
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey));
        }

        let client = Client::builder()
            .user_agent(concat!("socialsage/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(
            text_model = %config.text_model(),
            image_model = %config.image_model(),
            "Created Gemini client"
        );

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// Endpoint and model settings in use.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!(
            "{}/models/{}:{}",
            self.config.base_url().trim_end_matches('/'),
            model,
            method
        )
    }

    /// POSTs `body` and decodes a successful JSON answer.
    async fn post_json<B, R>(&self, url: &str, body: &B) -> GeminiResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        debug!(url = %url, "Sending Gemini API request");

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini API returned an error status");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        response.json::<R>().await.map_err(|e| {
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to decode response: {}",
                e
            )))
        })
    }
}

#[async_trait]
impl ContentService for GeminiClient {
    #[instrument(skip(self, idea), fields(model = %self.config.text_model()))]
    async fn generate_text(&self, idea: &str, tone: Tone) -> SocialSageResult<SocialPosts> {
        let request = GenerateContentRequest::json(text_prompt(idea, tone), posts_schema());
        let url = self.endpoint(self.config.text_model(), "generateContent");

        let response: GenerateContentResponse = self.post_json(&url, &request).await?;
        response.into_posts()
    }

    #[instrument(skip(self, prompt), fields(model = %self.config.image_model()))]
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> SocialSageResult<String> {
        let request =
            PredictRequest::single(prompt, aspect_ratio, self.config.image_mime_type().as_str());
        let url = self.endpoint(self.config.image_model(), "predict");

        let response: PredictResponse = self.post_json(&url, &request).await?;
        response.into_data_url(self.config.image_mime_type())
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn text_model(&self) -> &str {
        self.config.text_model()
    }

    fn image_model(&self) -> &str {
        self.config.image_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_accept_bare_and_prefixed_model_names() {
        let config = GeminiConfig::builder()
            .base_url("https://example.test/v1beta/")
            .build()
            .unwrap();
        let client = GeminiClient::with_api_key("key", config).unwrap();

        assert_eq!(
            client.endpoint("gemini-3-pro-preview", "generateContent"),
            "https://example.test/v1beta/models/gemini-3-pro-preview:generateContent"
        );
        assert_eq!(
            client.endpoint("models/imagen-4.0-generate-001", "predict"),
            "https://example.test/v1beta/models/imagen-4.0-generate-001:predict"
        );
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let err = GeminiClient::with_api_key("  ", GeminiConfig::default()).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn debug_output_hides_the_key() {
        let client = GeminiClient::with_api_key("secret-key", GeminiConfig::default()).unwrap();
        assert!(!format!("{:?}", client).contains("secret-key"));
    }
}
