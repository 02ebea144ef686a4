//! Wire types for the Gemini REST endpoints.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use socialsage_core::{AspectRatio, SocialPosts};
use socialsage_error::{GeminiError, GeminiErrorKind, JsonError, SocialSageResult};

/// A text part of a content turn.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextPart {
    /// Text of the part; non-text parts deserialize with `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// One conversational turn.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Content {
    /// Author of the turn ("user" or "model").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Parts of the turn.
    #[serde(default)]
    pub parts: Vec<TextPart>,
}

/// Structured-output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Always `application/json` for the text phase.
    pub response_mime_type: String,
    /// Schema the model must follow.
    pub response_schema: serde_json::Value,
}

/// Body of `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// The single user turn carrying the instruction.
    pub contents: Vec<Content>,
    /// JSON mode configuration.
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// A one-turn request that must answer with JSON matching `schema`.
    pub fn json(prompt: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![TextPart {
                    text: Some(prompt.into()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            },
        }
    }
}

/// A response candidate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated turn, absent when the candidate was blocked.
    #[serde(default)]
    pub content: Option<Content>,
    /// Why generation stopped.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Body returned by `generateContent`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// Candidates; only the first is used.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any.
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        (!text.is_empty()).then_some(text)
    }

    /// Parses the first candidate's JSON text into the three posts.
    ///
    /// # Errors
    ///
    /// Fails with [`GeminiErrorKind::EmptyResponse`] when there is no text,
    /// and with a JSON error when the text does not match the schema.
    #[track_caller]
    pub fn into_posts(self) -> SocialSageResult<SocialPosts> {
        let text = self
            .text()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))?;

        serde_json::from_str(&text).map_err(|e| {
            JsonError::new(format!("Response did not match the post schema: {}", e)).into()
        })
    }
}

/// Image prompt instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictInstance {
    /// The image prompt.
    pub prompt: String,
}

/// Requested output encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// MIME type of the returned image.
    pub mime_type: String,
}

/// Imagen generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    /// Number of images; always 1.
    pub sample_count: u32,
    /// Requested geometry.
    pub aspect_ratio: AspectRatio,
    /// Requested encoding.
    pub output_options: OutputOptions,
}

/// Body of `models/{model}:predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Exactly one instance.
    pub instances: Vec<PredictInstance>,
    /// Generation parameters.
    pub parameters: PredictParameters,
}

impl PredictRequest {
    /// A request for exactly one image.
    pub fn single(
        prompt: impl Into<String>,
        aspect_ratio: AspectRatio,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            instances: vec![PredictInstance {
                prompt: prompt.into(),
            }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio,
                output_options: OutputOptions {
                    mime_type: mime_type.into(),
                },
            },
        }
    }
}

/// One generated image.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Base64 image payload.
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
    /// MIME type of the payload.
    #[serde(default)]
    mime_type: Option<String>,
}

/// Body returned by `predict`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Generated images; filtered prompts may yield none.
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

impl PredictResponse {
    /// Turns the first prediction into a `data:` url.
    ///
    /// `fallback_mime` is used when the prediction does not name its type.
    ///
    /// # Errors
    ///
    /// Fails with [`GeminiErrorKind::NoImageGenerated`] when no prediction
    /// carries image bytes.
    #[track_caller]
    pub fn into_data_url(self, fallback_mime: &str) -> SocialSageResult<String> {
        let prediction = self
            .predictions
            .into_iter()
            .next()
            .filter(|p| p.bytes_base64_encoded.as_deref().is_some_and(|b| !b.is_empty()))
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::NoImageGenerated))?;

        let mime = prediction.mime_type.as_deref().unwrap_or(fallback_mime);
        let bytes = prediction.bytes_base64_encoded.unwrap_or_default();
        Ok(format!("data:{};base64,{}", mime, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_joins_all_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn missing_text_is_an_empty_response() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [{ "finishReason": "SAFETY" }] }))
                .unwrap();

        let err = response.into_posts().unwrap_err();
        assert_eq!(err.user_message(), "No response text received from Gemini.");
    }

    #[test]
    fn malformed_json_fails_to_parse() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"facebook\": 3}" }] } }]
        }))
        .unwrap();

        assert!(response.into_posts().is_err());
    }

    #[test]
    fn predict_request_asks_for_one_image() {
        let body = serde_json::to_value(PredictRequest::single(
            "a cup",
            AspectRatio::Landscape,
            "image/png",
        ))
        .unwrap();

        assert_eq!(
            body,
            json!({
                "instances": [{ "prompt": "a cup" }],
                "parameters": {
                    "sampleCount": 1,
                    "aspectRatio": "16:9",
                    "outputOptions": { "mimeType": "image/png" }
                }
            })
        );
    }

    #[test]
    fn prediction_becomes_data_url() {
        let response: PredictResponse = serde_json::from_value(json!({
            "predictions": [{ "bytesBase64Encoded": "iVBORw==" }]
        }))
        .unwrap();

        assert_eq!(
            response.into_data_url("image/png").unwrap(),
            "data:image/png;base64,iVBORw=="
        );
    }

    #[test]
    fn no_predictions_means_no_image() {
        let err = PredictResponse::default()
            .into_data_url("image/png")
            .unwrap_err();
        assert_eq!(err.user_message(), "No image generated.");
    }
}
