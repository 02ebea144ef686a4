//! Instruction text and response schema for the text phase.

use serde_json::{Value, json};
use socialsage_core::Tone;

/// Builds the instruction sent to the text model.
///
/// # Examples
///
/// ```
/// use socialsage_core::Tone;
/// use socialsage_models::text_prompt;
///
/// let prompt = text_prompt("Launching eco cup line", Tone::Witty);
/// assert!(prompt.contains("\"Launching eco cup line\""));
/// assert!(prompt.contains("Tone: Witty."));
/// ```
pub fn text_prompt(idea: &str, tone: Tone) -> String {
    format!(
        "Create social media content for the following idea: \"{idea}\".\n\
         Tone: {tone}.\n\
         \n\
         Generate 3 distinct posts:\n\
         1. Facebook: Long-form, engaging, community-focused.\n\
         2. Twitter/X: Short, punchy, hashtag-optimized (under 280 chars).\n\
         3. Instagram: Visual-focused caption with hashtags.\n\
         \n\
         For each platform, also provide a detailed English image generation prompt \
         that describes an image perfectly suited for that specific post's content \
         and the platform's aesthetic.\n"
    )
}

fn post_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "text": { "type": "STRING" },
            "imagePrompt": { "type": "STRING" }
        },
        "required": ["text", "imagePrompt"]
    })
}

/// Response schema: three required platform objects, each with required
/// `text` and `imagePrompt` strings.
pub fn posts_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "facebook": post_schema(),
            "twitter": post_schema(),
            "instagram": post_schema()
        },
        "required": ["facebook", "twitter", "instagram"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_every_platform_and_field() {
        let schema = posts_schema();
        assert_eq!(
            schema["required"],
            json!(["facebook", "twitter", "instagram"])
        );
        for platform in ["facebook", "twitter", "instagram"] {
            assert_eq!(
                schema["properties"][platform]["required"],
                json!(["text", "imagePrompt"])
            );
        }
    }

    #[test]
    fn prompt_describes_each_platform() {
        let prompt = text_prompt("cups", Tone::Urgent);
        assert!(prompt.contains("Facebook: Long-form"));
        assert!(prompt.contains("under 280 chars"));
        assert!(prompt.contains("Instagram: Visual-focused"));
        assert!(prompt.contains("Tone: Urgent."));
    }
}
