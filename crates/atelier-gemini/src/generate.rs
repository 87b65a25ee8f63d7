//! Wire types for the Gemini `generateContent` endpoint.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Harm categories that are unblocked for fashion-photography prompts.
///
/// Garment prompts routinely trip over conservative default thresholds
/// (fabric on skin, body-fit language), so all four categories are set to
/// `BLOCK_NONE`, matching the behavior of the hosted service.
const UNBLOCKED_CATEGORIES: &[&str] = &[
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_HARASSMENT",
];

/// A single safety setting entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

impl SafetySetting {
    /// The permissive settings applied to every request.
    pub fn block_none() -> Vec<Self> {
        UNBLOCKED_CATEGORIES
            .iter()
            .map(|category| Self {
                category: (*category).to_owned(),
                threshold: "BLOCK_NONE".to_owned(),
            })
            .collect()
    }
}

/// Sampling options for a request.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    /// Returns true if no option is set.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.max_output_tokens.is_none()
    }
}

/// Inline binary data carried in a response part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Base64-encoded payload.
    pub data: String,
}

impl InlineData {
    /// Decodes the base64 payload into raw bytes.
    pub fn decode(&self) -> Result<Bytes> {
        Ok(Bytes::from(BASE64.decode(&self.data)?))
    }
}

/// One part of a content entry: text or inline data.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }
}

/// A role-tagged group of parts.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub safety_settings: Vec<SafetySetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Builds a single-turn user request from a prompt.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_owned()),
                parts: vec![Part::text(prompt)],
            }],
            safety_settings: SafetySetting::block_none(),
            generation_config: None,
        }
    }

    /// Attaches sampling options unless they are empty.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        if !config.is_empty() {
            self.generation_config = Some(config);
        }
        self
    }
}

/// One response candidate.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Response body for `models/{model}:generateContent`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    ///
    /// Returns an error when the response has no candidate with text.
    pub fn text(&self) -> Result<String> {
        let text: String = self
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(Error::missing_content("no text part in response"));
        }
        Ok(text)
    }

    /// Finds and decodes the first inline-data part across candidates.
    ///
    /// Returns an error when no candidate carries inline data.
    pub fn first_inline_image(&self) -> Result<(Bytes, String)> {
        for candidate in &self.candidates {
            let Some(content) = &candidate.content else {
                continue;
            };
            for part in &content.parts {
                if let Some(inline) = &part.inline_data {
                    return Ok((inline.decode()?, inline.mime_type.clone()));
                }
            }
        }
        Err(Error::missing_content("no inline image data in response"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let request = GenerateContentRequest::from_prompt("describe a dress")
            .with_generation_config(GenerationConfig {
                temperature: Some(0.7),
                max_output_tokens: Some(1024),
            });
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "describe a dress");
        assert_eq!(value["safetySettings"][0]["threshold"], "BLOCK_NONE");
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 1024);
    }

    #[test]
    fn all_four_categories_unblocked() {
        let settings = SafetySetting::block_none();
        assert_eq!(settings.len(), 4);
        assert!(settings.iter().all(|s| s.threshold == "BLOCK_NONE"));
    }

    #[test]
    fn text_extraction_concatenates_parts() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"A sage "},{"text":"green dress"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text().unwrap(), "A sage green dress");
    }

    #[test]
    fn missing_text_is_an_error() {
        let response = GenerateContentResponse::default();
        assert!(response.text().is_err());
    }

    #[test]
    fn inline_image_round_trips_base64() {
        let raw = r#"{"candidates":[{"content":{"parts":[
            {"text":"here is your image"},
            {"inlineData":{"mimeType":"image/png","data":"iVBORw0KGgo="}}
        ]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let (bytes, mime) = response.first_inline_image().unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(&bytes[..], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn missing_inline_image_is_an_error() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"sorry, text only"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert!(response.first_inline_image().is_err());
    }
}
