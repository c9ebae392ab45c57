use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shared::SchemaVersion;

use crate::prompt;

pub const MAX_COMPLETION_TOKENS: u32 = 500;
pub const SAMPLING_TEMPERATURE: f32 = 0.7;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
    #[error("Vision request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Vision service returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("Vision service returned an empty completion")]
    EmptyCompletion,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: Vec<ContentPart>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible vision completion endpoint. One call per
/// analysis, no retries, bounded by an explicit request timeout.
#[derive(Clone)]
pub struct VisionClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
    schema: SchemaVersion,
}

impl VisionClient {
    pub fn new(
        api_base: String,
        api_key: String,
        model: String,
        schema: SchemaVersion,
        timeout: Duration,
    ) -> Result<Self, VisionError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_base,
            api_key,
            model,
            schema,
        })
    }

    pub fn from_env() -> Result<Self, VisionError> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| VisionError::MissingApiKey)?;
        let api_base = env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let model = env::var("VISION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let schema = env::var("ANALYSIS_SCHEMA")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(SchemaVersion::Extended);
        let timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(api_base, api_key, model, schema, Duration::from_secs(timeout_secs))
    }

    pub fn schema(&self) -> SchemaVersion {
        self.schema
    }

    /// Sends the instruction plus the inline image and returns the raw reply
    /// text. The caller decides what the text means.
    pub async fn analyze_image(&self, base64_image: &str) -> Result<String, VisionError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: vec![
                    ContentPart::Text {
                        text: prompt::instruction(self.schema).to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:image/jpeg;base64,{}", base64_image),
                        },
                    },
                ],
            }],
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: SAMPLING_TEMPERATURE,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VisionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(VisionError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_serializes_to_the_wire_shape() {
        let request = ChatRequest {
            model: "gpt-4o",
            messages: vec![ChatMessage {
                role: "user",
                content: vec![
                    ContentPart::Text {
                        text: "describe".into(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: "data:image/jpeg;base64,AAAA".into(),
                        },
                    },
                ],
            }],
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: SAMPLING_TEMPERATURE,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_tokens"], serde_json::json!(500));
        assert_eq!(json["messages"][0]["role"], serde_json::json!("user"));
        assert_eq!(json["messages"][0]["content"][0]["type"], serde_json::json!("text"));
        assert_eq!(
            json["messages"][0]["content"][1]["type"],
            serde_json::json!("image_url")
        );
        assert_eq!(
            json["messages"][0]["content"][1]["image_url"]["url"],
            serde_json::json!("data:image/jpeg;base64,AAAA")
        );
    }

    #[test]
    fn chat_response_tolerates_null_content() {
        let raw = r#"{"choices": [{"message": {"content": null}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }
}
