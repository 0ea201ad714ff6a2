//! Hugging Face Inference API client.
//!
//! The single point of entry for model calls. The pipeline only sees the
//! `TextGenerator` trait, so tests can substitute a deterministic stub.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

const INFERENCE_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// One wall-clock budget for the whole call; a timeout surfaces as `Http`.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const MAX_NEW_TOKENS: u32 = 320;
const TEMPERATURE: f32 = 0.2;

#[derive(Error, Debug)]
pub enum HfError {
    #[error("failed to reach inference endpoint: {0}")]
    Http(#[from] reqwest::Error),
    #[error("inference endpoint error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("unhandled response structure: {0}")]
    Payload(String),
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

/// Seam between the generation pipeline and the network.
#[async_trait]
pub trait TextGenerator {
    /// Returns the model's raw generated text for one prompt.
    async fn generate(&self, prompt: &str) -> Result<String, HfError>;
}

/// Client for the hosted text-generation endpoint.
pub struct HfClient {
    client: Client,
    token: String,
    model: String,
}

impl HfClient {
    pub fn new(token: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
            token: token.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for HfClient {
    async fn generate(&self, prompt: &str) -> Result<String, HfError> {
        let url = format!("{INFERENCE_BASE_URL}/{}", self.model);
        let request = GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                return_full_text: false,
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(HfError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: Value =
            serde_json::from_str(&body).map_err(|_| HfError::Payload(body.clone()))?;
        generated_text(parsed)
    }
}

/// Pulls the generated text out of either recognised response shape: a
/// non-empty array whose first element carries `generated_text`, or a single
/// object carrying `generated_text`.
fn generated_text(parsed: Value) -> Result<String, HfError> {
    match &parsed {
        Value::Array(items) => {
            if let Some(text) = items
                .first()
                .and_then(|item| item.get("generated_text"))
                .and_then(Value::as_str)
            {
                if !text.is_empty() {
                    return Ok(text.to_string());
                }
            }
        }
        Value::Object(map) => {
            if let Some(text) = map.get("generated_text").and_then(Value::as_str) {
                return Ok(text.to_string());
            }
        }
        _ => {}
    }
    Err(HfError::Payload(parsed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_array_response_shape() {
        let parsed = json!([{"generated_text": "hello"}]);
        assert_eq!(generated_text(parsed).unwrap(), "hello");
    }

    #[test]
    fn accepts_object_response_shape() {
        let parsed = json!({"generated_text": "hello"});
        assert_eq!(generated_text(parsed).unwrap(), "hello");
    }

    #[test]
    fn rejects_array_with_empty_text() {
        let parsed = json!([{"generated_text": ""}]);
        assert!(matches!(generated_text(parsed), Err(HfError::Payload(_))));
    }

    #[test]
    fn rejects_unrecognised_shapes() {
        for parsed in [json!([]), json!([{"score": 1}]), json!("text"), json!(42)] {
            assert!(matches!(generated_text(parsed), Err(HfError::Payload(_))));
        }
    }

    #[test]
    fn payload_error_carries_the_offending_body() {
        let err = generated_text(json!({"error": "loading"})).unwrap_err();
        assert!(err.to_string().contains("loading"));
    }

    #[test]
    fn request_body_matches_the_wire_format() {
        let request = GenerationRequest {
            inputs: "prompt",
            parameters: GenerationParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                return_full_text: false,
            },
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["inputs"], "prompt");
        assert_eq!(body["parameters"]["max_new_tokens"], 320);
        assert_eq!(body["parameters"]["return_full_text"], false);
    }
}
