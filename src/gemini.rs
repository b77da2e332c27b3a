use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-2.5-flash";
const API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The endpoint credential is missing from the environment. Detected
    /// before any network activity.
    #[error("generation endpoint is not configured: {0}")]
    Configuration(String),

    /// The remote call failed or returned something unusable.
    #[error("generation request failed: {0}")]
    Request(String),
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Thin wrapper over the hosted generation endpoint: one prompt in, the
/// model's raw text out. No retries, no streaming, and no validation that
/// the response follows the requested report structure.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Client {
    pub fn from_env() -> Result<Self, GenerateError> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| GenerateError::Configuration(format!("{API_KEY_VAR} is not set")))?;
        Ok(Self::new(api_key, DEFAULT_BASE_URL.to_string()))
    }

    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url,
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let url = format!("{}/v1beta/models/{MODEL}:generateContent", self.base_url);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        debug!(model = MODEL, prompt_len = prompt.len(), "sending generation request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerateError::Request(format!("transport error: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Request(format!(
                "endpoint returned {status}: {body}"
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::Request(format!("unreadable response: {e}")))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            return Err(GenerateError::Request(
                "response contained no generated text".to_string(),
            ));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_has_expected_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn response_text_is_concatenated_across_parts() {
        let raw = r####"{"candidates":[{"content":{"parts":[{"text":"### Report"},{"text":"\nbody"}]}}]}"####;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect();
        assert_eq!(text, "### Report\nbody");
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        std::env::remove_var(API_KEY_VAR);
        let err = Client::from_env().err().expect("expected an error");
        match err {
            GenerateError::Configuration(detail) => assert!(detail.contains(API_KEY_VAR)),
            GenerateError::Request(detail) => panic!("wrong variant: {detail}"),
        }
    }

    #[test]
    fn empty_candidate_list_deserializes() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
