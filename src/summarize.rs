use async_trait::async_trait;
use log::{debug, warn};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// A hosted text-generation model
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError>;
}

/// Ask the model to complete the prompt. The output is returned untouched.
pub async fn generate(generator: &dyn TextGenerator, model: &str, prompt: &str) -> Result<String, GenerationError> {
    debug!("Generating with model {model} ({} prompt bytes)", prompt.len());
    generator.generate(model, prompt).await
}

/// Google Gemini `generateContent` client
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl GeminiClient {
    /// A missing key is accepted here and reported on the first call
    pub fn new(client: reqwest::Client, api_key: Option<String>) -> Self {
        Self::with_endpoint(client, api_key, GEMINI_ENDPOINT)
    }

    pub fn with_endpoint(client: reqwest::Client, api_key: Option<String>, endpoint: &str) -> Self {
        Self {
            client,
            api_key,
            endpoint: endpoint.trim().trim_end_matches('/').to_string(),
        }
    }

    fn request_url(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.endpoint)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| GenerationError::Auth("GOOGLE_API_KEY environment variable not set".to_string()))?;

        debug!("Summarizing via Gemini API with model {model}");

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let resp = self
            .client
            .post(self.request_url(model))
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!("Gemini API returned {status}");
            return Err(classify_failure(status, &body));
        }

        let payload: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| GenerationError::Transport(format!("failed to parse Gemini response: {e}")))?;
        extract_text(&payload)
    }
}

fn classify_failure(status: StatusCode, body: &str) -> GenerationError {
    let api_error = serde_json::from_str::<ErrorEnvelope>(body).ok().map(|e| e.error);
    let message = api_error
        .as_ref()
        .and_then(|e| e.message.clone())
        .unwrap_or_else(|| body.to_string());
    let api_status = api_error.as_ref().and_then(|e| e.status.as_deref()).unwrap_or_default();
    let detail = format!("Gemini API returned {status}: {message}");

    let bad_key = body.contains("API_KEY_INVALID") || body.contains("API key not valid");
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerationError::Auth(detail),
        StatusCode::BAD_REQUEST if bad_key => GenerationError::Auth(detail),
        StatusCode::TOO_MANY_REQUESTS => GenerationError::Quota(detail),
        _ if api_status == "RESOURCE_EXHAUSTED" => GenerationError::Quota(detail),
        _ => GenerationError::Transport(detail),
    }
}

fn extract_text(payload: &GenerateContentResponse) -> Result<String, GenerationError> {
    if let Some(reason) = payload.prompt_feedback.as_ref().and_then(|f| f.block_reason.as_deref()) {
        return Err(GenerationError::Blocked(format!("prompt blocked ({reason})")));
    }

    let Some(candidate) = payload.candidates.first() else {
        return Err(GenerationError::Blocked("response contained no candidates".to_string()));
    };

    let parts = candidate
        .content
        .as_ref()
        .map(|c| c.parts.as_slice())
        .unwrap_or_default();
    let texts: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
    if texts.is_empty() {
        let reason = candidate.finish_reason.as_deref().unwrap_or("UNKNOWN");
        return Err(GenerationError::Blocked(format!("candidate had no text (finish reason {reason})")));
    }
    Ok(texts.concat())
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
    status: Option<String>,
}
