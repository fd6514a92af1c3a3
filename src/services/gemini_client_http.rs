//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::domain::{ApiConfig, AppError};
use crate::ports::{ApiKey, GenerationRequest, TextGenerator};

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";

/// HTTP client for the Gemini text-generation API.
#[derive(Clone)]
pub struct HttpGeminiClient {
    config: ApiConfig,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("base_url", &self.config.base_url)
            .field("timeout_secs", &self.config.timeout_secs)
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client for the given endpoint configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config: config.clone(), client })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: RequestGenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestGenerationConfig {
    temperature: f32,
    thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl ApiResponse {
    /// Answer text of the first candidate, with reasoning parts left out.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter(|part| !part.thought)
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

impl TextGenerator for HttpGeminiClient {
    fn generate(&self, api_key: &ApiKey, request: &GenerationRequest) -> Result<String, AppError> {
        let url = self.config.generate_content_url(&request.model)?;
        let body = ApiRequest {
            contents: vec![RequestContent { parts: vec![RequestPart { text: &request.prompt }] }],
            generation_config: RequestGenerationConfig {
                temperature: request.temperature,
                thinking_config: ThinkingConfig { thinking_budget: request.thinking_budget },
            },
        };

        tracing::debug!(
            model = %request.model,
            prompt_chars = request.prompt.chars().count(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(url)
            .header(X_GOOG_API_KEY, api_key.expose())
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::upstream("request timed out")
                } else {
                    AppError::upstream(format!("HTTP request failed: {}", e))
                }
            })?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received generateContent response");

        if status.is_success() {
            let api_response: ApiResponse = response
                .json()
                .map_err(|e| AppError::upstream(format!("Failed to parse response: {}", e)))?;
            Ok(api_response.into_text())
        } else {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::upstream_status(status.as_u16(), describe_error(status.as_u16(), &error_text)))
        }
    }
}

fn describe_error(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(kind) => format!("API error ({} {}): {}", status, kind, envelope.error.message),
            None => format!("API error ({}): {}", status, envelope.error.message),
        },
        Err(_) => format!("API error ({}): {}", status, body.trim()),
    }
}
