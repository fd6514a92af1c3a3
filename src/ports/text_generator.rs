//! Text-generation service port definition.

use std::fmt;

use crate::domain::{AppError, GenerationSettings};

/// Environment variables checked for the API credential, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Credential for the text-generation service.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key. Blank input yields `None`.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() { None } else { Some(Self(value.trim().to_string())) }
    }

    /// Read the key from the first non-blank variable in [`API_KEY_ENV_VARS`].
    pub fn from_env() -> Option<Self> {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find_map(ApiKey::new)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Request sent to the text-generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Model identifier.
    pub model: String,
    /// Fully rendered prompt text.
    pub prompt: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Reasoning token budget.
    pub thinking_budget: u32,
}

impl GenerationRequest {
    pub fn new(prompt: String, settings: &GenerationSettings) -> Self {
        Self {
            model: settings.model.clone(),
            prompt,
            temperature: settings.temperature,
            thinking_budget: settings.thinking_budget,
        }
    }
}

/// Port for text-generation operations.
pub trait TextGenerator {
    /// Generate text for `request`. An empty string is a valid successful result.
    fn generate(&self, api_key: &ApiKey, request: &GenerationRequest) -> Result<String, AppError>;
}
