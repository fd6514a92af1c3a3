//! Application configuration models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, Locale};

/// Configuration loaded from `strategist.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Language of the prompt and user-facing messages.
    #[serde(default)]
    pub locale: Locale,
    /// Generation parameters sent with every request.
    #[serde(default)]
    pub generation: GenerationSettings,
    /// Endpoint configuration.
    #[serde(default)]
    pub api: ApiConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.generation.validate()?;
        self.api.validate()?;
        Ok(())
    }
}

/// Model identifier and sampling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationSettings {
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature. Kept above the usual default so the two strategies diverge.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Token budget the model may spend on reasoning before answering.
    #[serde(default = "default_thinking_budget")]
    pub thinking_budget: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            thinking_budget: default_thinking_budget(),
        }
    }
}

impl GenerationSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("generation.model must not be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::InvalidConfig(format!(
                "generation.temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }
        Ok(())
    }
}

fn default_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_temperature() -> f32 {
    0.75
}

fn default_thinking_budget() -> u32 {
    2048
}

/// Text-generation endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Versioned API root; the model path is appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Request timeout in seconds. No client-side timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: None }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == Some(0) {
            return Err(AppError::InvalidConfig(
                "api.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(AppError::InvalidConfig(format!(
                "api.base_url must be http or https, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Full `generateContent` URL for `model`.
    pub fn generate_content_url(&self, model: &str) -> Result<Url, AppError> {
        let raw = format!(
            "{}/models/{}:generateContent",
            self.base_url.as_str().trim_end_matches('/'),
            model.trim()
        );
        Url::parse(&raw)
            .map_err(|e| AppError::InvalidConfig(format!("Invalid endpoint URL '{}': {}", raw, e)))
    }
}

fn default_base_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = AppConfig::default();
        assert_eq!(config.locale, Locale::ZhTw);
        assert_eq!(config.generation.model, "gemini-3-pro-preview");
        assert_eq!(config.generation.temperature, 0.75);
        assert_eq!(config.generation.thinking_budget, 2048);
        assert_eq!(config.api.timeout_secs, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_model() {
        let settings = GenerationSettings { model: " ".to_string(), ..Default::default() };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_temperature() {
        let settings = GenerationSettings { temperature: 2.5, ..Default::default() };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let api = ApiConfig { timeout_secs: Some(0), ..Default::default() };
        assert!(api.validate().is_err());
    }

    #[test]
    fn generate_content_url_appends_model_path() {
        let api = ApiConfig {
            base_url: Url::parse("http://127.0.0.1:1234/v1beta/").unwrap(),
            ..Default::default()
        };
        let url = api.generate_content_url("gemini-test").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:1234/v1beta/models/gemini-test:generateContent");
    }
}
