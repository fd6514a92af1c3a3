use std::io;

use thiserror::Error;

/// Library-wide error type for strategist operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Missing credential or unusable client setup. Detected before any request is sent.
    #[error("{0}")]
    Configuration(String),

    /// The text-generation service failed, timed out, or answered with something unusable.
    #[error("Upstream request failed: {reason}")]
    Upstream { reason: String, status: Option<u16> },

    /// Configuration file content is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Profile content is incomplete or malformed.
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// Profile file could not be decoded.
    #[error("Failed to parse profile {path}: {details}")]
    ProfileFormat { path: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn upstream<S: Into<String>>(reason: S) -> Self {
        AppError::Upstream { reason: reason.into(), status: None }
    }

    pub fn upstream_status<S: Into<String>>(status: u16, reason: S) -> Self {
        AppError::Upstream { reason: reason.into(), status: Some(status) }
    }

    /// True for failures caused by missing or unusable local setup.
    pub fn is_configuration(&self) -> bool {
        matches!(self, AppError::Configuration(_))
    }

    /// True for failures reported by, or on the way to, the text-generation service.
    pub fn is_upstream(&self) -> bool {
        matches!(self, AppError::Upstream { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinguishable() {
        let missing = AppError::config_error("API key not configured");
        assert!(missing.is_configuration());
        assert!(!missing.is_upstream());

        let failed = AppError::upstream_status(503, "Server error");
        assert!(failed.is_upstream());
        assert!(!failed.is_configuration());
    }

    #[test]
    fn upstream_message_carries_reason() {
        let err = AppError::upstream("connection reset");
        assert_eq!(err.to_string(), "Upstream request failed: connection reset");
    }
}
