//! Output language for prompts and user-facing messages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Language the prompt is written in and the generated analysis is expected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Traditional Chinese (Taiwan).
    #[default]
    #[serde(rename = "zh-TW")]
    ZhTw,
    /// English.
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::ZhTw => "zh-TW",
            Locale::En => "en",
        }
    }

    /// Text shown when the service succeeds but returns nothing.
    pub fn empty_analysis_fallback(&self) -> &'static str {
        match self {
            Locale::ZhTw => "無法產生分析結果。",
            Locale::En => "Unable to produce an analysis.",
        }
    }

    /// Message shown when no API credential is configured.
    pub fn missing_credential_message(&self) -> &'static str {
        match self {
            Locale::ZhTw => "尚未設定 API 金鑰，無法進行分析。",
            Locale::En => "No API key is configured; analysis is unavailable.",
        }
    }

    /// Message shown when the generation service call fails.
    pub fn upstream_failure_message(&self) -> &'static str {
        match self {
            Locale::ZhTw => "分析生成失敗，請稍後再試。",
            Locale::En => "Something went wrong while generating the analysis. Please try again.",
        }
    }

    /// Pick the fixed user-facing message for a failed analysis.
    pub fn failure_message(&self, error: &AppError) -> &'static str {
        if error.is_configuration() {
            self.missing_credential_message()
        } else {
            self.upstream_failure_message()
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh-tw" | "zh_tw" | "zh" => Ok(Locale::ZhTw),
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            other => {
                Err(AppError::InvalidConfig(format!("Unsupported locale '{}': use zh-TW or en", other)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("zh-TW".parse::<Locale>().unwrap(), Locale::ZhTw);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn failure_message_follows_error_kind() {
        let locale = Locale::En;
        let config = AppError::config_error("missing");
        let upstream = AppError::upstream("boom");

        assert_eq!(locale.failure_message(&config), locale.missing_credential_message());
        assert_eq!(locale.failure_message(&upstream), locale.upstream_failure_message());
        assert!(!locale.failure_message(&upstream).contains("boom"));
    }

    #[test]
    fn traditional_chinese_messages_match_product_wording() {
        assert_eq!(Locale::ZhTw.upstream_failure_message(), "分析生成失敗，請稍後再試。");
        assert_eq!(Locale::ZhTw.empty_analysis_fallback(), "無法產生分析結果。");
    }

    #[test]
    fn fallbacks_are_not_empty() {
        for locale in [Locale::ZhTw, Locale::En] {
            assert!(!locale.empty_analysis_fallback().trim().is_empty());
        }
    }
}
