//! Outcome slot for the most recent analysis submission.

use serde::Serialize;

/// Where a submission currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisState {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Latest analysis outcome as shown to the salesperson.
///
/// After a submission settles, exactly one of `text` or `error` is populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub text: String,
    pub is_loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn pending() -> Self {
        Self { text: String::new(), is_loading: true, error: None }
    }

    pub fn succeeded(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_loading: false, error: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { text: String::new(), is_loading: false, error: Some(message.into()) }
    }

    pub fn state(&self) -> AnalysisState {
        if self.is_loading {
            AnalysisState::Pending
        } else if self.error.is_some() {
            AnalysisState::Failed
        } else if self.text.is_empty() {
            AnalysisState::Idle
        } else {
            AnalysisState::Succeeded
        }
    }
}
