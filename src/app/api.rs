//! Library entry points wiring configuration, credential and HTTP client together.

use crate::app::requester::local_today;
use crate::app::{AnalysisRequester, ProfileStore};
use crate::domain::{AppConfig, AppError, CustomerProfile, PromptOptions, render_prompt};
use crate::ports::ApiKey;
use crate::services::HttpGeminiClient;

/// Build a profile store backed by the Gemini HTTP client.
pub fn build_store(
    config: &AppConfig,
    api_key: Option<ApiKey>,
    profile: CustomerProfile,
) -> Result<ProfileStore<HttpGeminiClient>, AppError> {
    let client = HttpGeminiClient::new(&config.api)?;
    let requester =
        AnalysisRequester::new(client, api_key, config.generation.clone(), config.locale);
    Ok(ProfileStore::with_profile(requester, profile))
}

/// Generate an analysis for `profile` in one call.
///
/// The credential is passed in explicitly; see [`ApiKey::from_env`].
pub fn analyze(
    config: &AppConfig,
    api_key: Option<ApiKey>,
    profile: &CustomerProfile,
) -> Result<String, AppError> {
    let client = HttpGeminiClient::new(&config.api)?;
    AnalysisRequester::new(client, api_key, config.generation.clone(), config.locale)
        .request_analysis(profile)
}

/// Render the prompt for `profile` as it would be sent today, without building an HTTP client.
pub fn preview_prompt(config: &AppConfig, profile: &CustomerProfile) -> String {
    let options = PromptOptions::new(config.locale).with_reference_date(local_today());
    render_prompt(profile, &options)
}
