//! Profile-to-analysis request pipeline.

use chrono::{Local, NaiveDate};

use crate::domain::{
    AppError, CustomerProfile, GenerationSettings, Locale, PromptOptions, render_prompt,
};
use crate::ports::{ApiKey, GenerationRequest, TextGenerator};

/// Renders a profile into the analysis prompt and obtains the generated narrative.
pub struct AnalysisRequester<G: TextGenerator> {
    generator: G,
    api_key: Option<ApiKey>,
    settings: GenerationSettings,
    locale: Locale,
    today: fn() -> NaiveDate,
}

impl<G: TextGenerator> AnalysisRequester<G> {
    /// `api_key` is the credential read at startup; `None` makes every request a configuration error.
    pub fn new(
        generator: G,
        api_key: Option<ApiKey>,
        settings: GenerationSettings,
        locale: Locale,
    ) -> Self {
        Self { generator, api_key, settings, locale, today: local_today }
    }

    /// Override the date used for the age shown in the prompt.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn prompt_options(&self) -> PromptOptions {
        PromptOptions::new(self.locale).with_reference_date((self.today)())
    }

    /// Render the prompt that [`request_analysis`](Self::request_analysis) would send.
    pub fn render(&self, profile: &CustomerProfile) -> String {
        render_prompt(profile, &self.prompt_options())
    }

    /// Generate the sales-strategy analysis for `profile`.
    ///
    /// Fails with [`AppError::Configuration`] before any request when no key
    /// is configured, and with [`AppError::Upstream`] when the call fails.
    /// A successful but empty reply becomes the locale's fallback text.
    pub fn request_analysis(&self, profile: &CustomerProfile) -> Result<String, AppError> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            AppError::config_error("API key not found: set GEMINI_API_KEY or API_KEY")
        })?;

        let request = GenerationRequest::new(self.render(profile), &self.settings);

        let text = self.generator.generate(api_key, &request).inspect_err(|err| {
            tracing::error!(model = %request.model, error = %err, "Text generation failed");
        })?;

        if text.trim().is_empty() {
            tracing::warn!(model = %request.model, "Text generation returned no content");
            return Ok(self.locale.empty_analysis_fallback().to_string());
        }

        Ok(text)
    }
}

pub(crate) fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
