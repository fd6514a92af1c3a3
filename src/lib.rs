//! strategist: compile a customer profile into an analysis prompt and fetch a two-angle sales strategy.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{analyze, build_store, preview_prompt};
pub use app::config::{CONFIG_FILE, load_config};
pub use app::{AnalysisRequester, ProfileStore, SubmitOutcome};
pub use domain::{
    AnalysisResult, AnalysisState, ApiConfig, AppConfig, AppError, CustomerProfile, FieldUpdate,
    Gender, GenerationSettings, Locale, ProfileField, PromptOptions, render_prompt,
};
pub use ports::{ApiKey, GenerationRequest, TextGenerator};
pub use services::{HttpGeminiClient, load_profile};
