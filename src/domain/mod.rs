pub mod analysis;
pub mod configuration;
pub mod error;
pub mod locale;
pub mod profile;
pub mod prompt;

pub use analysis::{AnalysisResult, AnalysisState};
pub use configuration::{ApiConfig, AppConfig, GenerationSettings, parse_config_content};
pub use error::AppError;
pub use locale::Locale;
pub use profile::{BIRTHDAY_FORMAT, CustomerProfile, FieldUpdate, Gender, ProfileField};
pub use prompt::{PromptOptions, render_prompt};
