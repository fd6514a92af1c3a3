pub mod app_config;
pub mod parse;

pub use app_config::{ApiConfig, AppConfig, GenerationSettings};
pub use parse::parse_config_content;
