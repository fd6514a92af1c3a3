mod text_generator;

pub use text_generator::{API_KEY_ENV_VARS, ApiKey, GenerationRequest, TextGenerator};
