mod gemini_client_http;
mod profile_file;

pub use gemini_client_http::HttpGeminiClient;
pub use profile_file::{ProfileFormat, load_profile};
