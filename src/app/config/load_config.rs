//! Application configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError, parse_config_content};

/// Config file looked up in the working directory when none is given explicitly.
pub const CONFIG_FILE: &str = "strategist.toml";

/// Load configuration.
///
/// An explicit path must exist. Without one, `strategist.toml` in `work_dir`
/// is used when present, and built-in defaults otherwise.
pub fn load_config(explicit: Option<&Path>, work_dir: &Path) -> Result<AppConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::InvalidConfig(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = work_dir.join(CONFIG_FILE);
            if !candidate.is_file() {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE);
                return Ok(AppConfig::default());
            }
            candidate
        }
    };

    tracing::debug!(path = %path.display(), "Loading config");
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}
