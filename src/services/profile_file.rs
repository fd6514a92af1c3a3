//! Customer profile files on disk.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, CustomerProfile};

/// Serialization format of a profile file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Toml,
    Json,
    Yaml,
}

impl ProfileFormat {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let extension =
            path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(ProfileFormat::Toml),
            Some("json") => Ok(ProfileFormat::Json),
            Some("yml") | Some("yaml") => Ok(ProfileFormat::Yaml),
            _ => Err(AppError::ProfileFormat {
                path: path.display().to_string(),
                details: "unsupported extension (expected .toml, .json, .yml or .yaml)".to_string(),
            }),
        }
    }
}

/// Read a profile from `path`.
pub fn load_profile(path: &Path) -> Result<CustomerProfile, AppError> {
    let format = ProfileFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    parse_profile(&content, format).map_err(|details| AppError::ProfileFormat {
        path: path.display().to_string(),
        details,
    })
}

fn parse_profile(content: &str, format: ProfileFormat) -> Result<CustomerProfile, String> {
    match format {
        ProfileFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        ProfileFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        ProfileFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    }
}
