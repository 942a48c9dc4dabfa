use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Empty allows any origin
    pub cors_allowed_origins: Vec<String>,

    /// User promoted to admin at startup, if registered
    pub admin_email: Option<String>,
    /// Directory holding `tags.json` and `ingredients.json` seed files
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: optional_var("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            cors_allowed_origins: optional_var("CORS_ALLOWED_ORIGINS")
                .map(|value| parse_list(&value))
                .unwrap_or_default(),
            admin_email: optional_var("ADMIN_EMAIL"),
            data_dir: optional_var("DATA_DIR").map(PathBuf::from),
        })
    }
}

/// Reads a variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
