//! Configuration loading and management for lensgen.
//!
//! Loads settings from `lensgen.toml` with environment variable overrides for
//! sensitive data. The file is optional; the tool normally runs on defaults
//! plus `HF_API_TOKEN` alone.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Model used when neither `HF_MODEL` nor the config file names one.
pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.3";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(
        "HF_API_TOKEN (or HF_TOKEN) is not set. Create a Hugging Face token and export it before running."
    )]
    MissingToken,
}

/// Input and output locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Résumé source file
    #[serde(default = "default_resume_path")]
    pub resume: PathBuf,
    /// Generated lens document
    #[serde(default = "default_output_path")]
    pub output: PathBuf,
}

fn default_resume_path() -> PathBuf {
    PathBuf::from("resume.txt")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("data").join("resume_lenses.json")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            resume: default_resume_path(),
            output: default_output_path(),
        }
    }
}

/// API credential, only ever read from the environment
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    pub token: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Model identifier; `HF_MODEL` wins over this
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(skip)]
    pub api: ApiConfig,
}

impl Config {
    /// Load configuration from the default location (lensgen.toml in cwd or
    /// home), falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                let mut config = Config::default();
                config.apply_env();
                Ok(config)
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env();
        Ok(config)
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from("lensgen.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join("lensgen").join("lensgen.toml");
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }

    /// Credential from `HF_API_TOKEN`, falling back to `HF_TOKEN`; a model id
    /// from `HF_MODEL` overrides the file. Empty values count as unset.
    fn apply_env(&mut self) {
        self.api.token = std::env::var("HF_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| std::env::var("HF_TOKEN").ok().filter(|t| !t.is_empty()));
        if let Ok(model) = std::env::var("HF_MODEL") {
            if !model.is_empty() {
                self.model = Some(model);
            }
        }
    }

    /// Get the API token, failing before any network call is attempted
    pub fn api_token(&self) -> Result<&str, ConfigError> {
        self.api.token.as_deref().ok_or(ConfigError::MissingToken)
    }

    /// Get the active model identifier
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_paths_and_model() {
        let config = Config::default();
        assert_eq!(config.paths.resume, PathBuf::from("resume.txt"));
        assert_eq!(
            config.paths.output,
            PathBuf::from("data").join("resume_lenses.json")
        );
        assert_eq!(config.model(), DEFAULT_MODEL);
    }

    #[test]
    fn missing_token_is_an_error_naming_both_variables() {
        let config = Config::default();
        let err = config.api_token().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("HF_API_TOKEN"));
        assert!(message.contains("HF_TOKEN"));
    }

    #[test]
    fn file_values_parse_with_partial_sections() {
        let config: Config = toml::from_str(
            r#"
            model = "org/other-model"

            [paths]
            resume = "cv.txt"
            "#,
        )
        .unwrap();
        assert_eq!(config.model(), "org/other-model");
        assert_eq!(config.paths.resume, PathBuf::from("cv.txt"));
        // Unspecified fields keep their defaults.
        assert_eq!(
            config.paths.output,
            PathBuf::from("data").join("resume_lenses.json")
        );
    }

    #[test]
    fn empty_file_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.paths.resume, PathBuf::from("resume.txt"));
    }
}
