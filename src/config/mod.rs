mod api;
mod defaults;
mod validation;

use crate::cli::Args;
use crate::error::CreatorError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use api::{ApiConfig, ModelConfig, OutputConfig};
pub use defaults::{default_request_timeout, API_KEY_ENV, DEFAULT_API_ENDPOINT, DEFAULT_MODEL};
pub use validation::{expand_env_var_in_string, normalize_endpoint};

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_endpoint: String,
    pub model: String,
    pub request_timeout: u64,
    pub verbose: bool,
    pub plain: bool,
}

/// Contents of `.creatorai.yaml` (or the JSON equivalent).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self, CreatorError> {
        let file_config =
            FileConfig::load().map_err(|e| CreatorError::Config(format!("{:#}", e)))?;
        Ok(Self::resolve(args, &file_config, |key| env::var(key).ok()))
    }

    /// Precedence for every setting: CLI args > env vars > config file > default.
    pub fn resolve<F>(args: &Args, file_config: &FileConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty());

        let api_endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| lookup("AI_API_ENDPOINT"))
            .or_else(|| {
                file_config
                    .api
                    .endpoint
                    .as_deref()
                    .map(|e| expand_env_var_in_string(e, &lookup))
            })
            .filter(|e| !e.trim().is_empty())
            .map(|e| normalize_endpoint(e.trim()))
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

        let model = args
            .model
            .clone()
            .or_else(|| lookup("AI_MODEL"))
            .or_else(|| file_config.model.default_model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        // A zero timeout would fail every request; treat it as unset.
        let request_timeout = lookup("AI_REQUEST_TIMEOUT")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|t| *t > 0)
            .or(file_config.api.request_timeout.filter(|t| *t > 0))
            .unwrap_or_else(default_request_timeout);

        let verbose = args.verbose
            || lookup("AI_VERBOSE")
                .map(|v| parse_flag(&v))
                .or(file_config.output.verbose)
                .unwrap_or(false);

        let plain = args.plain || file_config.output.plain.unwrap_or(false);

        Config {
            api_key,
            api_endpoint,
            model,
            request_timeout,
            verbose,
            plain,
        }
    }

    pub fn require_api_key(&self) -> Result<&str, CreatorError> {
        self.api_key.as_deref().ok_or_else(|| {
            CreatorError::Config(format!("{} environment variable not set", API_KEY_ENV))
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(FileConfig::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|s| s.to_str());
        let config = if matches!(extension, Some("yaml") | Some("yml")) {
            serde_yaml::from_str(&contents).with_context(|| {
                format!("Failed to parse YAML config file: {}", path.display())
            })?
        } else {
            serde_json::from_str(&contents).with_context(|| {
                format!("Failed to parse JSON config file: {}", path.display())
            })?
        };

        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        // Local override first, then the user's global config.
        let mut paths = vec![
            PathBuf::from(".creatorai.yaml"),
            PathBuf::from(".creatorai.yml"),
            PathBuf::from(".creatorai.json"),
        ];

        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("creatorai");
            paths.push(config_dir.join("creatorai.yaml"));
            paths.push(config_dir.join("creatorai.yml"));
            paths.push(config_dir.join("creatorai.json"));
        }

        paths
    }
}
