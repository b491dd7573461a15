// src/core/config_manager.rs
//! Layered configuration: defaults, optional YAML file, environment, CLI flags

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_CONFIG_FILE: &str = "resume-coach.yaml";
pub const DEFAULT_LOG_FILE: &str = "/tmp/resume-coach.log";
pub const BASE_URL_ENV: &str = "RESUME_COACH_API_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigManager {
    pub environment: String,
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    /// No timeout when unset; a request waits until the transport resolves
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: PathBuf,
    pub level: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ProfileConfig {
    service: Option<ServiceConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    local: Option<ProfileConfig>,
    production: Option<ProfileConfig>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: None,
        }
    }
}

impl ConfigManager {
    /// Load all configuration layers except CLI flags
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let environment = Self::get_environment();

        let mut config = match Self::resolve_config_path(config_path)? {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                Self::from_yaml_str(&content, &environment)
                    .with_context(|| format!("Failed to parse {}", path.display()))?
            }
            None => Self::defaults(&environment),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn defaults(environment: &str) -> Self {
        Self {
            environment: environment.to_string(),
            service: ServiceConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Parse a config file and pick the section for `environment`
    pub fn from_yaml_str(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content).context("Invalid YAML config")?;

        let profile = match environment {
            "production" => file.production,
            _ => file.local,
        }
        .unwrap_or_default();

        Ok(Self {
            environment: environment.to_string(),
            service: profile.service.unwrap_or_default(),
            logging: profile.logging.unwrap_or_default(),
        })
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.service.base_url = url;
        }
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.service.base_url = url;
        }
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: Option<u64>) -> Self {
        if timeout_seconds.is_some() {
            self.service.timeout_seconds = timeout_seconds;
        }
        self
    }

    fn get_environment() -> String {
        std::env::var("ENVIRONMENT")
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn resolve_config_path(user: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = user {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Ok(Some(path.to_path_buf()));
        }

        let default = PathBuf::from(DEFAULT_CONFIG_FILE);
        if default.exists() {
            info!("Using config file: {}", default.display());
            Ok(Some(default))
        } else {
            Ok(None)
        }
    }
}
