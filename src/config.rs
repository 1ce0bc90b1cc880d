use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::DEFAULT_ENDPOINT;
use crate::error::{GhIssuesError, Result};
use crate::types::RepoPath;

pub const DEFAULT_PATH: &str = "the-road-to-learn-react/the-road-to-learn-react";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GITHUB_PERSONAL_ACCESS_TOKEN"];

#[derive(Deserialize, Serialize, Default, Debug, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| GhIssuesError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| GhIssuesError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;
        let write_err = |source| GhIssuesError::ConfigWrite {
            path: config_path.clone(),
            source,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let contents = toml::to_string(self).map_err(|e| {
            write_err(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;
        std::fs::write(&config_path, contents).map_err(write_err)?;

        Ok(config_path)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "gh-issues")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(GhIssuesError::NoConfigDir)
    }

    /// Get token with env vars taking precedence over config file
    pub fn token(&self) -> Result<String> {
        self.resolve_token(|name| std::env::var(name).ok())
    }

    fn resolve_token(&self, env: impl Fn(&str) -> Option<String>) -> Result<String> {
        TOKEN_ENV_VARS
            .iter()
            .find_map(|name| env(name).filter(|v| !v.trim().is_empty()))
            .or_else(|| self.token.clone())
            .ok_or(GhIssuesError::MissingToken)
    }

    pub fn endpoint(&self) -> Result<Url> {
        let raw = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        let url = Url::parse(raw).map_err(|_| GhIssuesError::InvalidEndpoint(raw.to_string()))?;

        match url.scheme() {
            "https" | "http" => Ok(url),
            _ => Err(GhIssuesError::InvalidEndpoint(raw.to_string())),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Get path, preferring explicit argument over default
    pub fn resolve_path(&self, explicit: Option<&str>) -> Result<RepoPath> {
        explicit
            .or(self.default_path.as_deref())
            .unwrap_or(DEFAULT_PATH)
            .parse()
    }
}
