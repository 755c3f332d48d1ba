use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const BASE_URL_ENV: &str = "ANTHROPIC_BASE_URL";
pub const TIMEOUT_ENV: &str = "TWOSPLIT_TIMEOUT_SECS";

/// Anthropic API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Raw key, for the request header only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey([REDACTED])")
    }
}

/// Backend settings, overridable from the config file and environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Messages API root (default: "https://api.anthropic.com")
    pub base_url: String,
    /// Value of the `anthropic-version` header
    pub api_version: String,
    /// Upper bound on each backend call
    pub request_timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
            request_timeout_secs: 120,
        }
    }
}

impl BackendSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Layout of `config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub backend: BackendSettings,
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct TwosplitConfig {
    pub api_key: ApiKey,
    pub backend: BackendSettings,
}

impl TwosplitConfig {
    /// Default config file location (~/.twosplit/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".twosplit").join("config.toml"))
    }

    /// Load config from the process environment.
    ///
    /// An explicit `path` must exist. Without one, the default location is read
    /// only if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_sources(path, |name| std::env::var(name).ok())
    }

    /// Resolve defaults, then the config file, then environment overrides
    pub fn from_sources(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = env(API_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .map(ApiKey::new)
            .ok_or(ConfigError::MissingApiKey)?;

        let file = match path {
            Some(path) => Self::read_file(path)?,
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::read_file(&default)?,
                _ => FileConfig::default(),
            },
        };

        let mut backend = file.backend;
        if let Some(base_url) = env(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            backend.base_url = base_url;
        }
        if let Some(timeout) = env(TIMEOUT_ENV) {
            backend.request_timeout_secs = timeout
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidEnv {
                    name: TIMEOUT_ENV,
                    value: timeout,
                })?;
        }
        if backend.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        backend.base_url = backend.base_url.trim_end_matches('/').to_string();

        Ok(Self { api_key, backend })
    }

    fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
