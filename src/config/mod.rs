//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `GRADER_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::DEFAULT_MAX_TEXT_BYTES;

/// Port used when `GRADER_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `GRADER_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Sentence-encoder model directory (`config.json`, `model.safetensors`, `tokenizer.json`).
    pub model_path: Option<PathBuf>,

    /// Origins allowed by the CORS layer. Empty disables CORS handling.
    pub cors_origins: Vec<String>,

    /// Largest accepted answer-key or submission text, in bytes. Default: 1 MiB.
    pub max_text_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model_path: None,
            cors_origins: Vec::new(),
            max_text_bytes: DEFAULT_MAX_TEXT_BYTES,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "GRADER_PORT";
    const ENV_BIND_ADDR: &'static str = "GRADER_BIND_ADDR";
    const ENV_MODEL_PATH: &'static str = "GRADER_MODEL_PATH";
    const ENV_CORS_ORIGINS: &'static str = "GRADER_CORS_ORIGINS";
    const ENV_MAX_TEXT_BYTES: &'static str = "GRADER_MAX_TEXT_BYTES";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let cors_origins = Self::parse_list_from_env(Self::ENV_CORS_ORIGINS);
        let max_text_bytes =
            Self::parse_usize_from_env(Self::ENV_MAX_TEXT_BYTES, defaults.max_text_bytes);

        Ok(Self {
            port,
            bind_addr,
            model_path,
            cors_origins,
            max_text_bytes,
        })
    }

    /// Validates paths and basic invariants (does not load the model).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if self.max_text_bytes == 0 {
            return Err(ConfigError::InvalidTextLimit);
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_list_from_env(var_name: &str) -> Vec<String> {
        env::var(var_name)
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn parse_usize_from_env(var_name: &str, default: usize) -> usize {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
