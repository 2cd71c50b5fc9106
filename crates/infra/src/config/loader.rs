//! Configuration loader
//!
//! Loads relay configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `SAP_USERNAME`, `SAP_PASSWORD`: Basic auth credentials (required)
//! - `SAP_CLIENT`: SAP client number for the user-context cookie (required)
//! - `SAP_LOGIN_URL`, `SAP_PLANT_MAPPING_URL`, `SAP_NOTIFICATIONS_URL`,
//!   `SAP_PM_DETAILS_URL`, `SAP_WORK_ORDERS_URL`: entity-set URLs (required)
//! - `PORT`: Listen port (default 3000)
//! - `SAP_ACCEPT_INVALID_CERTS`: Skip TLS certificate validation (default false)
//! - `SAP_CSRF_FETCH`: Send `x-csrf-token: fetch` (default true)
//! - `SAP_TIMEOUT_SECS`: Outbound request timeout in seconds (default none)
//! - `PMRELAY_LOG_FORMAT`: `pretty` or `json` (default pretty)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./pmrelay.json` or `./pmrelay.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pmrelay_domain::constants::DEFAULT_PORT;
use pmrelay_domain::{
    LogFormat, LoggingConfig, RelayConfig, RelayError, Result, SapConfig, SapEndpoints,
    ServerConfig,
};

/// Where a configuration was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Environment,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Environment => write!(f, "environment"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to a config file. When no config file
/// exists either, the environment error is returned since it names the
/// missing variable.
///
/// The returned [`ConfigSource`] lets the caller log the origin once its
/// tracing subscriber is installed.
///
/// # Errors
/// Returns `RelayError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<(RelayConfig, ConfigSource)> {
    match load_from_env() {
        Ok(config) => Ok((config, ConfigSource::Environment)),
        Err(env_err) => match probe_config_paths() {
            Some(path) => {
                let config = load_from_file(Some(path.clone()))?;
                Ok((config, ConfigSource::File(path)))
            }
            None => Err(env_err),
        },
    }
}

/// Load configuration from environment variables
///
/// All required environment variables must be present. Returns an error
/// if any are missing.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `RelayError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<RelayConfig> {
    let endpoints = SapEndpoints {
        login: env_var("SAP_LOGIN_URL")?,
        plant_mapping: env_var("SAP_PLANT_MAPPING_URL")?,
        notifications: env_var("SAP_NOTIFICATIONS_URL")?,
        pm_details: env_var("SAP_PM_DETAILS_URL")?,
        work_orders: env_var("SAP_WORK_ORDERS_URL")?,
    };

    let sap = SapConfig {
        username: env_var("SAP_USERNAME")?,
        password: env_var("SAP_PASSWORD")?,
        client: env_var("SAP_CLIENT")?,
        endpoints,
        accept_invalid_certs: env_bool("SAP_ACCEPT_INVALID_CERTS", false)?,
        csrf_fetch: env_bool("SAP_CSRF_FETCH", true)?,
        timeout_secs: env_parse::<u64>("SAP_TIMEOUT_SECS")?,
    };

    let port = env_parse::<u16>("PORT")?.unwrap_or(DEFAULT_PORT);

    let format = match optional_env_var("PMRELAY_LOG_FORMAT") {
        Some(value) => LogFormat::from_str(&value).map_err(RelayError::Config)?,
        None => LogFormat::default(),
    };

    Ok(RelayConfig {
        server: ServerConfig { port },
        sap,
        logging: LoggingConfig { format },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `RelayError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<RelayConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RelayError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RelayError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RelayError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `RelayError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<RelayConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| RelayError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| RelayError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(RelayError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./pmrelay.{json,toml}`)
/// 2. Parent directory
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("pmrelay.json"),
        dir.join("pmrelay.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `RelayError::Config` if the variable is not set or empty.
fn env_var(key: &str) -> Result<String> {
    optional_env_var(key).ok_or_else(|| {
        RelayError::Config(format!("Missing required environment variable: {}", key))
    })
}

fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse an optional numeric environment variable
///
/// # Errors
/// Returns `RelayError::Config` if the variable is set but not a valid value.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    optional_env_var(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|e| RelayError::Config(format!("Invalid {}: {}", key, e)))
        })
        .transpose()
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Arguments
/// * `key` - Environment variable name
/// * `default` - Default value if variable is not set
///
/// # Errors
/// Returns `RelayError::Config` if the variable is set to anything else.
fn env_bool(key: &str, default: bool) -> Result<bool> {
    let Some(value) = optional_env_var(key) else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(RelayError::Config(format!("Invalid boolean for {}: {}", key, value))),
    }
}
