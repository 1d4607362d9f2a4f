// src/core/config.rs
use crate::core::constants::{DEFAULT_HISTORY_FILE, DEFAULT_HOST, DEFAULT_PORT};
use crate::core::prelude::*;
use serde::{Deserialize, Serialize};

// TOML Configuration Structure
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    server: Option<ServerConfigToml>,
    #[serde(default)]
    storage: Option<StorageConfigToml>,
    #[serde(default)]
    logging: Option<LoggingConfigToml>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct ServerConfigToml {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_workers")]
    workers: usize,
    #[serde(default = "default_shutdown_timeout")]
    shutdown_timeout: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct StorageConfigToml {
    #[serde(default = "default_content_root")]
    content_root: String,
    #[serde(default = "default_history_file")]
    history_file: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct LoggingConfigToml {
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default = "default_log_requests")]
    log_requests: bool,
}

// Server Defaults
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_workers() -> usize {
    2
}
fn default_shutdown_timeout() -> u64 {
    5
}

// Storage Defaults
fn default_content_root() -> String {
    ".".to_string()
}
fn default_history_file() -> String {
    DEFAULT_HISTORY_FILE.to_string()
}

// Logging Defaults
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_requests() -> bool {
    true
}

// Main Configuration Structures
#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<String>,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub shutdown_timeout: u64,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub content_root: PathBuf,
    pub history_file: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_level: String,
    pub log_requests: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from(default_content_root()),
            history_file: default_history_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_requests: default_log_requests(),
        }
    }
}

impl Config {
    /// Resolves the config file (explicit path, env var, working dir, exe dir)
    /// and writes a default one next to the executable when none exists.
    pub async fn load(explicit: Option<&str>) -> Result<Self> {
        if let Some(path) = explicit {
            if !Path::new(path).exists() {
                return Err(AppError::Validation(format!(
                    "Config file '{}' not found",
                    path
                )));
            }
        }

        for path in crate::setup::setup_toml::get_config_paths(explicit) {
            if path.exists() {
                return Self::from_file(&path).await;
            }
        }

        let path = crate::setup::setup_toml::ensure_config_exists().await?;
        Self::from_file(&path).await
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::Io)?;

        let mut config = Self::parse_toml(&content)?;
        config.config_path = Some(path.as_ref().to_string_lossy().into_owned());
        Ok(config)
    }

    pub fn parse_toml(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| AppError::Validation(format!("TOML: {}", e)))?;

        let server = file
            .server
            .map_or_else(ServerConfig::default, |s| ServerConfig {
                host: s.host,
                port: s.port,
                workers: s.workers,
                shutdown_timeout: s.shutdown_timeout,
            });

        let storage = file
            .storage
            .map_or_else(StorageConfig::default, |s| StorageConfig {
                content_root: PathBuf::from(s.content_root),
                history_file: s.history_file,
            });

        let logging = file
            .logging
            .map_or_else(LoggingConfig::default, |l| LoggingConfig {
                log_level: l.log_level,
                log_requests: l.log_requests,
            });

        let config = Self {
            config_path: None,
            server,
            storage,
            logging,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.workers == 0 {
            return Err(AppError::Validation(
                "server.workers must be at least 1".to_string(),
            ));
        }

        let file = self.storage.history_file.trim();
        if file.is_empty() {
            return Err(AppError::Validation(
                "storage.history_file cannot be empty".to_string(),
            ));
        }
        if file.contains('/') || file.contains('\\') {
            return Err(AppError::Validation(format!(
                "storage.history_file '{}' must be a plain file name",
                file
            )));
        }

        Ok(())
    }

    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    pub fn history_path(&self) -> PathBuf {
        self.storage
            .content_root
            .join(self.storage.history_file.trim())
    }

    pub fn log_startup(&self) {
        log::info!(
            "{} v{}",
            crate::core::constants::APP_TITLE,
            crate::core::constants::VERSION
        );
        if let Some(path) = self.config_path() {
            log::info!("Config: {}", path);
        }
        log::info!(
            "Server Config: {}:{}, Workers: {}",
            self.server.host,
            self.server.port,
            self.server.workers
        );
        log::info!("History file: {}", self.history_path().display());
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
