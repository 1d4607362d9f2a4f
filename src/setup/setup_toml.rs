// =====================================================
// FILE: src/setup/setup_toml.rs - DEFAULT CONFIG
// =====================================================

use crate::core::constants::{CONFIG_DIR, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use crate::core::prelude::*;
use tokio::fs;

const DEFAULT_CONFIG: &str = r#"[server]
host = "127.0.0.1"
port = 5000
# Actix worker threads
workers = 2
# Seconds to wait for in-flight requests on shutdown
shutdown_timeout = 5

[storage]
# Directory holding the history file
content_root = "."
history_file = "data.json"

[logging]
# error | warn | info | debug | trace (RUST_LOG overrides)
log_level = "info"
log_requests = true
"#;

pub fn default_config() -> &'static str {
    DEFAULT_CONFIG
}

/// Candidate config locations, most specific first.
pub fn get_config_paths(explicit: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(PathBuf::from(path));
    }

    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            paths.push(PathBuf::from(path));
        }
    }

    paths.push(PathBuf::from(CONFIG_FILE_NAME));

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_DIR).join(CONFIG_FILE_NAME));
        }
    }

    paths
}

pub async fn ensure_config_exists() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().map_err(AppError::Io)?;
    let base_dir = exe_path.parent().ok_or_else(|| {
        AppError::Validation("Cannot determine executable directory".to_string())
    })?;

    write_default_config(&base_dir.join(CONFIG_DIR)).await
}

pub async fn write_default_config(config_dir: &Path) -> Result<PathBuf> {
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)
            .await
            .map_err(AppError::Io)?;
        log::debug!("Created config directory: {}", config_dir.display());
    }

    let config_path = config_dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG)
            .await
            .map_err(AppError::Io)?;
        log::info!("Default config written to {}", config_path.display());
    }

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse_toml(default_config()).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.storage.history_file, "data.json");
    }

    #[test]
    fn test_explicit_path_comes_first() {
        let paths = get_config_paths(Some("custom.toml"));
        assert_eq!(paths.first(), Some(&PathBuf::from("custom.toml")));
        assert!(paths.contains(&PathBuf::from(CONFIG_FILE_NAME)));
    }

    #[tokio::test]
    async fn test_write_default_config_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join(CONFIG_DIR);

        let path = write_default_config(&config_dir).await.unwrap();
        assert_eq!(fs::read_to_string(&path).await.unwrap(), DEFAULT_CONFIG);

        fs::write(&path, "[server]\nport = 9000\n").await.unwrap();
        let again = write_default_config(&config_dir).await.unwrap();
        assert_eq!(again, path);

        let config = Config::from_file(&path).await.unwrap();
        assert_eq!(config.server.port, 9000);
    }
}
