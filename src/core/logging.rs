// src/core/logging.rs
use log::LevelFilter;
use std::str::FromStr;

/// Installs env_logger with the configured level. `RUST_LOG` wins when set.
pub fn init_logger(level: &str) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(parse_level(level))
        .format_timestamp_millis();

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_err() {
        log::warn!("Logger already initialized");
    }
}

pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }
}
