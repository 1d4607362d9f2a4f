pub const APP_TITLE: &str = "CALC HISTORY SERVER";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVER_NAME: &str = env!("CARGO_PKG_NAME");

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HISTORY_FILE: &str = "data.json";

pub const CONFIG_DIR: &str = ".calc";
pub const CONFIG_FILE_NAME: &str = "calc.toml";
pub const CONFIG_ENV_VAR: &str = "CALC_HISTORY_CONFIG";
