// src/main.rs
use calc_history_server::core::logging::init_logger;
use calc_history_server::{load_config, Result};

#[actix_web::main]
async fn main() -> Result<()> {
    // Optional first argument: path to a calc.toml
    let config_arg = std::env::args().nth(1);

    let config = match load_config(config_arg.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            init_logger("info");
            log::error!("Config loading failed: {}", e);
            return Err(e);
        }
    };

    init_logger(&config.logging.log_level);
    calc_history_server::run(config).await
}
