// Module definitions
pub mod core;
pub mod eval;
pub mod server;
pub mod setup;

// Essential re-exports
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use eval::{EvalexprEvaluator, Evaluator, ParsedExpression};
pub use server::{AppState, HistoryStore, Operation};

// Main entry point
pub async fn run(config: Config) -> Result<()> {
    config.log_startup();
    server::run_server(&config).await
}

pub async fn load_config(explicit: Option<&str>) -> Result<Config> {
    Config::load(explicit).await
}
