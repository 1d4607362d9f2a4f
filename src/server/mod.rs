// =====================================================
// FILE: src/server/mod.rs - ACTIX-WEB SERVER MODULE
// =====================================================

pub mod handlers;
pub mod middleware;
pub mod persistence;
pub mod routes;
pub mod types;
pub mod validation;

pub use middleware::RequestLogMiddleware;
pub use persistence::HistoryStore;
pub use types::{AppState, ExpressionQuery, Operation};

use crate::core::prelude::*;
use actix_web::{dev::Server, web, App, HttpServer};

pub fn create_web_server(config: &Config, state: web::Data<AppState>) -> Result<Server> {
    let log_requests = config.logging.log_requests;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(RequestLogMiddleware::new(log_requests))
            .configure(routes::configure)
    })
    .workers(config.server.workers)
    .shutdown_timeout(config.server.shutdown_timeout)
    .bind((config.server.host.as_str(), config.server.port))
    .map_err(AppError::Io)?
    .run();

    log::info!(
        "Listening on http://{}:{}",
        config.server.host,
        config.server.port
    );
    Ok(server)
}

pub async fn run_server(config: &Config) -> Result<()> {
    let state = web::Data::new(AppState::from_config(config)?);
    log::info!(
        "History store ready at {}",
        state.store.get_file_path().display()
    );

    let started = Instant::now();
    create_web_server(config, state)?
        .await
        .map_err(AppError::Io)?;

    log::info!("Server stopped after {}s", started.elapsed().as_secs());
    Ok(())
}
