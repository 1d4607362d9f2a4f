// =====================================================
// FILE: src/server/routes.rs - ACTIX-WEB ROUTES
// =====================================================

use crate::core::error::AppError;
use crate::server::handlers::{create_handler, health_handler, history_handler, search_handler};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed query strings are rejected like any other bad expression.
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| AppError::InvalidExpression(err.to_string()).into());

    cfg.app_data(query_config)
        .route("/Operation", web::post().to(create_handler))
        .route("/Operation/History", web::get().to(history_handler))
        .route("/Operation/History/Search", web::get().to(search_handler))
        .route("/health", web::get().to(health_handler));
}
