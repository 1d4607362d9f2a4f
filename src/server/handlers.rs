// src/server/handlers.rs
use crate::core::error::AppError;
use crate::server::types::{AppState, ExpressionQuery, Operation};
use crate::server::validation::{validate_create_expression, validate_search_expression};
use actix_web::{web, HttpResponse};
use serde_json::json;

// GET /Operation/History
pub async fn history_handler(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let operations = data.store.load_operations().await?;
    Ok(HttpResponse::Ok().json(operations))
}

// GET /Operation/History/Search?expression=...
pub async fn search_handler(
    data: web::Data<AppState>,
    query: web::Query<ExpressionQuery>,
) -> Result<HttpResponse, AppError> {
    let expression =
        validate_search_expression(query.expression.as_deref(), data.evaluator.as_ref())?;

    let matches = data.store.search_operations(expression).await?;
    log::debug!("Search '{}' matched {} operation(s)", expression, matches.len());

    Ok(HttpResponse::Ok().json(matches))
}

// POST /Operation?expression=...
pub async fn create_handler(
    data: web::Data<AppState>,
    query: web::Query<ExpressionQuery>,
) -> Result<HttpResponse, AppError> {
    let ExpressionQuery { expression } = query.into_inner();

    let result = {
        let parsed = validate_create_expression(expression.as_deref(), data.evaluator.as_ref())?;
        parsed.evaluate()?
    };

    let operation = Operation::new(expression.unwrap_or_default(), result);
    data.store.append_operation(operation.clone()).await?;
    log::info!("{} = {}", operation.expression, operation.result);

    Ok(HttpResponse::Created().json(operation))
}

pub async fn health_handler() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": crate::core::constants::SERVER_NAME,
        "version": crate::core::constants::VERSION,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
