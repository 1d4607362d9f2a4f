use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::io;

#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    Validation(String),
    InvalidExpression(String),
    Evaluation(String),
    Storage(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "IO Error: {}", err),
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::InvalidExpression(msg) => write!(f, "Invalid Expression: {}", msg),
            AppError::Evaluation(msg) => write!(f, "Evaluation Error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Rejected expressions become a bare 400; everything else is a logged 500.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidExpression(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::InvalidExpression(reason) => {
                log::debug!("Rejected expression: {}", reason);
                HttpResponse::BadRequest().finish()
            }
            other => {
                log::error!("Request failed: {}", other);
                HttpResponse::build(self.status_code()).json(json!({
                    "error": "internal server error"
                }))
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_expression_maps_to_bad_request() {
        let err = AppError::InvalidExpression("empty".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_and_evaluation_failures_map_to_server_error() {
        let failures = [
            AppError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
            AppError::Storage("expected value at line 1".to_string()),
            AppError::Evaluation("division by zero".to_string()),
        ];

        for err in failures {
            assert_eq!(
                err.status_code(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "{} should be a server error",
                err
            );
        }
    }

    #[test]
    fn test_json_errors_become_storage_errors() {
        let parse_err = serde_json::from_str::<Vec<u8>>("[1,").unwrap_err();
        assert!(matches!(AppError::from(parse_err), AppError::Storage(_)));
    }
}
