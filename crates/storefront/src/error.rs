//! Unified error handling for route handlers.
//!
//! Route handlers return `Result<T, AppError>`; the `IntoResponse` impl maps
//! each error to an HTTP status and a client-safe message. Upstream fetch
//! failures never surface here - they are absorbed into the catalog load
//! state once, at load time (see `catalog::store`).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The catalog has not loaded (still loading, or the load failed).
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::CatalogUnavailable(_)) {
            tracing::warn!(error = %self, "Request while catalog unavailable");
        }

        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::CatalogUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        // Don't expose load-failure details to clients
        let message = match &self {
            Self::NotFound(_) => self.to_string(),
            Self::CatalogUnavailable(_) => "The catalog is not available yet".to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "Not found: product 123");

        let err = AppError::CatalogUnavailable("still loading".to_string());
        assert_eq!(err.to_string(), "Catalog unavailable: still loading");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::CatalogUnavailable("test".to_string())),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
