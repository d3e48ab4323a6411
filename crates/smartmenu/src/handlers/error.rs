//! Response envelope for failed requests.
//!
//! Every failure renders as `{"error": <message>}` with a status chosen by the
//! pure mapping functions in `smartmenu_core::storage`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use smartmenu_core::menu::ValidationError;
use smartmenu_core::storage::{
    no_rows_status_code, repository_error_to_status_code, RepositoryError,
    ROUTE_NOT_FOUND_STATUS, VALIDATION_ERROR_STATUS,
};

/// A request that did not produce data.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body was not valid JSON or missed a required field.
    #[error("{0}")]
    Validation(String),
    /// The store answered with zero items.
    #[error("{0}")]
    NoRows(&'static str),
    /// The store call failed or an item failed to decode.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// No operation is registered for the method and path.
    #[error("route not found")]
    RouteNotFound,
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            ApiError::Validation(_) => VALIDATION_ERROR_STATUS,
            ApiError::NoRows(_) => no_rows_status_code(),
            ApiError::Repository(err) => repository_error_to_status_code(err),
            ApiError::RouteNotFound => ROUTE_NOT_FOUND_STATUS,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Repository(err) => tracing::error!(error = %err, "Catalog store error"),
            ApiError::Validation(msg) => tracing::warn!(message = %msg, "Rejected request"),
            ApiError::NoRows(msg) => tracing::debug!(message = %msg, "No rows"),
            ApiError::RouteNotFound => tracing::debug!("Route not found"),
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Fallback for every unregistered method and path.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let error = ApiError::from(ValidationError::MissingField("branchId"));

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "branchId is required");
    }

    #[test]
    fn test_no_rows_maps_to_200() {
        let error = ApiError::NoRows("no entity found");

        assert_eq!(error.status_code(), StatusCode::OK);
        assert_eq!(error.to_string(), "no entity found");
    }

    #[test]
    fn test_repository_error_maps_to_500_with_text() {
        let error = ApiError::from(RepositoryError::QueryFailed("Table not found".to_string()));

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Query failed: Table not found");
    }

    #[test]
    fn test_route_not_found_maps_to_404() {
        assert_eq!(ApiError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.to_string(), "route not found");
    }
}
