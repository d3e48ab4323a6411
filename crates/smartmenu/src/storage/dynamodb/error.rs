//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `smartmenu_core::storage`.
//! The SDK error text is kept in the message so it reaches the logs and the
//! response body.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use smartmenu_core::storage::RepositoryError;

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    let kind = match err.as_service_error() {
        Some(QueryError::ResourceNotFoundException(_)) => "Table not found",
        Some(QueryError::ProvisionedThroughputExceededException(_)) => "Throughput exceeded",
        Some(QueryError::RequestLimitExceeded(_)) => "Request limit exceeded",
        Some(QueryError::InternalServerError(_)) => "DynamoDB internal server error",
        _ => "Query",
    };
    map_sdk_error(kind, err)
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    let kind = match err.as_service_error() {
        Some(GetItemError::ResourceNotFoundException(_)) => "Table not found",
        Some(GetItemError::ProvisionedThroughputExceededException(_)) => "Throughput exceeded",
        Some(GetItemError::RequestLimitExceeded(_)) => "Request limit exceeded",
        Some(GetItemError::InternalServerError(_)) => "DynamoDB internal server error",
        _ => "GetItem",
    };
    map_sdk_error(kind, err)
}

/// Classify an SDK error, keeping its full display chain after `kind`.
fn map_sdk_error<E, R>(kind: &str, err: SdkError<E, R>) -> RepositoryError
where
    E: std::error::Error + 'static,
    R: Debug,
{
    if is_connection_error(&err) {
        return map_connection_error(DisplayErrorContext(&err));
    }

    RepositoryError::QueryFailed(format!("{}: {}", kind, DisplayErrorContext(&err)))
}

/// True when the request never got a response (network failure or timeout).
fn is_connection_error<E, R>(err: &SdkError<E, R>) -> bool {
    matches!(
        err,
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)
    )
}

/// Map a generic connection/config error to RepositoryError.
pub fn map_connection_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::ConnectionFailed(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::error::{
        ProvisionedThroughputExceededException, ResourceNotFoundException,
    };

    const THROTTLED: &str =
        "The level of configured provisioned throughput for the table was exceeded";

    fn message(err: RepositoryError) -> String {
        match err {
            RepositoryError::QueryFailed(msg) => msg,
            other => panic!("expected QueryFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_map_connection_error_keeps_message() {
        assert_eq!(
            map_connection_error("dispatch failure: connection refused"),
            RepositoryError::ConnectionFailed("dispatch failure: connection refused".to_string())
        );
    }

    #[test]
    fn test_query_throttling_keeps_sdk_message() {
        let err = SdkError::service_error(
            QueryError::ProvisionedThroughputExceededException(
                ProvisionedThroughputExceededException::builder()
                    .message(THROTTLED)
                    .build(),
            ),
            (),
        );

        let msg = message(map_query_error(err));

        assert!(msg.starts_with("Throughput exceeded: "), "{msg}");
        assert!(msg.contains(THROTTLED), "{msg}");
    }

    #[test]
    fn test_get_item_missing_table_keeps_sdk_message() {
        let err = SdkError::service_error(
            GetItemError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("Requested resource not found: Table: SmartMenu not found")
                    .build(),
            ),
            (),
        );

        let msg = message(map_get_item_error(err));

        assert!(msg.starts_with("Table not found: "), "{msg}");
        assert!(msg.contains("Table: SmartMenu not found"), "{msg}");
    }

    #[test]
    fn test_query_error_renders_in_repository_error() {
        let err = SdkError::service_error(
            QueryError::ProvisionedThroughputExceededException(
                ProvisionedThroughputExceededException::builder()
                    .message(THROTTLED)
                    .build(),
            ),
            (),
        );

        let rendered = map_query_error(err).to_string();

        assert!(rendered.starts_with("Query failed: Throughput exceeded: "));
        assert!(rendered.contains(THROTTLED));
    }
}
