//! Pure functions mapping catalog outcomes to HTTP status codes.
//!
//! The status policy of the API lives here so it can change in one place.

use super::RepositoryError;

/// Status code for a request whose body failed decoding or validation.
pub const VALIDATION_ERROR_STATUS: u16 = 400;

/// Status code for an unregistered route.
pub const ROUTE_NOT_FOUND_STATUS: u16 = 404;

/// Status code returned when a query matched no items.
///
/// Absence is reported as 200 with an `{"error": ...}` body, so clients must
/// inspect the body rather than the status to detect it. Switch this to 404
/// if absence should become an HTTP error.
pub fn no_rows_status_code() -> u16 {
    200
}

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// Every store failure is an internal error:
///
/// - `ConnectionFailed` -> 500
/// - `QueryFailed` -> 500
/// - `InvalidData` -> 500 (a stored item failed to decode)
///
/// # Examples
///
/// ```
/// use smartmenu_core::storage::{repository_error_to_status_code, RepositoryError};
///
/// let error = RepositoryError::QueryFailed("Table not found".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 500);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::ConnectionFailed(_) => 500,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::InvalidData(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rows_maps_to_200() {
        assert_eq!(no_rows_status_code(), 200);
    }

    #[test]
    fn test_connection_failed_maps_to_500() {
        let error = RepositoryError::ConnectionFailed("dispatch failure".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_query_failed_maps_to_500() {
        let error = RepositoryError::QueryFailed("Throughput exceeded".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_invalid_data_maps_to_500() {
        let error = RepositoryError::InvalidData("Missing or invalid field: title".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }
}
