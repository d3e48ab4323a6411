#[cfg(feature = "dynamodb")]
pub mod conversions;
mod error;
mod http_mapping;
pub mod keys;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use http_mapping::{
    no_rows_status_code, repository_error_to_status_code, ROUTE_NOT_FOUND_STATUS,
    VALIDATION_ERROR_STATUS,
};
pub use traits::CatalogRepository;
pub use types::QueryOutcome;
