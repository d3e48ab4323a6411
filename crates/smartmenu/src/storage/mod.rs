//! Storage backend implementations.
//!
//! Concrete implementations of `CatalogRepository` from
//! `smartmenu_core::storage`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always compiled; it backs the tests and the
//! `--storage memory` demo mode.
//!
//! # Examples
//!
//! Build without DynamoDB:
//! ```bash
//! cargo build -p smartmenu --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

pub use inmemory::InMemoryRepository;
