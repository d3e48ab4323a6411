//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of
//! `CatalogRepository` using `aws-sdk-dynamodb`. Item decoding lives in
//! `smartmenu_core::storage::conversions`.

mod error;
mod repository;

pub use repository::DynamoDbRepository;
