//! In-memory storage backend.
//!
//! Used by tests and by the `--storage memory` demo mode.

mod repository;

pub use repository::InMemoryRepository;
