//! Functional core of the SmartMenu catalog.
//!
//! Pure types and functions shared by the server and the xtask tooling:
//! menu entities, request payloads, the single-table key schema and the
//! repository contract. Nothing in this crate performs I/O.

pub mod menu;
pub mod storage;
