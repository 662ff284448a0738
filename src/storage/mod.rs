//! Storage layer for the ACC basketball dataset
//!
//! This module provides a thin abstraction over a pooled SQLite store,
//! organized into logical components:
//! - `models`: Entity records
//! - `schema`: Table definitions and schema (re)creation
//! - `store`: Connection pool, initialization and units-of-work
//! - `records`: Row inserts and relationship navigation

pub mod models;
pub mod records;
pub mod schema;
pub mod store;

#[cfg(test)]
mod tests;

pub use models::*;
pub use records::Records;
pub use store::{Store, StoreConfig, UnitOfWork, DEFAULT_POOL_SIZE};
