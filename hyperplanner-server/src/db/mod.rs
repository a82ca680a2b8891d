//! Database layer - MongoDB client and the course repository
//!
//! # Design Principles
//!
//! - One client per process, created at startup and shared (the driver pools connections)
//! - No client-side locking or transactions; the store's own concurrency control applies
//! - No retries; every driver error surfaces as a `StoreError`

pub mod pool;
pub mod repos;

pub use pool::{create_client, StoreConfig};
pub use repos::{filter_document, MongoCourseStore};
