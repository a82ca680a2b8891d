//! Command implementations for the hyperplanner CLI

pub mod import;
pub mod query;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use import::run_import;
pub use query::run_query;
pub use serve::run_serve;
