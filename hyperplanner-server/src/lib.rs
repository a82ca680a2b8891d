//! hyperplanner-server: HTTP adapters over the course catalog
//!
//! Hosts the three request paths (bulk submission, filtered read,
//! named operations) and the MongoDB-backed course store they share.

pub mod db;
pub mod http;

pub use db::{MongoCourseStore, StoreConfig};
pub use http::{build_router, run_server, AppState, ServerConfig};
