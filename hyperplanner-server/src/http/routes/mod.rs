//! Route handlers organized by request path

pub mod courses;
pub mod health;
pub mod operations;
