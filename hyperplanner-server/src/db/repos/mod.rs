//! Repository implementations for database access

pub mod courses;

pub use courses::{filter_document, MongoCourseStore};
