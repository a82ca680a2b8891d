//! hyperplanner-core: course catalog domain
//!
//! Request-to-filter translation, the store contract shared by every
//! handler, and the named-operation dispatcher. Transport concerns live
//! in hyperplanner-server.

pub mod course;
pub mod dispatch;
pub mod error;
pub mod filter;
pub mod store;

pub use course::{Course, CourseField};
pub use dispatch::{
    AddCoursesArgs, CreditsArg, Dispatcher, GetCoursesArgs, Operation, OperationRequest,
};
pub use error::{CatalogError, ErrorKind, Result, StoreError, ValidationError};
pub use filter::{
    build_filter, build_filter_decoded, decode_component, CourseFilter, FilterValue,
};
pub use store::{CourseStore, MemoryCourseStore};
