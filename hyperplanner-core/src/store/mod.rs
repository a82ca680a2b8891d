//! Course repository contract
//!
//! The store handle is created once per process and shared by every
//! request. Handlers receive it as `Arc<dyn CourseStore>` so the
//! document database can be swapped for [`MemoryCourseStore`] in tests.
//!
//! Implementations must:
//! - treat an empty insert as a no-op returning 0
//! - treat an empty filter as a full scan
//! - fully materialize reads; one undecodable record fails the whole call
//! - not retry; transient failures surface immediately

pub mod memory;

use async_trait::async_trait;

use crate::course::Course;
use crate::error::StoreError;
use crate::filter::CourseFilter;

pub use memory::MemoryCourseStore;

#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Insert every course, returning how many were written.
    async fn insert_many(&self, courses: &[Course]) -> Result<usize, StoreError>;

    /// Every stored course satisfying `filter`, in store order.
    async fn find_by_filter(&self, filter: &CourseFilter) -> Result<Vec<Course>, StoreError>;

    /// Round-trip to the store without touching data.
    async fn ping(&self) -> Result<(), StoreError>;
}
