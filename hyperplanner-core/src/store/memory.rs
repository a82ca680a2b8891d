//! In-process course store
//!
//! Keeps courses in insertion order. Used by tests and `serve --memory`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CourseStore;
use crate::course::Course;
use crate::error::StoreError;
use crate::filter::CourseFilter;

#[derive(Debug, Default)]
pub struct MemoryCourseStore {
    courses: RwLock<Vec<Course>>,
}

impl MemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `courses`.
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: RwLock::new(courses),
        }
    }

    pub async fn len(&self) -> usize {
        self.courses.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.courses.read().await.is_empty()
    }
}

#[async_trait]
impl CourseStore for MemoryCourseStore {
    async fn insert_many(&self, courses: &[Course]) -> Result<usize, StoreError> {
        if courses.is_empty() {
            return Ok(0);
        }
        self.courses.write().await.extend_from_slice(courses);
        Ok(courses.len())
    }

    async fn find_by_filter(&self, filter: &CourseFilter) -> Result<Vec<Course>, StoreError> {
        let courses = self.courses.read().await;
        Ok(courses
            .iter()
            .filter(|course| filter.matches(course))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
