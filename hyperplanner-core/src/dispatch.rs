//! Named-operation dispatch
//!
//! A minimal resolver for `{ "field": ..., "arguments": {...} }` events.
//! The raw event is turned into a typed [`Operation`] first, so argument
//! shape errors surface at construction rather than inside the handler.
//!
//! Unrecognized operation names resolve to an empty result with no error.
//! That is indistinguishable from "no matches"; callers that need to tell
//! the two apart should check [`Operation::is_supported`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::course::{Course, CourseField};
use crate::error::{Result, ValidationError};
use crate::filter::build_filter_decoded;
use crate::store::CourseStore;

const GET_COURSES: &str = "getCourses";
const ADD_COURSES: &str = "addCourses";

/// Raw inbound operation event
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OperationRequest {
    pub field: String,
    #[serde(default)]
    pub arguments: Value,
}

impl OperationRequest {
    pub fn new(field: impl Into<String>, arguments: Value) -> Self {
        Self {
            field: field.into(),
            arguments,
        }
    }
}

/// `credits` may arrive as a JSON number or as a decimal string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CreditsArg {
    Number(f64),
    Text(String),
}

impl CreditsArg {
    fn into_text(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

/// Arguments for `getCourses`; mirrors the filter query parameters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GetCoursesArgs {
    pub campus: Option<String>,
    pub code: Option<String>,
    pub credits: Option<CreditsArg>,
    pub title: Option<String>,
}

impl GetCoursesArgs {
    fn into_inputs(self) -> Vec<(CourseField, String)> {
        [
            (CourseField::Campus, self.campus),
            (CourseField::Code, self.code),
            (CourseField::Credits, self.credits.map(CreditsArg::into_text)),
            (CourseField::Title, self.title),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

/// Arguments for `addCourses`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddCoursesArgs {
    pub courses: Vec<Course>,
}

/// A recognized operation with typed arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    GetCourses(GetCoursesArgs),
    AddCourses(AddCoursesArgs),
    Unsupported(String),
}

impl Operation {
    pub fn name(&self) -> &str {
        match self {
            Self::GetCourses(_) => GET_COURSES,
            Self::AddCourses(_) => ADD_COURSES,
            Self::Unsupported(name) => name,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl TryFrom<OperationRequest> for Operation {
    type Error = ValidationError;

    fn try_from(request: OperationRequest) -> std::result::Result<Self, Self::Error> {
        match request.field.as_str() {
            GET_COURSES => {
                if request.arguments.is_null() {
                    return Ok(Self::GetCourses(GetCoursesArgs::default()));
                }
                serde_json::from_value(request.arguments)
                    .map(Self::GetCourses)
                    .map_err(|e| ValidationError::InvalidArguments {
                        operation: GET_COURSES,
                        reason: e.to_string(),
                    })
            }
            ADD_COURSES => serde_json::from_value(request.arguments)
                .map(Self::AddCourses)
                .map_err(|e| ValidationError::InvalidArguments {
                    operation: ADD_COURSES,
                    reason: e.to_string(),
                }),
            _ => Ok(Self::Unsupported(request.field)),
        }
    }
}

/// Routes operations to the shared store.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<dyn CourseStore>,
}

impl Dispatcher {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    /// Parse and dispatch a raw event.
    pub async fn handle(&self, request: OperationRequest) -> Result<Vec<Course>> {
        let operation = Operation::try_from(request)?;
        self.dispatch(operation).await
    }

    /// Run one operation.
    ///
    /// `addCourses` echoes its input on success rather than re-reading
    /// the store.
    pub async fn dispatch(&self, operation: Operation) -> Result<Vec<Course>> {
        match operation {
            Operation::GetCourses(args) => {
                let filter = build_filter_decoded(
                    args.into_inputs()
                        .into_iter()
                        .map(|(field, value)| (field.as_str(), value)),
                )?;
                let courses = self.store.find_by_filter(&filter).await?;
                tracing::debug!(
                    operation = GET_COURSES,
                    fields = ?filter.fields(),
                    count = courses.len(),
                    "operation complete"
                );
                Ok(courses)
            }
            Operation::AddCourses(args) => {
                let inserted = self.store.insert_many(&args.courses).await?;
                tracing::debug!(operation = ADD_COURSES, inserted, "operation complete");
                Ok(args.courses)
            }
            Operation::Unsupported(name) => {
                tracing::warn!(operation = %name, "unsupported operation, returning empty result");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CatalogError, ErrorKind, StoreError};
    use crate::filter::CourseFilter;
    use crate::store::MemoryCourseStore;
    use async_trait::async_trait;
    use serde_json::json;

    /// Store whose every call fails, as after a dropped connection.
    struct OfflineStore;

    #[async_trait]
    impl CourseStore for OfflineStore {
        async fn insert_many(&self, _: &[Course]) -> std::result::Result<usize, StoreError> {
            Err(StoreError::Write {
                inserted: None,
                message: "connection closed".into(),
            })
        }

        async fn find_by_filter(
            &self,
            _: &CourseFilter,
        ) -> std::result::Result<Vec<Course>, StoreError> {
            Err(StoreError::Read("cursor killed".into()))
        }

        async fn ping(&self) -> std::result::Result<(), StoreError> {
            Err(StoreError::Connection("connection closed".into()))
        }
    }

    fn os() -> Course {
        Course::new("hmc", "CSCI134", 3.0, "Operating Systems")
    }

    fn dispatcher(courses: Vec<Course>) -> (Dispatcher, Arc<MemoryCourseStore>) {
        let store = Arc::new(MemoryCourseStore::with_courses(courses));
        (Dispatcher::new(store.clone()), store)
    }

    #[test]
    fn parse_get_courses() {
        let request = OperationRequest::new(
            "getCourses",
            json!({"campus": "hmc", "credits": 3, "extra": true}),
        );
        let op = Operation::try_from(request).unwrap();
        assert_eq!(
            op,
            Operation::GetCourses(GetCoursesArgs {
                campus: Some("hmc".into()),
                credits: Some(CreditsArg::Number(3.0)),
                ..Default::default()
            })
        );
    }

    #[test]
    fn parse_null_arguments_as_empty_filter() {
        let request: OperationRequest = serde_json::from_str(r#"{"field": "getCourses"}"#).unwrap();
        let op = Operation::try_from(request).unwrap();
        assert_eq!(op, Operation::GetCourses(GetCoursesArgs::default()));
    }

    #[test]
    fn add_courses_requires_course_list() {
        let request = OperationRequest::new("addCourses", json!({"courses": "nope"}));
        let err = Operation::try_from(request).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidArguments {
                operation: "addCourses",
                ..
            }
        ));

        let request = OperationRequest::new("addCourses", json!({}));
        assert!(Operation::try_from(request).is_err());
    }

    #[test]
    fn unknown_names_are_unsupported() {
        let op = Operation::try_from(OperationRequest::new("dropCourses", json!({}))).unwrap();
        assert_eq!(op, Operation::Unsupported("dropCourses".into()));
        assert!(!op.is_supported());
        assert_eq!(op.name(), "dropCourses");
    }

    #[tokio::test]
    async fn add_courses_echoes_input() {
        let (dispatcher, store) = dispatcher(vec![]);
        let result = dispatcher
            .handle(OperationRequest::new(
                "addCourses",
                json!({"courses": [serde_json::to_value(os()).unwrap()]}),
            ))
            .await
            .unwrap();
        assert_eq!(result, vec![os()]);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn get_courses_filters_store() {
        let (dispatcher, _) = dispatcher(vec![
            os(),
            Course::new("hmc", "CSCI070", 4.0, "Data Structures"),
        ]);
        let result = dispatcher
            .handle(OperationRequest::new("getCourses", json!({"credits": "3.0"})))
            .await
            .unwrap();
        assert_eq!(result, vec![os()]);
    }

    #[tokio::test]
    async fn get_courses_bad_credits_is_client_error() {
        let (dispatcher, _) = dispatcher(vec![os()]);
        let err = dispatcher
            .handle(OperationRequest::new("getCourses", json!({"credits": "three"})))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert_eq!(err.kind(), ErrorKind::Client);
    }

    #[tokio::test]
    async fn unsupported_returns_empty_without_error() {
        let (dispatcher, _) = dispatcher(vec![os()]);
        let result = dispatcher
            .dispatch(Operation::Unsupported("listEverything".into()))
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn get_courses_store_failure_is_server_error() {
        let dispatcher = Dispatcher::new(Arc::new(OfflineStore));
        let err = dispatcher
            .handle(OperationRequest::new("getCourses", json!({"campus": "hmc"})))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Storage(StoreError::Read(_))));
        assert_eq!(err.kind(), ErrorKind::Server);
    }

    #[tokio::test]
    async fn add_courses_store_failure_does_not_echo() {
        let dispatcher = Dispatcher::new(Arc::new(OfflineStore));
        let result = dispatcher
            .handle(OperationRequest::new(
                "addCourses",
                json!({"courses": [serde_json::to_value(os()).unwrap()]}),
            ))
            .await;
        let err = match result {
            Ok(courses) => panic!("failed insert returned courses: {courses:?}"),
            Err(err) => err,
        };
        assert!(matches!(err, CatalogError::Storage(StoreError::Write { .. })));
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.to_string(), "insert failed: connection closed");
    }
}
