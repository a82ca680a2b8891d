//! Course record and its attribute names

use std::fmt;

use serde::{Deserialize, Serialize};

/// A catalog entry.
///
/// Missing attributes decode to their zero value; only type mismatches are
/// decode failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub campus: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub credits: f64,
    #[serde(default)]
    pub title: String,
}

impl Course {
    pub fn new(
        campus: impl Into<String>,
        code: impl Into<String>,
        credits: f64,
        title: impl Into<String>,
    ) -> Self {
        Self {
            campus: campus.into(),
            code: code.into(),
            credits,
            title: title.into(),
        }
    }
}

/// The attributes a filter may constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CourseField {
    Campus,
    Code,
    Credits,
    Title,
}

impl CourseField {
    /// Every recognized attribute, in filter-building order.
    pub const ALL: [CourseField; 4] = [
        CourseField::Campus,
        CourseField::Code,
        CourseField::Credits,
        CourseField::Title,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Campus => "campus",
            Self::Code => "code",
            Self::Credits => "credits",
            Self::Title => "title",
        }
    }

    /// Look up an attribute by its wire name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
