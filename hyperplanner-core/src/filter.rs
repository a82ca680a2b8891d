//! Filter builder
//!
//! Turns loosely-typed key/value inputs into equality constraints on
//! course attributes. Only the four recognized attribute names become
//! constraints; anything else is ignored so clients can send extra
//! fields safely. `credits` is the one value coerced to a number.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use crate::course::{Course, CourseField};
use crate::error::ValidationError;

/// A required-equality value for one attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Number(f64),
}

impl FilterValue {
    fn matches(&self, course: &Course, field: CourseField) -> bool {
        match (field, self) {
            (CourseField::Campus, Self::Text(v)) => course.campus == *v,
            (CourseField::Code, Self::Text(v)) => course.code == *v,
            (CourseField::Title, Self::Text(v)) => course.title == *v,
            (CourseField::Credits, Self::Number(v)) => course.credits == *v,
            _ => false,
        }
    }
}

/// Request-scoped equality constraints. Absent attributes match anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    constraints: BTreeMap<CourseField, FilterValue>,
}

impl CourseFilter {
    /// Filter with no constraints (matches every course).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn get(&self, field: CourseField) -> Option<&FilterValue> {
        self.constraints.get(&field)
    }

    /// Constrained attributes in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (CourseField, &FilterValue)> {
        self.constraints.iter().map(|(field, value)| (*field, value))
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.constraints.keys().map(|f| f.as_str()).collect()
    }

    /// Whether `course` satisfies every constraint.
    pub fn matches(&self, course: &Course) -> bool {
        self.iter().all(|(field, value)| value.matches(course, field))
    }

    /// Coerce `value` to the attribute's type and record it.
    fn insert(&mut self, field: CourseField, value: &str) -> Result<(), ValidationError> {
        let value = match field {
            CourseField::Credits => {
                let number =
                    value
                        .parse::<f64>()
                        .map_err(|_| ValidationError::MalformedNumber {
                            field: field.as_str(),
                            value: value.to_owned(),
                        })?;
                FilterValue::Number(number)
            }
            _ => FilterValue::Text(value.to_owned()),
        };
        self.constraints.insert(field, value);
        Ok(())
    }
}

/// Build a filter from percent-encoded inputs (query-string values).
///
/// Recognized names are visited in [`CourseField::ALL`] order and the first
/// malformed value aborts the build. `+` decodes to a space.
pub fn build_filter<I, K, V>(inputs: I) -> Result<CourseFilter, ValidationError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    build_with(inputs, percent_decode)
}

/// Build a filter from inputs that are already plain text (structured
/// operation arguments).
pub fn build_filter_decoded<I, K, V>(inputs: I) -> Result<CourseFilter, ValidationError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    build_with(inputs, |_, raw| Ok(Cow::Borrowed(raw)))
}

fn build_with<I, K, V, D>(inputs: I, decode: D) -> Result<CourseFilter, ValidationError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
    D: for<'a> Fn(CourseField, &'a str) -> Result<Cow<'a, str>, ValidationError>,
{
    let inputs: HashMap<String, String> = inputs
        .into_iter()
        .map(|(k, v)| (k.as_ref().to_owned(), v.as_ref().to_owned()))
        .collect();

    let mut filter = CourseFilter::new();
    for field in CourseField::ALL {
        let Some(raw) = inputs.get(field.as_str()) else {
            continue;
        };
        if raw.is_empty() {
            continue;
        }
        let value = decode(field, raw)?;
        filter.insert(field, &value)?;
    }

    tracing::debug!(fields = ?filter.fields(), "built course filter");
    Ok(filter)
}

/// Decode one query-string component: `+` is a space and every `%` must
/// start a two-hex-digit escape. `None` for a malformed escape or for
/// escaped bytes that are not UTF-8.
pub fn decode_component(raw: &str) -> Option<String> {
    let mut rest = raw.as_bytes();
    while let Some(pos) = rest.iter().position(|&b| b == b'%') {
        let escape = rest.get(pos + 1..pos + 3)?;
        if !escape.iter().all(u8::is_ascii_hexdigit) {
            return None;
        }
        rest = &rest[pos + 3..];
    }

    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(Cow::into_owned)
}

fn percent_decode(field: CourseField, raw: &str) -> Result<Cow<'_, str>, ValidationError> {
    decode_component(raw)
        .map(Cow::Owned)
        .ok_or_else(|| ValidationError::MalformedEncoding {
            field: field.as_str(),
            value: raw.to_owned(),
        })
}
