//! # Field Errors
//!
//! Structured validation failures tied to a path inside an object.
//!
//! Validators never stop at the first problem. Every check appends to an
//! [`ErrorList`] and the whole list travels back to the caller, so a single
//! response reports everything that is wrong with a payload.
//!
//! ```rust
//! use registry_framework::field::{ErrorList, FieldError, FieldPath};
//!
//! let spec = FieldPath::new("spec");
//! let mut errs = ErrorList::new();
//! errs.push(FieldError::required(&spec.child("podNetworkName"), ""));
//! errs.push(FieldError::invalid(
//!     &spec.child("parametersRefs").index(0).child("name"),
//!     "Bad_Name",
//!     "must be a lowercase RFC 1123 subdomain",
//! ));
//!
//! assert_eq!(errs.len(), 2);
//! assert_eq!(errs.iter().next().unwrap().field, "spec.podNetworkName");
//! ```

use serde::Serialize;
use std::fmt::{self, Display};

/// A path to a field inside an object, rendered as `spec.parametersRefs[0].name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    rendered: String,
}

impl FieldPath {
    /// Starts a path at a top-level field.
    pub fn new(root: &str) -> Self {
        Self {
            rendered: root.to_string(),
        }
    }

    /// Descends into a named child field.
    pub fn child(&self, name: &str) -> Self {
        let rendered = if self.rendered.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.rendered, name)
        };
        Self { rendered }
    }

    /// Descends into a list element.
    pub fn index(&self, index: usize) -> Self {
        Self {
            rendered: format!("{}[{}]", self.rendered, index),
        }
    }

    /// Descends into a map entry.
    pub fn key(&self, key: &str) -> Self {
        Self {
            rendered: format!("{}[{}]", self.rendered, key),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// The class of a field error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum ErrorType {
    /// A referenced value does not exist.
    NotFound,
    /// A required value is missing.
    Required,
    /// A value that must be unique appears more than once.
    Duplicate,
    /// A value fails a structural or semantic constraint.
    Invalid,
    /// A value is not one of the supported choices.
    NotSupported,
    /// The field may not be set, or the operation is not allowed.
    Forbidden,
    /// A value exceeds its maximum length.
    TooLong,
    /// An update changed a field that is fixed after creation.
    Immutable,
}

impl ErrorType {
    /// Human readable label used when rendering the error.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::NotFound => "Not found",
            ErrorType::Required => "Required value",
            ErrorType::Duplicate => "Duplicate value",
            ErrorType::Invalid => "Invalid value",
            ErrorType::NotSupported => "Unsupported value",
            ErrorType::Forbidden => "Forbidden",
            ErrorType::TooLong => "Too long",
            ErrorType::Immutable => "Immutable value",
        }
    }
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure: which field, what kind of failure, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_value: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub detail: String,
}

impl FieldError {
    fn new(
        error_type: ErrorType,
        path: &FieldPath,
        bad_value: Option<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            error_type,
            field: path.to_string(),
            bad_value,
            detail: detail.into(),
        }
    }

    pub fn not_found(path: &FieldPath, value: impl Display) -> Self {
        Self::new(ErrorType::NotFound, path, Some(value.to_string()), "")
    }

    pub fn required(path: &FieldPath, detail: impl Into<String>) -> Self {
        Self::new(ErrorType::Required, path, None, detail)
    }

    pub fn duplicate(path: &FieldPath, value: impl Display) -> Self {
        Self::new(ErrorType::Duplicate, path, Some(value.to_string()), "")
    }

    pub fn invalid(path: &FieldPath, value: impl Display, detail: impl Into<String>) -> Self {
        Self::new(ErrorType::Invalid, path, Some(value.to_string()), detail)
    }

    /// A value outside the supported set; `valid_values` is listed in the detail.
    pub fn not_supported(path: &FieldPath, value: impl Display, valid_values: &[&str]) -> Self {
        let quoted: Vec<String> = valid_values.iter().map(|v| format!("\"{}\"", v)).collect();
        Self::new(
            ErrorType::NotSupported,
            path,
            Some(value.to_string()),
            format!("supported values: {}", quoted.join(", ")),
        )
    }

    pub fn forbidden(path: &FieldPath, detail: impl Into<String>) -> Self {
        Self::new(ErrorType::Forbidden, path, None, detail)
    }

    pub fn too_long(path: &FieldPath, value: impl Display, max_length: usize) -> Self {
        Self::new(
            ErrorType::TooLong,
            path,
            Some(value.to_string()),
            format!("must have at most {} bytes", max_length),
        )
    }

    pub fn immutable(path: &FieldPath, value: impl Display) -> Self {
        Self::new(
            ErrorType::Immutable,
            path,
            Some(value.to_string()),
            "field is immutable",
        )
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error_type)?;
        if let Some(value) = &self.bad_value {
            write!(f, ": {:?}", value)?;
        }
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldError {}

/// Ordered, cumulative list of field errors. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorList(Vec<FieldError>);

impl ErrorList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Appends every error of `other`, keeping its order.
    pub fn append(&mut self, other: ErrorList) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Errors of the given type, in order.
    pub fn filter_type(&self, error_type: ErrorType) -> ErrorList {
        self.0
            .iter()
            .filter(|e| e.error_type == error_type)
            .cloned()
            .collect()
    }

    /// Returns `true` if any error points at exactly `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => Ok(()),
            [only] => write!(f, "{}", only),
            many => {
                f.write_str("[")?;
                for (i, e) in many.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", e)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<Vec<FieldError>> for ErrorList {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl FromIterator<FieldError> for ErrorList {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<FieldError> for ErrorList {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ErrorList {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
