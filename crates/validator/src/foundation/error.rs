//! Error types for validation failures
//!
//! Two layers:
//!
//! - [`FieldError`] is what a single field returns. Each variant carries its
//!   parameters; the rendered message is produced by `Display` and is the
//!   only place the wording lives.
//! - [`ValidationError`] is the boundary record a request schema hands to its
//!   caller: a stable code, the rendered message, the field path and the
//!   parameters as ordered string pairs. [`ValidationErrors`] collects them.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::foundation::raw::{Accepted, RawKind};

// ============================================================================
// ERROR KIND
// ============================================================================

/// Machine-distinguishable failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The value's primitive kind is not accepted by the field.
    TypeMismatch,
    /// The value has the right kind but unacceptable content.
    ValueInvalid,
    /// The value is absent or empty and the schema policy forbids it.
    ///
    /// Only produced by [`RequestSchema`](crate::schema::RequestSchema).
    Missing,
}

// ============================================================================
// FIELD ERROR
// ============================================================================

/// Failure returned by [`Field::validate`](crate::foundation::Field::validate).
///
/// # Examples
///
/// ```
/// use scrol_validator::foundation::{ErrorKind, Field};
/// use scrol_validator::fields::PhoneField;
/// use serde_json::json;
///
/// let err = PhoneField::new().validate(&json!(7)).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::ValueInvalid);
/// assert_eq!(err.to_string(), "Length of value must be 11 characters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FieldError {
    /// The value's kind is outside the accepted set.
    #[error("Value type must be {expected}")]
    TypeMismatch {
        /// Kinds the field accepts.
        expected: Accepted,
        /// Kind of the rejected value.
        actual: RawKind,
    },

    /// An email without the `@` marker.
    #[error("Value must contain @ symbol")]
    MissingAtSymbol,

    /// Canonical form has the wrong number of characters.
    #[error("Length of value must be {expected} characters")]
    InvalidLength {
        /// Required length.
        expected: usize,
        /// Length of the canonical form.
        actual: usize,
    },

    /// Canonical form starts with the wrong character.
    #[error("Value must start with {expected}")]
    InvalidPrefix {
        /// Required first character.
        expected: char,
        /// First character of the canonical form.
        actual: char,
    },

    /// A date string that does not have the `DD.MM.YYYY` shape.
    #[error("Value format must be {layout}")]
    InvalidDateFormat {
        /// The expected layout.
        layout: &'static str,
    },

    /// A well-shaped date string that names no calendar day.
    #[error("Value must be valid date")]
    InvalidDate,

    /// A birth date further in the past than the age limit allows.
    #[error("Value must be not older than {max_years} years")]
    TooOld {
        /// Maximum age in calendar years.
        max_years: u32,
    },

    /// An integer outside the gender enumeration.
    #[error("Value must be 0, 1 or 2")]
    InvalidGender {
        /// The rejected integer, as written.
        actual: String,
    },

    /// A list with at least one non-integer element.
    #[error("Type of elements of list must be int")]
    InvalidElementType {
        /// Index of the first offending element.
        index: usize,
        /// Kind of the first offending element.
        actual: RawKind,
    },
}

impl FieldError {
    /// Creates a type mismatch for `actual` against `expected`.
    pub fn type_mismatch(expected: Accepted, actual: RawKind) -> Self {
        Self::TypeMismatch { expected, actual }
    }

    /// Returns the failure kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            _ => ErrorKind::ValueInvalid,
        }
    }

    /// Returns true for [`ErrorKind::TypeMismatch`].
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        self.kind() == ErrorKind::TypeMismatch
    }

    /// Stable code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::MissingAtSymbol => "missing_at_symbol",
            Self::InvalidLength { .. } => "invalid_length",
            Self::InvalidPrefix { .. } => "invalid_prefix",
            Self::InvalidDateFormat { .. } => "invalid_date_format",
            Self::InvalidDate => "invalid_date",
            Self::TooOld { .. } => "too_old",
            Self::InvalidGender { .. } => "invalid_gender",
            Self::InvalidElementType { .. } => "invalid_element_type",
        }
    }

    /// Structured parameters, in a stable order.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::TypeMismatch { expected, actual } => vec![
                ("expected", expected.to_string()),
                ("actual", actual.to_string()),
            ],
            Self::InvalidLength { expected, actual } => vec![
                ("expected", expected.to_string()),
                ("actual", actual.to_string()),
            ],
            Self::InvalidPrefix { expected, actual } => vec![
                ("expected", expected.to_string()),
                ("actual", actual.to_string()),
            ],
            Self::InvalidDateFormat { layout } => vec![("layout", (*layout).to_owned())],
            Self::TooOld { max_years } => vec![("max_years", max_years.to_string())],
            Self::InvalidGender { actual } => vec![("actual", actual.clone())],
            Self::InvalidElementType { index, actual } => vec![
                ("index", index.to_string()),
                ("actual", actual.to_string()),
            ],
            Self::MissingAtSymbol | Self::InvalidDate => Vec::new(),
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A rendered validation failure, tagged with the field it belongs to.
///
/// Uses `Cow<'static, str>` so static codes and messages never allocate.
///
/// # Examples
///
/// ```
/// use scrol_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::required("login");
/// assert_eq!(error.kind, ErrorKind::Missing);
/// assert_eq!(error.to_string(), "login: Field is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Failure kind.
    pub kind: ErrorKind,

    /// Error code, e.g. `"invalid_length"` or `"required"`.
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Field name, when the error belongs to a request field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 0-2).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new error with a kind, code and message.
    pub fn new(
        kind: ErrorKind,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// A required field is absent from the payload.
    pub fn required(field: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Missing, "required", "Field is required").with_field(field)
    }

    /// A non-nullable field is present but empty.
    pub fn not_nullable(field: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Missing, "not_nullable", "Field must not be empty").with_field(field)
    }
}

impl From<FieldError> for ValidationError {
    fn from(error: FieldError) -> Self {
        let params = error
            .params()
            .into_iter()
            .map(|(k, v)| (Cow::Borrowed(k), Cow::Owned(v)))
            .collect();

        Self {
            kind: error.kind(),
            code: Cow::Borrowed(error.code()),
            message: Cow::Owned(error.to_string()),
            field: None,
            params,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Per-field failures collected while validating one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the first error recorded for `field`.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|e| e.field.as_deref() == Some(field))
    }

    /// Names of the fields that failed, in order, without duplicates.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.errors.len());
        for name in self.errors.iter().filter_map(|e| e.field.as_deref()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
