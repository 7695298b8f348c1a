//! The field contract
//!
//! This module defines the trait every request field implements and the
//! construction options a request schema reads from it.

use std::fmt;

use serde::Deserialize;

use crate::foundation::error::FieldError;
use crate::foundation::raw::{self, Accepted, RawValue};

// ============================================================================
// FIELD OPTIONS
// ============================================================================

/// Presence policy attached to a field at construction time.
///
/// Fields themselves never look at these flags; a
/// [`RequestSchema`](crate::schema::RequestSchema) does, before it calls
/// [`Field::validate`].
///
/// The default is permissive: optional and nullable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    /// The key must be present in the payload.
    pub required: bool,
    /// The value may be empty (`null`, `""`, `{}`, `[]`).
    pub nullable: bool,
}

impl FieldOptions {
    /// Optional and nullable.
    pub const PERMISSIVE: Self = Self {
        required: false,
        nullable: true,
    };

    /// Creates options from explicit flags.
    #[must_use]
    pub const fn new(required: bool, nullable: bool) -> Self {
        Self { required, nullable }
    }
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self::PERMISSIVE
    }
}

// ============================================================================
// FIELD TRAIT
// ============================================================================

/// A stateless validator bound to one logical request attribute.
///
/// Implementations check the value's kind first and return
/// [`FieldError::TypeMismatch`] before attempting anything else. Empty
/// values of an accepted kind always pass; whether absence is acceptable is
/// decided by the caller from [`Field::options`].
///
/// Fields are immutable after construction and `validate` takes `&self`, so
/// one instance can be shared across threads and calls.
///
/// # Examples
///
/// ```
/// use scrol_validator::foundation::Field;
/// use scrol_validator::fields::EmailField;
/// use serde_json::json;
///
/// let email = EmailField::new();
/// assert!(email.validate(&json!("a@a.ru")).is_ok());
/// assert!(email.validate(&json!("")).is_ok());
/// assert!(email.validate(&json!("bad_email")).is_err());
/// ```
pub trait Field: fmt::Debug + Send + Sync {
    /// Validates one raw value.
    fn validate(&self, value: &RawValue) -> Result<(), FieldError>;

    /// Kinds this field accepts.
    fn accepts(&self) -> Accepted;

    /// Presence policy configured for this field.
    fn options(&self) -> FieldOptions;

    /// Returns true if `value` counts as absent content.
    fn is_empty(&self, value: &RawValue) -> bool {
        raw::is_empty(value)
    }
}

impl<F: Field + ?Sized> Field for Box<F> {
    fn validate(&self, value: &RawValue) -> Result<(), FieldError> {
        (**self).validate(value)
    }

    fn accepts(&self) -> Accepted {
        (**self).accepts()
    }

    fn options(&self) -> FieldOptions {
        (**self).options()
    }

    fn is_empty(&self, value: &RawValue) -> bool {
        (**self).is_empty(value)
    }
}

impl<F: Field + ?Sized> Field for &F {
    fn validate(&self, value: &RawValue) -> Result<(), FieldError> {
        (**self).validate(value)
    }

    fn accepts(&self) -> Accepted {
        (**self).accepts()
    }

    fn options(&self) -> FieldOptions {
        (**self).options()
    }

    fn is_empty(&self, value: &RawValue) -> bool {
        (**self).is_empty(value)
    }
}

/// Checks `value`'s kind against `accepted`.
///
/// Shared first step of every field.
#[inline]
pub(crate) fn check_kind(value: &RawValue, accepted: Accepted) -> Result<(), FieldError> {
    let actual = raw::RawKind::of(value);
    if accepted.contains(actual) {
        Ok(())
    } else {
        Err(FieldError::type_mismatch(accepted, actual))
    }
}
