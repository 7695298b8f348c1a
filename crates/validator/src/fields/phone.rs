//! Phone number field.
//!
//! Accepts a string or an integer and canonicalises both to the decimal
//! string form before checking it, so `70123456789` and `"70123456789"` are
//! the same phone number.

use std::borrow::Cow;

use crate::foundation::{Accepted, Field, FieldError, FieldOptions, RawKind, RawValue};
use crate::macros::field_options;

const ACCEPTED: Accepted = Accepted(&[RawKind::String, RawKind::Integer]);

// ============================================================================
// PHONE FIELD
// ============================================================================

/// Validates phone numbers by canonical length and leading character.
///
/// Only the first character is constrained; the rest of the canonical form
/// may be anything, so `"7----------"` passes.
///
/// Checks run in order and stop at the first failure:
///
/// 1. kind must be string or integer
/// 2. canonical form must be exactly [`length`](Self::length) characters
/// 3. canonical form must start with [`prefix`](Self::prefix)
///
/// # Examples
///
/// ```
/// use scrol_validator::fields::PhoneField;
/// use scrol_validator::foundation::Field;
/// use serde_json::json;
///
/// let phone = PhoneField::new();
/// assert!(phone.validate(&json!(70123456789_u64)).is_ok());
/// assert!(phone.validate(&json!("70123456789")).is_ok());
/// assert_eq!(
///     phone.validate(&json!(10123456789_u64)).unwrap_err().to_string(),
///     "Value must start with 7"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneField {
    length: usize,
    prefix: char,
    options: FieldOptions,
}

impl PhoneField {
    /// Canonical length of a phone number.
    pub const DEFAULT_LENGTH: usize = 11;

    /// Leading character of a phone number.
    pub const DEFAULT_PREFIX: char = '7';

    /// Creates an optional, nullable phone field with the default rules.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            prefix: Self::DEFAULT_PREFIX,
            options: FieldOptions::PERMISSIVE,
        }
    }

    /// Sets the required canonical length, in characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the required leading character.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_prefix(mut self, prefix: char) -> Self {
        self.prefix = prefix;
        self
    }

    /// Converts an accepted value to its canonical string form.
    ///
    /// Strings are borrowed as-is; integers are rendered in decimal.
    pub fn canonical(value: &RawValue) -> Result<Cow<'_, str>, FieldError> {
        match value {
            RawValue::String(s) => Ok(Cow::Borrowed(s.as_str())),
            RawValue::Number(n) if crate::foundation::raw::is_integer(n) => {
                Ok(Cow::Owned(n.to_string()))
            }
            other => Err(FieldError::type_mismatch(ACCEPTED, RawKind::of(other))),
        }
    }
}

impl Default for PhoneField {
    fn default() -> Self {
        Self::new()
    }
}

field_options!(PhoneField);

impl Field for PhoneField {
    fn validate(&self, value: &RawValue) -> Result<(), FieldError> {
        let canonical = Self::canonical(value)?;
        if canonical.is_empty() {
            return Ok(());
        }

        let actual = canonical.chars().count();
        if actual != self.length {
            return Err(FieldError::InvalidLength {
                expected: self.length,
                actual,
            });
        }

        if canonical.starts_with(self.prefix) {
            Ok(())
        } else {
            Err(FieldError::InvalidPrefix {
                expected: self.prefix,
                actual: canonical.chars().next().unwrap_or_default(),
            })
        }
    }

    fn accepts(&self) -> Accepted {
        ACCEPTED
    }

    fn options(&self) -> FieldOptions {
        self.options
    }
}

// ============================================================================
// TESTS
// ============================================================================
