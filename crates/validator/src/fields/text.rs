//! Plain text field.

use crate::foundation::{Accepted, Field, FieldError, FieldOptions, RawKind, RawValue, check_kind};
use crate::macros::field_options;

const ACCEPTED: Accepted = Accepted(&[RawKind::String]);

/// Accepts any string, including the empty one.
///
/// # Examples
///
/// ```
/// use scrol_validator::fields::CharField;
/// use scrol_validator::foundation::Field;
/// use serde_json::json;
///
/// let name = CharField::new();
/// assert!(name.validate(&json!("test")).is_ok());
/// assert_eq!(
///     name.validate(&json!(1)).unwrap_err().to_string(),
///     "Value type must be str"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharField {
    options: FieldOptions,
}

impl CharField {
    /// Creates an optional, nullable text field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: FieldOptions::PERMISSIVE,
        }
    }
}

field_options!(CharField);

impl Field for CharField {
    fn validate(&self, value: &RawValue) -> Result<(), FieldError> {
        check_kind(value, ACCEPTED)
    }

    fn accepts(&self) -> Accepted {
        ACCEPTED
    }

    fn options(&self) -> FieldOptions {
        self.options
    }
}
