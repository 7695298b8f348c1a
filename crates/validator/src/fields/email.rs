//! Email field.

use crate::foundation::{Accepted, Field, FieldError, FieldOptions, RawKind, RawValue};
use crate::macros::field_options;

const ACCEPTED: Accepted = Accepted(&[RawKind::String]);

/// A string that, when non-empty, contains `@`.
///
/// No further structure is checked: `"@"`, `"@a"` and `"a@"` all pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailField {
    options: FieldOptions,
}

impl EmailField {
    /// The marker a non-empty value must contain.
    pub const MARKER: char = '@';

    /// Creates an optional, nullable email field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: FieldOptions::PERMISSIVE,
        }
    }
}

field_options!(EmailField);

impl Field for EmailField {
    fn validate(&self, value: &RawValue) -> Result<(), FieldError> {
        let RawValue::String(s) = value else {
            return Err(FieldError::type_mismatch(ACCEPTED, RawKind::of(value)));
        };

        if s.is_empty() || s.contains(Self::MARKER) {
            Ok(())
        } else {
            Err(FieldError::MissingAtSymbol)
        }
    }

    fn accepts(&self) -> Accepted {
        ACCEPTED
    }

    fn options(&self) -> FieldOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("a@a.ru")]
    #[case("@a")]
    #[case("a@")]
    #[case("@")]
    #[case("")]
    fn accepts_anything_with_marker(#[case] value: &str) {
        assert!(EmailField::new().validate(&json!(value)).is_ok());
    }

    #[test]
    fn rejects_missing_marker() {
        let err = EmailField::new().validate(&json!("bad_email")).unwrap_err();
        assert_eq!(err, FieldError::MissingAtSymbol);
        assert_eq!(err.to_string(), "Value must contain @ symbol");
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(1))]
    #[case(json!([1, 2, 3]))]
    fn type_is_checked_first(#[case] value: RawValue) {
        let err = EmailField::new().validate(&value).unwrap_err();
        assert_eq!(err.to_string(), "Value type must be str");
    }
}
