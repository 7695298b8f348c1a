//! Key-value arguments field.

use crate::foundation::{Accepted, Field, FieldError, FieldOptions, RawKind, RawValue, check_kind};
use crate::macros::field_options;

const ACCEPTED: Accepted = Accepted(&[RawKind::Dict]);

/// Accepts any JSON object, including `{}`.
///
/// Strings that look like `a=1 b=2` are a type mismatch; nothing is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArgumentsField {
    options: FieldOptions,
}

impl ArgumentsField {
    /// Creates an optional, nullable arguments field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: FieldOptions::PERMISSIVE,
        }
    }
}

field_options!(ArgumentsField);

impl Field for ArgumentsField {
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({"a": 1, "b": 2}))]
    #[case(json!({}))]
    fn accepts_objects(#[case] value: RawValue) {
        assert!(ArgumentsField::new().validate(&value).is_ok());
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(1))]
    #[case(json!([1, 2, 3]))]
    #[case(json!("a=1 b=2"))]
    fn rejects_other_kinds(#[case] value: RawValue) {
        let err = ArgumentsField::new().validate(&value).unwrap_err();
        assert!(err.is_type_mismatch());
        assert_eq!(err.to_string(), "Value type must be dict");
    }
}
