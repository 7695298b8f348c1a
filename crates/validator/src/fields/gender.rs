//! Gender field: a closed integer enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::{Accepted, Field, FieldError, FieldOptions, RawKind, RawValue};
use crate::macros::field_options;

const ACCEPTED: Accepted = Accepted(&[RawKind::Integer]);

/// Values a gender field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Gender {
    /// `0`
    Unknown,
    /// `1`
    Male,
    /// `2`
    Female,
}

impl Gender {
    /// All variants, in code order.
    pub const ALL: [Self; 3] = [Self::Unknown, Self::Male, Self::Female];

    /// Wire code of the variant.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Unknown => 0,
            Self::Male => 1,
            Self::Female => 2,
        }
    }
}

impl TryFrom<i64> for Gender {
    type Error = FieldError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|g| g.code() == code)
            .ok_or_else(|| FieldError::InvalidGender {
                actual: code.to_string(),
            })
    }
}

impl From<Gender> for i64 {
    fn from(gender: Gender) -> Self {
        gender.code()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// GENDER FIELD
// ============================================================================

/// Accepts the integers `0`, `1` and `2`.
///
/// Only integer-kind numbers are accepted: `true`, `1.0` and `"1"` are type
/// mismatches, not coerced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenderField {
    options: FieldOptions,
}

impl GenderField {
    /// Creates an optional, nullable gender field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: FieldOptions::PERMISSIVE,
        }
    }

    /// Parses a raw value into a [`Gender`].
    pub fn parse(&self, value: &RawValue) -> Result<Gender, FieldError> {
        let RawValue::Number(n) = value else {
            return Err(FieldError::type_mismatch(ACCEPTED, RawKind::of(value)));
        };

        if !crate::foundation::raw::is_integer(n) {
            return Err(FieldError::type_mismatch(ACCEPTED, RawKind::Float));
        }

        // u64 values above i64::MAX are integers, just not genders
        match n.as_i64() {
            Some(code) => Gender::try_from(code),
            None => Err(FieldError::InvalidGender {
                actual: n.to_string(),
            }),
        }
    }
}

field_options!(GenderField);

impl Field for GenderField {
    fn validate(&self, value: &RawValue) -> Result<(), FieldError> {
        self.parse(value).map(drop)
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
    #[case(0, Gender::Unknown)]
    #[case(1, Gender::Male)]
    #[case(2, Gender::Female)]
    fn valid(#[case] code: i64, #[case] expected: Gender) {
        let field = GenderField::new();
        assert!(field.validate(&json!(code)).is_ok());
        assert_eq!(field.parse(&json!(code)).unwrap(), expected);
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!("1"))]
    #[case(json!(0.1))]
    #[case(json!(1.0))]
    #[case(json!(true))]
    #[case(json!({"a": 1}))]
    #[case(json!([1, 2, 3]))]
    fn wrong_kind(#[case] value: RawValue) {
        let err = GenderField::new().validate(&value).unwrap_err();
        assert!(err.is_type_mismatch());
        assert_eq!(err.to_string(), "Value type must be int");
    }

    #[rstest]
    #[case(json!(-1))]
    #[case(json!(3))]
    #[case(json!(u64::MAX))]
    fn out_of_set(#[case] value: RawValue) {
        let err = GenderField::new().validate(&value).unwrap_err();
        assert_eq!(err.to_string(), "Value must be 0, 1 or 2");
        assert_eq!(err.code(), "invalid_gender");
    }

    #[test]
    fn serde_uses_codes() {
        assert_eq!(serde_json::to_value(Gender::Female).unwrap(), json!(2));
        assert_eq!(
            serde_json::from_value::<Gender>(json!(1)).unwrap(),
            Gender::Male
        );
        assert!(serde_json::from_value::<Gender>(json!(5)).is_err());
    }
}
