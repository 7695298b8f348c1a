//! Raw input values and their primitive kinds
//!
//! Request payloads arrive as untyped JSON. Every field starts by classifying
//! the value into a [`RawKind`] and matching it against the kinds it accepts,
//! so a single discriminator decides what "wrong type" means everywhere.

use std::fmt;

use serde::Serialize;
use serde_json::Number;

/// The untyped value handed to [`Field::validate`](crate::foundation::Field::validate).
pub type RawValue = serde_json::Value;

// ============================================================================
// RAW KIND
// ============================================================================

/// Closed classification of a [`RawValue`].
///
/// JSON has a single number type; integers and floats are split here because
/// fields that accept integers must reject `0.1` and `1.0` alike.
///
/// The split follows serde_json's storage: integer literals that fit `i64`
/// or `u64` are [`Integer`](Self::Integer). Wider literals such as
/// `18446744073709551616` are decoded as `f64` and classify as
/// [`Float`](Self::Float).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RawKind {
    /// `null`
    Null,
    /// `true` / `false`
    Bool,
    /// A number without a fractional part or exponent, within `i64..=u64::MAX`.
    Integer,
    /// Any other number.
    Float,
    /// A string.
    String,
    /// An array.
    List,
    /// An object.
    Dict,
}

impl RawKind {
    /// Classifies a raw value.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrol_validator::foundation::RawKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(RawKind::of(&json!(7)), RawKind::Integer);
    /// assert_eq!(RawKind::of(&json!(7.0)), RawKind::Float);
    /// assert_eq!(RawKind::of(&json!({})), RawKind::Dict);
    /// ```
    #[must_use]
    pub fn of(value: &RawValue) -> Self {
        match value {
            RawValue::Null => Self::Null,
            RawValue::Bool(_) => Self::Bool,
            RawValue::Number(n) if is_integer(n) => Self::Integer,
            RawValue::Number(_) => Self::Float,
            RawValue::String(_) => Self::String,
            RawValue::Array(_) => Self::List,
            RawValue::Object(_) => Self::Dict,
        }
    }

    /// Short type name used in rendered messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "int",
            Self::Float => "float",
            Self::String => "str",
            Self::List => "list",
            Self::Dict => "dict",
        }
    }
}

impl fmt::Display for RawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true for numbers that serde_json stores as `i64` or `u64`.
#[inline]
pub(crate) fn is_integer(number: &Number) -> bool {
    number.is_i64() || number.is_u64()
}

/// Returns true if the value is an integer-kind number.
#[inline]
pub(crate) fn is_integer_value(value: &RawValue) -> bool {
    matches!(value, RawValue::Number(n) if is_integer(n))
}

// ============================================================================
// ACCEPTED KINDS
// ============================================================================

/// The set of kinds a field accepts, rendered as `"str or int"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accepted(pub &'static [RawKind]);

impl Accepted {
    /// Returns true if `kind` is one of the accepted kinds.
    #[must_use]
    pub fn contains(self, kind: RawKind) -> bool {
        self.0.contains(&kind)
    }
}

impl fmt::Display for Accepted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            f.write_str(kind.name())?;
        }
        Ok(())
    }
}

// ============================================================================
// EMPTINESS
// ============================================================================

/// Returns true if the value carries no content.
///
/// Empty strings, objects and arrays are empty, and so is `null`. Numbers and
/// booleans never are, so `0` is a present gender and `false` is a present
/// (if mistyped) value.
#[must_use]
pub fn is_empty(value: &RawValue) -> bool {
    match value {
        RawValue::Null => true,
        RawValue::String(s) => s.is_empty(),
        RawValue::Array(items) => items.is_empty(),
        RawValue::Object(map) => map.is_empty(),
        RawValue::Bool(_) | RawValue::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_numbers_by_representation() {
        assert_eq!(RawKind::of(&json!(0)), RawKind::Integer);
        assert_eq!(RawKind::of(&json!(-1)), RawKind::Integer);
        assert_eq!(RawKind::of(&json!(u64::MAX)), RawKind::Integer);
        assert_eq!(RawKind::of(&json!(0.1)), RawKind::Float);
        assert_eq!(RawKind::of(&json!(1.0)), RawKind::Float);
    }

    #[test]
    fn integers_wider_than_u64_are_floats() {
        let wide: RawValue = serde_json::from_str("18446744073709551616").unwrap();
        assert_eq!(RawKind::of(&wide), RawKind::Float);

        let widest: RawValue = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(RawKind::of(&widest), RawKind::Integer);
    }

    #[test]
    fn bool_is_not_integer() {
        assert_eq!(RawKind::of(&json!(true)), RawKind::Bool);
        assert!(!is_integer_value(&json!(false)));
    }

    #[test]
    fn accepted_renders_with_or() {
        assert_eq!(Accepted(&[RawKind::String]).to_string(), "str");
        assert_eq!(
            Accepted(&[RawKind::String, RawKind::Integer]).to_string(),
            "str or int"
        );
    }

    #[test]
    fn emptiness() {
        assert!(is_empty(&json!("")));
        assert!(is_empty(&json!({})));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!(null)));
        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!(false)));
        assert!(!is_empty(&json!(" ")));
    }
}
