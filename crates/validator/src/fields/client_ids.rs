//! Client id list field.

use crate::foundation::raw::is_integer_value;
use crate::foundation::{Accepted, Field, FieldError, FieldOptions, RawKind, RawValue};
use crate::macros::field_options;

const ACCEPTED: Accepted = Accepted(&[RawKind::List]);

/// A list whose elements are all integers.
///
/// One bad element rejects the whole list. The rendered message does not
/// name the element; the error's `index` parameter does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientIdsField {
    options: FieldOptions,
}

impl ClientIdsField {
    /// Creates an optional, nullable client id list field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: FieldOptions::PERMISSIVE,
        }
    }
}

field_options!(ClientIdsField);

impl Field for ClientIdsField {
    fn validate(&self, value: &RawValue) -> Result<(), FieldError> {
        let RawValue::Array(items) = value else {
            return Err(FieldError::type_mismatch(ACCEPTED, RawKind::of(value)));
        };

        match items.iter().enumerate().find(|(_, item)| !is_integer_value(item)) {
            None => Ok(()),
            Some((index, item)) => Err(FieldError::InvalidElementType {
                index,
                actual: RawKind::of(item),
            }),
        }
    }

    fn accepts(&self) -> Accepted {
        ACCEPTED
    }

    fn options(&self) -> FieldOptions {
        self.options
    }
}
