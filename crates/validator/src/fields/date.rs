//! Calendar date field in `DD.MM.YYYY` layout.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};

use crate::foundation::{Accepted, Field, FieldError, FieldOptions, RawKind, RawValue};
use crate::macros::field_options;

const ACCEPTED: Accepted = Accepted(&[RawKind::String]);

/// The only accepted layout.
pub const DATE_LAYOUT: &str = "DD.MM.YYYY";

// ASCII digits only: `\d` would also match other Unicode digits.
static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<day>[0-9]{2})\.(?<month>[0-9]{2})\.(?<year>[0-9]{4})$")
        .expect("date layout regex is valid")
});

// ============================================================================
// DATE FIELD
// ============================================================================

/// Validates date strings written as `DD.MM.YYYY`.
///
/// The shape is checked before the calendar: `"3.02.2023"` and `"02.02.22"`
/// are format errors even though they name real days, while `"29.02.2021"`
/// and `"01.01.0000"` have the right shape but are not valid dates.
/// Years run from `0001` to `9999`.
///
/// # Examples
///
/// ```
/// use scrol_validator::fields::DateField;
/// use scrol_validator::foundation::Field;
/// use serde_json::json;
///
/// let date = DateField::new();
/// assert!(date.validate(&json!("29.02.2020")).is_ok());
/// assert_eq!(
///     date.validate(&json!("3.02.2023")).unwrap_err().to_string(),
///     "Value format must be DD.MM.YYYY"
/// );
/// assert_eq!(
///     date.validate(&json!("29.02.2021")).unwrap_err().to_string(),
///     "Value must be valid date"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateField {
    options: FieldOptions,
}

impl DateField {
    /// Creates an optional, nullable date field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: FieldOptions::PERMISSIVE,
        }
    }

    /// Parses a raw value into a date.
    ///
    /// Returns `Ok(None)` for the empty string. Fields built on top of dates
    /// call this and add their own checks on the parsed value.
    pub fn parse(&self, value: &RawValue) -> Result<Option<NaiveDate>, FieldError> {
        let RawValue::String(s) = value else {
            return Err(FieldError::type_mismatch(ACCEPTED, RawKind::of(value)));
        };

        if s.is_empty() {
            return Ok(None);
        }

        parse_date(s).map(Some)
    }
}

field_options!(DateField);

impl Field for DateField {
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

/// Parses a non-empty `DD.MM.YYYY` string.
pub fn parse_date(input: &str) -> Result<NaiveDate, FieldError> {
    let caps = DATE_REGEX
        .captures(input)
        .ok_or(FieldError::InvalidDateFormat {
            layout: DATE_LAYOUT,
        })?;

    let (Some(day), Some(month), Some(year)) = (
        component::<u32>(&caps, "day"),
        component::<u32>(&caps, "month"),
        component::<i32>(&caps, "year"),
    ) else {
        return Err(FieldError::InvalidDateFormat {
            layout: DATE_LAYOUT,
        });
    };

    // chrono has a year 0; the calendar here starts at year 1
    if year == 0 {
        return Err(FieldError::InvalidDate);
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or(FieldError::InvalidDate)
}

fn component<T: FromStr>(caps: &Captures<'_>, name: &str) -> Option<T> {
    caps.name(name)?.as_str().parse().ok()
}

// ============================================================================
// TESTS
// ============================================================================
