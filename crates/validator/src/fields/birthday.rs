//! Birth date field, built on [`DateField`].

use chrono::{Local, Months, NaiveDate};

use crate::fields::DateField;
use crate::foundation::{Accepted, Field, FieldError, FieldOptions, RawValue};
use crate::macros::field_options;

/// A [`DateField`] date that is at most
/// [`DEFAULT_MAX_AGE_YEARS`](Self::DEFAULT_MAX_AGE_YEARS) (or the limit set
/// with [`with_max_age`](Self::with_max_age)) calendar years before the
/// reference day.
///
/// Type, format and calendar checks are delegated to an owned `DateField`,
/// so the messages and their order are identical. The age rule runs last and
/// only on a parsed, non-empty date.
///
/// The boundary is inclusive: with the default limit of 70, a birthday
/// exactly 70 years before the reference day passes and one a day earlier
/// fails. A Feb 29 reference day clamps to Feb 28 in non-leap target years.
///
/// The reference day is the local current date unless pinned with
/// [`as_of`](Self::as_of).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use scrol_validator::fields::BirthDayField;
/// use scrol_validator::foundation::Field;
/// use serde_json::json;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let birthday = BirthDayField::new().as_of(today);
///
/// assert!(birthday.validate(&json!("15.06.1954")).is_ok());
/// assert_eq!(
///     birthday.validate(&json!("14.06.1954")).unwrap_err().to_string(),
///     "Value must be not older than 70 years"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDayField {
    date: DateField,
    max_age_years: u32,
    as_of: Option<NaiveDate>,
    options: FieldOptions,
}

impl BirthDayField {
    /// Default age limit in calendar years.
    pub const DEFAULT_MAX_AGE_YEARS: u32 = 70;

    /// Creates an optional, nullable birthday field with a 70-year limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            date: DateField::new(),
            max_age_years: Self::DEFAULT_MAX_AGE_YEARS,
            as_of: None,
            options: FieldOptions::PERMISSIVE,
        }
    }

    /// Sets the age limit in calendar years.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_age(mut self, years: u32) -> Self {
        self.max_age_years = years;
        self
    }

    /// Pins the reference day instead of reading the clock on each call.
    #[must_use = "builder methods must be chained or built"]
    pub fn as_of(mut self, today: NaiveDate) -> Self {
        self.as_of = Some(today);
        self
    }

    /// The earliest birth date accepted when the reference day is `today`.
    pub fn earliest_for(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_months(Months::new(self.max_age_years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MIN)
    }

    fn today(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for BirthDayField {
    fn default() -> Self {
        Self::new()
    }
}

field_options!(BirthDayField);

impl Field for BirthDayField {
    fn validate(&self, value: &RawValue) -> Result<(), FieldError> {
        let Some(date) = self.date.parse(value)? else {
            return Ok(());
        };

        if date < self.earliest_for(self.today()) {
            return Err(FieldError::TooOld {
                max_years: self.max_age_years,
            });
        }

        Ok(())
    }

    fn accepts(&self) -> Accepted {
        self.date.accepts()
    }

    fn options(&self) -> FieldOptions {
        self.options
    }
}
