//! Declarative schema configuration
//!
//! Schemas can be declared as JSON instead of code:
//!
//! ```
//! use scrol_validator::schema::SchemaConfig;
//! use serde_json::json;
//!
//! let config = SchemaConfig::from_json(r#"{
//!     "name": "clients_interests",
//!     "fields": {
//!         "client_ids": {"type": "client_ids", "required": true, "nullable": false},
//!         "date": {"type": "date"}
//!     }
//! }"#).unwrap();
//!
//! let schema = config.build().unwrap();
//! assert!(schema.validate(&json!({"client_ids": [1, 2]})).is_ok());
//! assert!(schema.validate(&json!({"client_ids": []})).is_err());
//! ```

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::fields::{
    ArgumentsField, BirthDayField, CharField, ClientIdsField, DateField, EmailField, GenderField,
    PhoneField,
};
use crate::foundation::{Field, FieldOptions, RawValue};
use crate::schema::RequestSchema;

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised while loading or building a schema configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// The configuration is not valid JSON or does not match the format.
    #[error("invalid schema configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A `require_any_of` group lists no fields.
    #[error("group {index} of schema '{schema}' is empty")]
    EmptyGroup {
        /// Schema name.
        schema: String,
        /// Position of the group.
        index: usize,
    },

    /// A `require_any_of` group names a field the schema does not declare.
    #[error("group {index} of schema '{schema}' names undeclared field '{field}'")]
    UnknownGroupField {
        /// Schema name.
        schema: String,
        /// Position of the group.
        index: usize,
        /// The undeclared name.
        field: String,
    },
}

// ============================================================================
// FIELD KIND
// ============================================================================

/// The built-in field an entry builds, selected by its `type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// [`CharField`]
    Char,
    /// [`ArgumentsField`]
    Arguments,
    /// [`EmailField`]
    Email,
    /// [`PhoneField`]
    Phone,
    /// [`DateField`]
    Date,
    /// [`BirthDayField`]
    #[serde(rename = "birthday")]
    BirthDay {
        /// Pinned reference day (`YYYY-MM-DD`); the clock is used when absent.
        #[serde(default)]
        as_of: Option<NaiveDate>,
        /// Age limit in calendar years.
        #[serde(default = "default_max_age")]
        max_age_years: u32,
    },
    /// [`GenderField`]
    Gender,
    /// [`ClientIdsField`]
    ClientIds,
}

fn default_max_age() -> u32 {
    BirthDayField::DEFAULT_MAX_AGE_YEARS
}

/// One field entry: its kind and presence policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FieldSpec {
    /// Which field to build.
    #[serde(flatten)]
    pub kind: FieldKind,
    /// See [`FieldOptions::required`].
    #[serde(default)]
    pub required: bool,
    /// See [`FieldOptions::nullable`].
    #[serde(default = "default_nullable")]
    pub nullable: bool,
}

fn default_nullable() -> bool {
    FieldOptions::PERMISSIVE.nullable
}

impl FieldSpec {
    /// Presence policy of this entry.
    pub fn options(&self) -> FieldOptions {
        FieldOptions::new(self.required, self.nullable)
    }

    /// Builds the configured field.
    pub fn build(&self) -> Box<dyn Field> {
        let options = self.options();
        match self.kind {
            FieldKind::Char => Box::new(CharField::new().with_options(options)),
            FieldKind::Arguments => Box::new(ArgumentsField::new().with_options(options)),
            FieldKind::Email => Box::new(EmailField::new().with_options(options)),
            FieldKind::Phone => Box::new(PhoneField::new().with_options(options)),
            FieldKind::Date => Box::new(DateField::new().with_options(options)),
            FieldKind::BirthDay {
                as_of,
                max_age_years,
            } => {
                let field = BirthDayField::new()
                    .with_max_age(max_age_years)
                    .with_options(options);
                match as_of {
                    Some(today) => Box::new(field.as_of(today)),
                    None => Box::new(field),
                }
            }
            FieldKind::Gender => Box::new(GenderField::new().with_options(options)),
            FieldKind::ClientIds => Box::new(ClientIdsField::new().with_options(options)),
        }
    }
}

// ============================================================================
// SCHEMA CONFIG
// ============================================================================

/// A request schema declared as data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchemaConfig {
    /// Schema name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: IndexMap<String, FieldSpec>,
    /// Groups of which at least one must be fully present.
    #[serde(default)]
    pub require_any_of: Vec<Vec<String>>,
}

impl SchemaConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json(input: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parses a configuration from an already decoded JSON value.
    pub fn from_value(value: RawValue) -> Result<Self, SchemaError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Builds the schema, checking that every group names declared fields.
    pub fn build(&self) -> Result<RequestSchema, SchemaError> {
        for (index, group) in self.require_any_of.iter().enumerate() {
            if group.is_empty() {
                return Err(SchemaError::EmptyGroup {
                    schema: self.name.clone(),
                    index,
                });
            }
            if let Some(field) = group.iter().find(|f| !self.fields.contains_key(f.as_str())) {
                return Err(SchemaError::UnknownGroupField {
                    schema: self.name.clone(),
                    index,
                    field: field.clone(),
                });
            }
        }

        let mut schema = RequestSchema::new(self.name.clone());
        for (name, spec) in &self.fields {
            schema = schema.boxed_field(name.clone(), spec.build());
        }
        for group in &self.require_any_of {
            schema = schema.require_any_of(group.iter().cloned());
        }

        debug!(
            schema = %self.name,
            fields = self.fields.len(),
            groups = self.require_any_of.len(),
            "schema built from config"
        );
        Ok(schema)
    }
}

// ============================================================================
// TESTS
// ============================================================================
