//! Request schemas
//!
//! A [`RequestSchema`] names the fields a request carries and applies the
//! presence policy each field was constructed with. Fields themselves never
//! reject absent or empty values; the schema does, based on
//! [`FieldOptions`](crate::foundation::FieldOptions):
//!
//! | payload            | `required` | `nullable` | outcome                      |
//! |--------------------|------------|------------|------------------------------|
//! | key absent         | `true`     | any        | `required` error             |
//! | key absent         | `false`    | any        | skipped                      |
//! | `null`             | any        | `true`     | skipped                      |
//! | empty (`null`, `""`, `{}`, `[]`) | any | `false` | `not_nullable` error      |
//! | anything else      | any        | any        | [`Field::validate`]          |
//!
//! Empty non-null values under a nullable policy still go through
//! [`Field::validate`], so `"phone": []` is a type mismatch rather than an
//! absent phone.
//!
//! # Examples
//!
//! ```
//! use scrol_validator::fields::{CharField, PhoneField};
//! use scrol_validator::schema::RequestSchema;
//! use serde_json::json;
//!
//! let schema = RequestSchema::new("contact")
//!     .field("login", CharField::new().required())
//!     .field("phone", PhoneField::new());
//!
//! assert!(schema.validate(&json!({"login": "h&f", "phone": 79175002040_u64})).is_ok());
//!
//! let errors = schema.validate(&json!({"phone": "89175002040"})).unwrap_err();
//! assert_eq!(errors.fields(), vec!["login", "phone"]);
//! ```

pub mod config;
pub mod requests;

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::foundation::{
    Accepted, ErrorKind, Field, FieldError, RawKind, RawValue, ValidationError, ValidationErrors,
};

pub use config::{FieldKind, FieldSpec, SchemaConfig, SchemaError};

/// Field path used for errors about the payload as a whole.
pub const ROOT_PATH: &str = "$";

const PAYLOAD: Accepted = Accepted(&[RawKind::Dict]);

// ============================================================================
// REQUEST SCHEMA
// ============================================================================

/// An ordered set of named fields plus optional "at least one group" rules.
///
/// Declaring the same name twice replaces the earlier field but keeps its
/// position.
pub struct RequestSchema {
    name: Cow<'static, str>,
    fields: IndexMap<Cow<'static, str>, Box<dyn Field>>,
    groups: Vec<Vec<Cow<'static, str>>>,
}

impl RequestSchema {
    /// Creates an empty schema.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
            groups: Vec::new(),
        }
    }

    /// Declares a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(self, name: impl Into<Cow<'static, str>>, field: impl Field + 'static) -> Self {
        self.boxed_field(name, Box::new(field))
    }

    /// Declares a field that is already boxed.
    #[must_use = "builder methods must be chained or built"]
    pub fn boxed_field(mut self, name: impl Into<Cow<'static, str>>, field: Box<dyn Field>) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// Requires that at least one of the registered groups is fully present.
    ///
    /// Each call adds one group; the rule is satisfied when every field of
    /// any single group is present and non-empty. Names that are not
    /// declared make a group unsatisfiable.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_any_of<I, S>(mut self, group: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.groups.push(group.into_iter().map(Into::into).collect());
        self
    }

    /// Schema name, used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks up a declared field.
    pub fn get(&self, name: &str) -> Option<&dyn Field> {
        self.fields.get(name).map(|field| &**field)
    }

    /// Declared fields in order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &dyn Field)> {
        self.fields.iter().map(|(k, v)| (k.as_ref(), &**v))
    }

    /// Validates a request payload.
    ///
    /// The payload must be an object. Every declared field is checked and
    /// all failures are returned together; unknown keys are ignored.
    pub fn validate(&self, payload: &RawValue) -> Result<(), ValidationErrors> {
        let RawValue::Object(map) = payload else {
            let error = ValidationError::from(FieldError::type_mismatch(
                PAYLOAD,
                RawKind::of(payload),
            ))
            .with_field(ROOT_PATH);
            debug!(schema = %self.name, code = %error.code, "payload rejected");
            return Err(std::iter::once(error).collect());
        };

        let mut errors = ValidationErrors::new();

        for (name, field) in &self.fields {
            if let Some(error) = check_field(name, &**field, map.get(name.as_ref())) {
                debug!(
                    schema = %self.name,
                    field = %name,
                    code = %error.code,
                    "field rejected"
                );
                errors.add(error);
            }
        }

        if let Some(error) = self.check_groups(payload) {
            debug!(schema = %self.name, code = %error.code, "no field group present");
            errors.add(error);
        }

        trace!(schema = %self.name, errors = errors.len(), "request validated");
        errors.into_result(())
    }

    /// Names of declared fields that are present and non-empty, in order.
    pub fn non_empty_fields(&self, payload: &RawValue) -> Vec<&str> {
        let RawValue::Object(map) = payload else {
            return Vec::new();
        };

        self.fields
            .iter()
            .filter(|(name, field)| {
                map.get(name.as_ref())
                    .is_some_and(|value| !field.is_empty(value))
            })
            .map(|(name, _)| name.as_ref())
            .collect()
    }

    fn check_groups(&self, payload: &RawValue) -> Option<ValidationError> {
        if self.groups.is_empty() {
            return None;
        }

        let present = self.non_empty_fields(payload);
        let satisfied = self
            .groups
            .iter()
            .any(|group| group.iter().all(|name| present.contains(&name.as_ref())));
        if satisfied {
            return None;
        }

        let rendered = self
            .groups
            .iter()
            .map(|group| group.join(" & "))
            .collect::<Vec<_>>()
            .join(", ");

        Some(
            ValidationError::new(
                ErrorKind::Missing,
                "missing_group",
                format!("At least one group of fields must be present: {rendered}"),
            )
            .with_field(ROOT_PATH)
            .with_param("groups", rendered),
        )
    }
}

fn check_field(
    name: &Cow<'static, str>,
    field: &dyn Field,
    value: Option<&RawValue>,
) -> Option<ValidationError> {
    let options = field.options();

    let Some(value) = value else {
        return options
            .required
            .then(|| ValidationError::required(name.clone()));
    };

    if field.is_empty(value) {
        if !options.nullable {
            return Some(ValidationError::not_nullable(name.clone()));
        }
        if value.is_null() {
            return None;
        }
    }

    field
        .validate(value)
        .err()
        .map(|error| ValidationError::from(error).with_field(name.clone()))
}

impl fmt::Debug for RequestSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSchema")
            .field("name", &self.name)
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("groups", &self.groups)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{ArgumentsField, CharField, ClientIdsField, EmailField, PhoneField};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn codes(errors: &ValidationErrors) -> Vec<(&str, &str)> {
        errors
            .errors()
            .iter()
            .map(|e| (e.field.as_deref().unwrap_or_default(), e.code.as_ref()))
            .collect()
    }

    #[test]
    fn payload_must_be_object() {
        let schema = RequestSchema::new("test").field("a", CharField::new());
        let errors = schema.validate(&json!([1])).unwrap_err();
        assert_eq!(codes(&errors), vec![(ROOT_PATH, "type_mismatch")]);
        assert_eq!(errors.to_string(), "$: Value type must be dict");
    }

    #[test]
    fn required_and_nullable_policy() {
        let schema = RequestSchema::new("test")
            .field("login", CharField::new().required())
            .field("method", CharField::new().required().not_nullable())
            .field("account", CharField::new())
            .field("ids", ClientIdsField::new().not_nullable());

        let errors = schema
            .validate(&json!({"method": "", "ids": []}))
            .unwrap_err();
        assert_eq!(
            codes(&errors),
            vec![
                ("login", "required"),
                ("method", "not_nullable"),
                ("ids", "not_nullable"),
            ]
        );

        assert!(schema
            .validate(&json!({"login": null, "method": "m", "ids": [1]}))
            .is_ok());
    }

    #[test]
    fn empty_value_of_wrong_kind_is_still_checked() {
        let schema = RequestSchema::new("test").field("phone", PhoneField::new());
        let errors = schema.validate(&json!({"phone": []})).unwrap_err();
        assert_eq!(codes(&errors), vec![("phone", "type_mismatch")]);
        assert!(schema.validate(&json!({"phone": null})).is_ok());
        assert!(schema.validate(&json!({"phone": ""})).is_ok());
    }

    #[test]
    fn collects_every_failure_in_declaration_order() {
        let schema = RequestSchema::new("test")
            .field("email", EmailField::new())
            .field("arguments", ArgumentsField::new())
            .field("phone", PhoneField::new());

        let errors = schema
            .validate(&json!({"phone": 7, "email": "nope", "arguments": "a=1", "extra": 1}))
            .unwrap_err();
        assert_eq!(
            codes(&errors),
            vec![
                ("email", "missing_at_symbol"),
                ("arguments", "type_mismatch"),
                ("phone", "invalid_length"),
            ]
        );
    }

    #[test]
    fn groups() {
        let schema = RequestSchema::new("test")
            .field("phone", PhoneField::new())
            .field("email", EmailField::new())
            .field("first_name", CharField::new())
            .field("last_name", CharField::new())
            .require_any_of(["phone", "email"])
            .require_any_of(["first_name", "last_name"]);

        assert!(schema
            .validate(&json!({"first_name": "a", "last_name": "b"}))
            .is_ok());

        let errors = schema
            .validate(&json!({"phone": "79175002040", "first_name": "a", "last_name": ""}))
            .unwrap_err();
        let error = &errors.errors()[0];
        assert_eq!(error.kind, ErrorKind::Missing);
        assert_eq!(error.code, "missing_group");
        assert_eq!(error.param("groups"), Some("phone & email, first_name & last_name"));
    }

    #[test]
    fn non_empty_fields_ignores_unknown_and_empty() {
        let schema = RequestSchema::new("test")
            .field("a", CharField::new())
            .field("b", CharField::new())
            .field("c", CharField::new());

        let payload = json!({"c": "x", "a": "", "z": "y"});
        assert_eq!(schema.non_empty_fields(&payload), vec!["c"]);
        assert!(schema.non_empty_fields(&json!("x")).is_empty());
    }

    #[test]
    fn redeclaring_replaces_in_place() {
        let schema = RequestSchema::new("test")
            .field("a", CharField::new())
            .field("b", CharField::new())
            .field("a", PhoneField::new());

        let names: Vec<_> = schema.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(schema.get("a").map(|f| f.accepts().to_string()).as_deref(), Some("str or int"));
    }
}
