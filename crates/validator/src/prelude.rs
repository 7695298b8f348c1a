//! Prelude module for convenient imports.
//!
//! `use scrol_validator::prelude::*;` brings in the field trait, the error
//! types, every built-in field and the schema types.

pub use crate::foundation::{
    Accepted, ErrorKind, Field, FieldError, FieldOptions, RawKind, RawValue, ValidationError,
    ValidationErrors,
};

pub use crate::fields::{
    ArgumentsField, BirthDayField, CharField, ClientIdsField, DateField, EmailField, Gender,
    GenderField, PhoneField,
};

pub use crate::schema::{FieldKind, FieldSpec, RequestSchema, SchemaConfig, SchemaError};
