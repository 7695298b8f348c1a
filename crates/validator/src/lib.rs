//! # scrol-validator
//!
//! Typed validators for the fields of untyped JSON requests.
//!
//! ## Quick Start
//!
//! ```
//! use scrol_validator::prelude::*;
//! use serde_json::json;
//!
//! let phone = PhoneField::new();
//! assert!(phone.validate(&json!("70123456789")).is_ok());
//!
//! let err = phone.validate(&json!("10123456789")).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ValueInvalid);
//! assert_eq!(err.to_string(), "Value must start with 7");
//! ```
//!
//! ## Fields
//!
//! Each field checks the value's kind first, lets empty content through,
//! then applies its own rules:
//!
//! - **Primitive**: [`CharField`](fields::CharField), [`ArgumentsField`](fields::ArgumentsField),
//!   [`GenderField`](fields::GenderField), [`ClientIdsField`](fields::ClientIdsField)
//! - **Format**: [`EmailField`](fields::EmailField), [`PhoneField`](fields::PhoneField),
//!   [`DateField`](fields::DateField)
//! - **Derived**: [`BirthDayField`](fields::BirthDayField)
//!
//! ## Schemas
//!
//! [`RequestSchema`](schema::RequestSchema) groups named fields and enforces
//! their required/nullable policy. Schemas can also be loaded from JSON with
//! [`SchemaConfig`](schema::SchemaConfig).

pub mod fields;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod schema;
