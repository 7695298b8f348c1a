//! Core validation types and traits
//!
//! This module contains the building blocks every field is made of:
//!
//! - **Values**: [`RawValue`], [`RawKind`], [`Accepted`]
//! - **Traits**: [`Field`], [`FieldOptions`]
//! - **Errors**: [`FieldError`], [`ErrorKind`], [`ValidationError`], [`ValidationErrors`]
//!
//! # Failure ordering
//!
//! A field classifies the value, rejects a foreign kind with
//! [`FieldError::TypeMismatch`], lets empty content through, and only then
//! runs its semantic checks. Semantic checks may be staged (length before
//! prefix, shape before calendar) and stop at the first failure.
//!
//! ```
//! use scrol_validator::foundation::{ErrorKind, Field};
//! use scrol_validator::fields::DateField;
//! use serde_json::json;
//!
//! let date = DateField::new();
//! assert_eq!(date.validate(&json!(1)).unwrap_err().kind(), ErrorKind::TypeMismatch);
//! assert_eq!(date.validate(&json!("29.02.2021")).unwrap_err().kind(), ErrorKind::ValueInvalid);
//! ```

pub mod error;
pub mod raw;
pub mod traits;

pub use error::{ErrorKind, FieldError, ValidationError, ValidationErrors};
pub use raw::{Accepted, RawKind, RawValue, is_empty};
pub use traits::{Field, FieldOptions};

pub(crate) use traits::check_kind;
