//! Built-in request fields
//!
//! # Primitive fields
//!
//! - [`CharField`]: any string
//! - [`ArgumentsField`]: any object
//! - [`GenderField`]: `0`, `1` or `2`
//! - [`ClientIdsField`]: list of integers
//!
//! # Format fields
//!
//! - [`EmailField`]: string containing `@`
//! - [`PhoneField`]: 11-character string or integer starting with `7`
//! - [`DateField`]: `DD.MM.YYYY` calendar date
//!
//! # Derived fields
//!
//! - [`BirthDayField`]: a [`DateField`] date no more than 70 years ago
//!
//! Every field is a small `Copy` value with an optional/nullable default
//! policy that can be tightened with `.required()` and `.not_nullable()`.

pub mod arguments;
pub mod birthday;
pub mod client_ids;
pub mod date;
pub mod email;
pub mod gender;
pub mod phone;
pub mod text;

pub use arguments::ArgumentsField;
pub use birthday::BirthDayField;
pub use client_ids::ClientIdsField;
pub use date::{DATE_LAYOUT, DateField, parse_date};
pub use email::EmailField;
pub use gender::{Gender, GenderField};
pub use phone::PhoneField;
pub use text::CharField;
