//! Validation rules for employee forms.
//!
//! The predicates in [`rules`] are pure and stateless so they can be reused
//! outside any particular form binding. [`form`] layers field-level checks on
//! top of them and reports every failing field at once.

pub mod form;
pub mod rules;

pub use form::{FieldError, FieldErrorKind, FormErrors, FormField, FormInput, validate_form};
pub use rules::{
    format_long_date, is_not_future, is_valid_email, is_valid_name, is_valid_name_field,
    parse_date,
};
