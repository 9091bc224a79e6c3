//! Field-level validation of raw form input.
//!
//! Every field is checked independently; a failure in one field never hides
//! the result for another. Each field reports at most one error, picked in
//! the order required, length, shape, range.

use std::fmt;

use chrono::NaiveDate;
use roster_model::{Department, EmployeeFormData};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules::{is_not_future, is_valid_email, is_valid_name, is_valid_name_field, parse_date};

/// Raw, unvalidated form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub department: String,
    pub date_of_joining: String,
}

impl From<&EmployeeFormData> for FormInput {
    fn from(form: &EmployeeFormData) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            department: form.department.to_string(),
            date_of_joining: form.date_of_joining.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Email,
    Department,
    DateOfJoining,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Department => "department",
            FormField::DateOfJoining => "date of joining",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a field was rejected. The display text is the inline message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    #[error("This field is required")]
    Required,
    #[error("Name must be at least 3 characters long")]
    NameTooShort,
    #[error("Name can only contain letters and spaces")]
    NamePattern,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Date of joining cannot be in the future")]
    FutureDate,
    #[error("Invalid value")]
    InvalidValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {kind}")]
pub struct FieldError {
    pub field: FormField,
    pub kind: FieldErrorKind,
}

/// All field errors for one submission, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} invalid field(s)", .0.len())]
pub struct FormErrors(pub Vec<FieldError>);

impl FormErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn for_field(&self, field: FormField) -> Option<FieldErrorKind> {
        self.0.iter().find(|e| e.field == field).map(|e| e.kind)
    }
}

/// Validate a submission against `today`.
///
/// On success the returned payload has its name and email trimmed.
pub fn validate_form(input: &FormInput, today: NaiveDate) -> Result<EmployeeFormData, FormErrors> {
    let mut errors = Vec::new();

    let name = input.name.trim();
    if let Some(kind) = check_name(&input.name) {
        errors.push(FieldError {
            field: FormField::Name,
            kind,
        });
    }

    let email = input.email.trim();
    if let Some(kind) = check_email(email) {
        errors.push(FieldError {
            field: FormField::Email,
            kind,
        });
    }

    let department = match check_department(&input.department) {
        Ok(dept) => Some(dept),
        Err(kind) => {
            errors.push(FieldError {
                field: FormField::Department,
                kind,
            });
            None
        }
    };

    let date_of_joining = match check_date(&input.date_of_joining, today) {
        Ok(date) => Some(date),
        Err(kind) => {
            errors.push(FieldError {
                field: FormField::DateOfJoining,
                kind,
            });
            None
        }
    };

    match (department, date_of_joining) {
        (Some(department), Some(date_of_joining)) if errors.is_empty() => Ok(EmployeeFormData {
            name: name.to_string(),
            email: email.to_string(),
            department,
            date_of_joining,
        }),
        _ => Err(FormErrors(errors)),
    }
}

fn check_name(name: &str) -> Option<FieldErrorKind> {
    if name.trim().is_empty() {
        Some(FieldErrorKind::Required)
    } else if !is_valid_name(name) {
        Some(FieldErrorKind::NameTooShort)
    } else if !is_valid_name_field(name) {
        Some(FieldErrorKind::NamePattern)
    } else {
        None
    }
}

fn check_email(email: &str) -> Option<FieldErrorKind> {
    if email.is_empty() {
        Some(FieldErrorKind::Required)
    } else if !is_valid_email(email) {
        Some(FieldErrorKind::InvalidEmail)
    } else {
        None
    }
}

fn check_department(value: &str) -> Result<Department, FieldErrorKind> {
    if value.trim().is_empty() {
        return Err(FieldErrorKind::Required);
    }
    value.parse().map_err(|_| FieldErrorKind::InvalidValue)
}

fn check_date(value: &str, today: NaiveDate) -> Result<NaiveDate, FieldErrorKind> {
    if value.trim().is_empty() {
        return Err(FieldErrorKind::Required);
    }
    let date = parse_date(value).ok_or(FieldErrorKind::InvalidValue)?;
    if !is_not_future(date, today) {
        return Err(FieldErrorKind::FutureDate);
    }
    Ok(date)
}
