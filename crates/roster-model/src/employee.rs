use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Department, EmployeeId};

/// One employee record as held by the store and persisted to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub department: Department,
    pub date_of_joining: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Build a fresh record. Both timestamps are set to `now`.
    pub fn from_form(id: EmployeeId, form: EmployeeFormData, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: form.name,
            email: form.email,
            department: form.department,
            date_of_joining: form.date_of_joining,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields. `created_at` is left untouched.
    pub fn apply_form(&mut self, form: EmployeeFormData, now: DateTime<Utc>) {
        self.name = form.name;
        self.email = form.email;
        self.department = form.department;
        self.date_of_joining = form.date_of_joining;
        self.updated_at = now;
    }

    /// The form payload that would reproduce this record's mutable fields.
    pub fn form_data(&self) -> EmployeeFormData {
        EmployeeFormData {
            name: self.name.clone(),
            email: self.email.clone(),
            department: self.department,
            date_of_joining: self.date_of_joining,
        }
    }
}

/// Validated payload for create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFormData {
    pub name: String,
    pub email: String,
    pub department: Department,
    pub date_of_joining: NaiveDate,
}
