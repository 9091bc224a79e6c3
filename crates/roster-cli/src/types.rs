use std::path::PathBuf;

use roster_model::{Department, Employee, EmployeeId};
use roster_validate::FormErrors;
use roster_view::{DepartmentShare, ViewMode};

#[derive(Debug)]
pub struct ListResult<'a> {
    pub title: String,
    pub mode: ViewMode,
    pub employees: Vec<&'a Employee>,
    /// Size of the whole roster, before any view, search or filter.
    pub total: usize,
    /// Per-department counts over the whole roster (departments view only).
    pub distribution: Vec<DepartmentShare>,
}

/// Result of an add or update.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved(EmployeeId),
    Rejected(FormErrors),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentCount {
    pub department: Department,
    pub employees: usize,
}

#[derive(Debug)]
pub enum ExportTarget {
    Stdout(String),
    File { path: PathBuf, rows: usize },
}
