//! The displayed-employees pipeline.
//!
//! Stages run in a fixed order:
//!
//! 1. view narrowing (department detail, or new hires)
//! 2. free-text search over name and email
//! 3. department dropdown, in the "all" view only
//! 4. stable sort
//!
//! The new-hires view replaces the working set with this month's hires from
//! the full collection instead of intersecting with anything earlier.

use std::cmp::Ordering;

use chrono::NaiveDate;
use roster_model::Employee;
use tracing::debug;

use crate::state::{FilterOptions, SortKey, SortOrder, ViewMode, ViewState};
use crate::stats::new_hires_this_month;

/// Employees to display for `state`, given the full collection.
pub fn displayed_employees<'a>(
    employees: &'a [Employee],
    state: &ViewState,
    today: NaiveDate,
) -> Vec<&'a Employee> {
    let filters = &state.filters;

    let mut working: Vec<&Employee> = match state.mode {
        ViewMode::DepartmentDetail(department) => employees
            .iter()
            .filter(|e| e.department == department)
            .collect(),
        ViewMode::NewHires => new_hires_this_month(employees, today),
        ViewMode::All | ViewMode::Departments => employees.iter().collect(),
    };
    debug!(
        total = employees.len(),
        mode = ?state.mode,
        after_view = working.len(),
        "narrowed by view"
    );

    if !filters.search.is_empty() {
        let needle = filters.search.to_lowercase();
        working.retain(|e| matches_search(e, &needle));
        debug!(after_search = working.len(), "applied search filter");
    }

    if state.mode == ViewMode::All
        && let Some(department) = filters.department
    {
        working.retain(|e| e.department == department);
        debug!(%department, after_department = working.len(), "applied department filter");
    }

    sort_employees(&mut working, filters);
    working
}

fn matches_search(employee: &Employee, needle: &str) -> bool {
    employee.name.to_lowercase().contains(needle) || employee.email.to_lowercase().contains(needle)
}

/// Stable in-place sort by the selected key and direction.
///
/// Records with equal keys keep their relative order in both directions.
pub fn sort_employees(employees: &mut [&Employee], filters: &FilterOptions) {
    employees.sort_by(|a, b| {
        let ordering = compare_by(a, b, filters.sort_by);
        match filters.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare_by(a: &Employee, b: &Employee, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::DateOfJoining => a.date_of_joining.cmp(&b.date_of_joining),
    }
}
