//! Transient selection state: which view is active and how it is filtered.

use std::fmt;

use roster_model::Department;
use serde::{Deserialize, Serialize};

/// Top-level display selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Every record.
    #[default]
    All,
    /// Department-grouped overview.
    Departments,
    /// One department's members.
    DepartmentDetail(Department),
    /// Records whose join date falls in the current month.
    NewHires,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Name,
    DateOfJoining,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Name => f.write_str("name"),
            SortKey::DateOfJoining => f.write_str("dateOfJoining"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}

/// User-controlled filters layered on top of the view mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Case-insensitive substring matched against name and email.
    pub search: String,
    /// Department dropdown. Only honoured in [`ViewMode::All`].
    pub department: Option<Department>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

/// Current view selection.
///
/// Switching view mode clears the search text and the department dropdown.
/// The sort selection survives view switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub mode: ViewMode,
    pub filters: FilterOptions,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_all(&mut self) {
        self.switch_to(ViewMode::All);
    }

    pub fn show_departments(&mut self) {
        self.switch_to(ViewMode::Departments);
    }

    pub fn show_department(&mut self, department: Department) {
        self.switch_to(ViewMode::DepartmentDetail(department));
    }

    pub fn show_new_hires(&mut self) {
        self.switch_to(ViewMode::NewHires);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filters.search = search.into();
    }

    pub fn set_department_filter(&mut self, department: Option<Department>) {
        self.filters.department = department;
    }

    /// Clicking the active ascending column flips it to descending; anything
    /// else sorts ascending on `key`.
    pub fn toggle_sort(&mut self, key: SortKey) {
        let order = if self.filters.sort_by == key && self.filters.sort_order == SortOrder::Asc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        self.filters.sort_by = key;
        self.filters.sort_order = order;
    }

    pub fn set_sort(&mut self, key: SortKey, order: SortOrder) {
        self.filters.sort_by = key;
        self.filters.sort_order = order;
    }

    /// Department selected by the current view, if any.
    pub fn selected_department(&self) -> Option<Department> {
        match self.mode {
            ViewMode::DepartmentDetail(department) => Some(department),
            _ => None,
        }
    }

    pub fn title(&self) -> String {
        match self.mode {
            ViewMode::All => "All Employees".to_string(),
            ViewMode::Departments => "Departments".to_string(),
            ViewMode::DepartmentDetail(department) => format!("Department: {department}"),
            ViewMode::NewHires => "New Hires This Month".to_string(),
        }
    }

    fn switch_to(&mut self, mode: ViewMode) {
        self.mode = mode;
        self.filters.search.clear();
        self.filters.department = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_views_resets_search_and_dropdown() {
        let mut state = ViewState::new();
        state.set_search("ann");
        state.set_department_filter(Some(Department::Sales));
        state.toggle_sort(SortKey::DateOfJoining);

        state.show_department(Department::Hr);

        assert_eq!(state.filters.search, "");
        assert_eq!(state.filters.department, None);
        assert_eq!(state.selected_department(), Some(Department::Hr));
        assert_eq!(state.filters.sort_by, SortKey::DateOfJoining);
        assert_eq!(state.title(), "Department: HR");
    }

    #[test]
    fn toggle_sort_flips_direction_on_same_key() {
        let mut state = ViewState::new();
        assert_eq!(state.filters.sort_order, SortOrder::Asc);

        state.toggle_sort(SortKey::Name);
        assert_eq!(state.filters.sort_order, SortOrder::Desc);

        state.toggle_sort(SortKey::Name);
        assert_eq!(state.filters.sort_order, SortOrder::Asc);

        state.toggle_sort(SortKey::Name);
        state.toggle_sort(SortKey::DateOfJoining);
        assert_eq!(state.filters.sort_by, SortKey::DateOfJoining);
        assert_eq!(state.filters.sort_order, SortOrder::Asc);
    }

    #[test]
    fn titles() {
        let mut state = ViewState::new();
        assert_eq!(state.title(), "All Employees");
        state.show_departments();
        assert_eq!(state.title(), "Departments");
        state.show_new_hires();
        assert_eq!(state.title(), "New Hires This Month");
    }
}
