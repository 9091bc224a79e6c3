//! Derived views over the employee collection.
//!
//! Everything here is a pure function of the current collection, the current
//! [`ViewState`] and the caller's notion of "today". Nothing mutates its
//! inputs; callers recompute whenever either side changes.

pub mod pipeline;
pub mod state;
pub mod stats;

pub use pipeline::{displayed_employees, sort_employees};
pub use state::{FilterOptions, SortKey, SortOrder, ViewMode, ViewState};
pub use stats::{
    DepartmentShare, Tenure, average_tenure, department_distribution, distinct_departments,
    joined_in_month_of, months_between, new_hires_this_month,
};
