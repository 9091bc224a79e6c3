//! Sample records used to populate an empty roster.

use chrono::NaiveDate;
use roster_model::{Department, EmployeeFormData};

const SAMPLES: [(&str, &str, Department, (i32, u32, u32)); 3] = [
    (
        "John Smith",
        "john.smith@company.com",
        Department::Engineering,
        (2023, 1, 15),
    ),
    (
        "Sarah Johnson",
        "sarah.johnson@company.com",
        Department::Hr,
        (2022, 8, 1),
    ),
    (
        "Mike Chen",
        "mike.chen@company.com",
        Department::Sales,
        (2023, 3, 22),
    ),
];

pub fn sample_employees() -> Vec<EmployeeFormData> {
    SAMPLES
        .iter()
        .filter_map(|(name, email, department, (y, m, d))| {
            Some(EmployeeFormData {
                name: (*name).to_string(),
                email: (*email).to_string(),
                department: *department,
                date_of_joining: NaiveDate::from_ymd_opt(*y, *m, *d)?,
            })
        })
        .collect()
}
