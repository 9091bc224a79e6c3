//! Aggregates over the full, unfiltered collection.

use std::collections::HashSet;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use roster_model::{Department, Employee};
use serde::{Deserialize, Serialize};

/// One department's slice of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentShare {
    pub department: Department,
    pub count: usize,
    /// Share of the total, rounded to the nearest whole percent.
    pub percentage: u32,
}

/// Per-department counts ordered by descending count.
///
/// Departments with equal counts keep the order in which they first appear
/// in `employees`. Departments without members are omitted.
pub fn department_distribution(employees: &[Employee]) -> Vec<DepartmentShare> {
    let mut counts: Vec<(Department, usize)> = Vec::new();
    for employee in employees {
        match counts.iter_mut().find(|(dept, _)| *dept == employee.department) {
            Some((_, count)) => *count += 1,
            None => counts.push((employee.department, 1)),
        }
    }

    let total = employees.len();
    let mut shares: Vec<DepartmentShare> = counts
        .into_iter()
        .map(|(department, count)| DepartmentShare {
            department,
            count,
            percentage: percentage_of(count, total),
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

fn percentage_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

pub fn distinct_departments(employees: &[Employee]) -> usize {
    employees
        .iter()
        .map(|e| e.department)
        .collect::<HashSet<_>>()
        .len()
}

/// True if `date` falls in the same calendar month and year as `today`.
pub fn joined_in_month_of(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

/// Records that joined in the current calendar month, in collection order.
pub fn new_hires_this_month(employees: &[Employee], today: NaiveDate) -> Vec<&Employee> {
    employees
        .iter()
        .filter(|e| joined_in_month_of(e.date_of_joining, today))
        .collect()
}

/// Whole calendar months from `joined` to `today`, never negative.
///
/// Only year and month take part; the day of month is ignored.
pub fn months_between(joined: NaiveDate, today: NaiveDate) -> u32 {
    let months = (today.year() - joined.year()) * 12 + (today.month() as i32 - joined.month() as i32);
    months.max(0) as u32
}

/// Average tenure in months.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tenure {
    pub months: f64,
}

impl fmt::Display for Tenure {
    /// `"7.5 months"` below a year, `"2.3 years"` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.months < 12.0 {
            write!(f, "{:.1} months", self.months)
        } else {
            write!(f, "{:.1} years", self.months / 12.0)
        }
    }
}

pub fn average_tenure(employees: &[Employee], today: NaiveDate) -> Tenure {
    if employees.is_empty() {
        return Tenure { months: 0.0 };
    }
    let total: u64 = employees
        .iter()
        .map(|e| u64::from(months_between(e.date_of_joining, today)))
        .sum();
    Tenure {
        months: total as f64 / employees.len() as f64,
    }
}
