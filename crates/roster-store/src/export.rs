//! CSV export.
//!
//! Layout: an unquoted header line, then one line per record with every field
//! wrapped in double quotes, lines joined by `\n` with no trailing newline.

use chrono::{NaiveDate, SecondsFormat};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use roster_model::Employee;

use crate::error::ExportError;

pub const CSV_HEADER: [&str; 6] = [
    "ID",
    "Name",
    "Email",
    "Department",
    "Date of Joining",
    "Created At",
];

/// Render `employees` as CSV text in the given order.
pub fn employees_to_csv(employees: &[Employee]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for employee in employees {
        let date_of_joining = employee.date_of_joining.to_string();
        // Whole seconds carry no fraction: a stored `.000Z` exports as `Z`.
        let created_at = employee
            .created_at
            .to_rfc3339_opts(SecondsFormat::AutoSi, true);
        writer.write_record([
            employee.id.as_str(),
            employee.name.as_str(),
            employee.email.as_str(),
            employee.department.as_str(),
            date_of_joining.as_str(),
            created_at.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    let body = String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))?;

    let mut out = CSV_HEADER.join(",");
    let body = body.trim_end_matches('\n');
    if !body.is_empty() {
        out.push('\n');
        out.push_str(body);
    }
    Ok(out)
}

/// Suggested download name, e.g. `employees_2024-06-20.csv`.
pub fn export_file_name(today: NaiveDate) -> String {
    format!("employees_{}.csv", today.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roster_is_header_only() {
        let csv = employees_to_csv(&[]).unwrap();
        assert_eq!(csv, "ID,Name,Email,Department,Date of Joining,Created At");
    }

    #[test]
    fn file_name_uses_iso_date() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(export_file_name(today), "employees_2024-06-05.csv");
    }
}
