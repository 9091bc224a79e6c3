use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_model::Employee;
use roster_store::Statistics;
use roster_validate::{FormErrors, format_long_date};
use roster_view::{DepartmentShare, ViewMode};

use crate::types::{DepartmentCount, ListResult};

pub fn print_list(result: &ListResult<'_>) {
    println!("{}", result.title);
    if result.mode == ViewMode::Departments && !result.distribution.is_empty() {
        println!("{}", distribution_table(&result.distribution));
    }
    if result.employees.is_empty() {
        println!("No employees found.");
    } else {
        println!("{}", employees_table(&result.employees));
    }
    println!("Showing {} of {} employees", result.employees.len(), result.total);
}

pub fn print_employee(employee: &Employee) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    let rows = [
        ("ID", employee.id.to_string()),
        ("Name", employee.name.clone()),
        ("Email", employee.email.clone()),
        ("Department", employee.department.to_string()),
        ("Date of Joining", format_long_date(employee.date_of_joining)),
        ("Created", employee.created_at.to_rfc3339()),
        ("Updated", employee.updated_at.to_rfc3339()),
    ];
    for (label, value) in rows {
        table.add_row(vec![header_cell(label), Cell::new(value)]);
    }
    println!("{table}");
}

pub fn print_form_errors(errors: &FormErrors) {
    eprintln!("Please fix the following:");
    for error in errors.iter() {
        eprintln!("- {error}");
    }
}

pub fn print_statistics(stats: &Statistics) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total Employees"),
        header_cell("Departments"),
        header_cell("New This Month"),
        header_cell("Avg. Tenure"),
    ]);
    apply_table_style(&mut table);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        count_cell(stats.total),
        count_cell(stats.departments),
        count_cell(stats.new_this_month),
        Cell::new(&stats.average_tenure),
    ]);
    println!("{table}");
    if !stats.department_distribution.is_empty() {
        println!();
        println!("Department Distribution:");
        println!("{}", distribution_table(&stats.department_distribution));
    }
}

pub fn print_departments(departments: &[DepartmentCount]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Department"), header_cell("Employees")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in departments {
        table.add_row(vec![
            Cell::new(entry.department),
            count_cell(entry.employees),
        ]);
    }
    println!("{table}");
}

pub fn employees_table(employees: &[&Employee]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Email"),
        header_cell("Department"),
        header_cell("Date of Joining"),
    ]);
    apply_table_style(&mut table);
    for employee in employees {
        table.add_row(vec![
            dim_cell(&employee.id),
            Cell::new(&employee.name).add_attribute(Attribute::Bold),
            Cell::new(&employee.email),
            Cell::new(employee.department),
            Cell::new(format_long_date(employee.date_of_joining)),
        ]);
    }
    table
}

pub fn distribution_table(shares: &[DepartmentShare]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Department"),
        header_cell("Employees"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for share in shares {
        table.add_row(vec![
            Cell::new(share.department),
            count_cell(share.count),
            Cell::new(format!("{}%", share.percentage)),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
