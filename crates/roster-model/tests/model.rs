//! Tests for roster-model types.

use roster_model::{Department, Employee, EmployeeId};

#[test]
fn deserializes_records_written_by_the_browser_dashboard() {
    let json = r#"{
        "id": "lx3k9a0q7f2",
        "name": "John Smith",
        "email": "john.smith@company.com",
        "department": "Engineering",
        "dateOfJoining": "2023-01-15",
        "createdAt": "2024-05-01T10:11:12.345Z",
        "updatedAt": "2024-05-01T10:11:12.345Z"
    }"#;
    let employee: Employee = serde_json::from_str(json).expect("deserialize employee");
    assert_eq!(employee.id, EmployeeId::new("lx3k9a0q7f2").unwrap());
    assert_eq!(employee.department, Department::Engineering);
    assert_eq!(employee.date_of_joining.to_string(), "2023-01-15");
}

#[test]
fn rejects_unknown_department_in_storage() {
    let json = r#"{
        "id": "a1",
        "name": "John Smith",
        "email": "john.smith@company.com",
        "department": "Legal",
        "dateOfJoining": "2023-01-15",
        "createdAt": "2024-05-01T10:11:12Z",
        "updatedAt": "2024-05-01T10:11:12Z"
    }"#;
    assert!(serde_json::from_str::<Employee>(json).is_err());
}

#[test]
fn department_list_matches_declaration_order() {
    let names: Vec<&str> = Department::ALL.iter().map(|d| d.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "HR",
            "Engineering",
            "Sales",
            "Marketing",
            "Finance",
            "Operations",
            "Product",
            "Design"
        ]
    );
}
