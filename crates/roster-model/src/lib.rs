pub mod department;
pub mod employee;
pub mod error;
pub mod ids;

pub use department::Department;
pub use employee::{Employee, EmployeeFormData};
pub use error::{ModelError, Result};
pub use ids::EmployeeId;
