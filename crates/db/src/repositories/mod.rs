//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod assignment_repo;
pub mod employee_repo;
pub mod timesheet_repo;

pub use assignment_repo::AssignmentRepo;
pub use employee_repo::EmployeeRepo;
pub use timesheet_repo::TimesheetRepo;
