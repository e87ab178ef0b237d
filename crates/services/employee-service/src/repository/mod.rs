//! Repository layer for data access.

pub mod entities;
mod employee_repository;

pub use employee_repository::{EmployeeRepository, EmployeeStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
