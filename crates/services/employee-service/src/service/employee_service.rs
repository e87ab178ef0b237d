//! Employee service - Handles employee-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{Employee, NewEmployee};

use crate::repository::EmployeeRepository;

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// List all employees
    async fn list_employees(&self) -> AppResult<Vec<Employee>>;

    /// Get employee by ID
    async fn get_employee(&self, id: i32) -> AppResult<Employee>;

    /// Create a new employee; any id on the payload is ignored
    async fn create_employee(&self, employee: NewEmployee) -> AppResult<Employee>;

    /// Replace every field of an existing employee
    async fn update_employee(&self, id: i32, employee: NewEmployee) -> AppResult<Employee>;

    /// Delete employee by ID
    async fn delete_employee(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of EmployeeService using repository.
pub struct EmployeeManager {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeManager {
    /// Create new employee service instance with repository
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl EmployeeService for EmployeeManager {
    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.repo.find_all().await
    }

    async fn get_employee(&self, id: i32) -> AppResult<Employee> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_employee(&self, employee: NewEmployee) -> AppResult<Employee> {
        let employee = employee.into_employee();
        employee.validate()?;

        let saved = self.repo.save(employee).await?;
        tracing::info!(id = saved.id, "Employee created");
        Ok(saved)
    }

    async fn update_employee(&self, id: i32, employee: NewEmployee) -> AppResult<Employee> {
        if id <= 0 {
            return Err(AppError::NotFound);
        }

        let employee = employee.into_employee().with_id(id);
        employee.validate()?;

        let saved = self.repo.save(employee).await?;
        tracing::info!(id, "Employee updated");
        Ok(saved)
    }

    async fn delete_employee(&self, id: i32) -> AppResult<()> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound);
        }

        self.repo.delete_by_id(id).await?;
        tracing::info!(id, "Employee deleted");
        Ok(())
    }
}
