//! Employee repository: the data-access contract and its SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use common::{AppError, AppResult};
use domain::Employee;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
///
/// Absence is not an error at this layer: `find_by_id` yields `None` and
/// `delete_by_id` on an unknown id does nothing.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// List every employee, ordered by id
    async fn find_all(&self) -> AppResult<Vec<Employee>>;

    /// Find employee by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>>;

    /// Insert (id == 0) or update (id != 0) an employee and return the stored row.
    ///
    /// Updating an id with no row returns `AppError::NotFound`.
    async fn save(&self, employee: Employee) -> AppResult<Employee>;

    /// Delete employee by ID; a missing row is a no-op
    async fn delete_by_id(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of EmployeeRepository backed by SeaORM
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn save(&self, employee: Employee) -> AppResult<Employee> {
        if employee.is_new() {
            let model = ActiveModel::for_insert(employee)
                .insert(&self.db)
                .await
                .map_err(AppError::from)?;
            tracing::debug!(id = model.id, "Inserted employee");
            return Ok(Employee::from(model));
        }

        let id = employee.id;
        let model = ActiveModel::for_update(employee)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => AppError::NotFound,
                other => AppError::from(other),
            })?;
        tracing::debug!(id, "Updated employee");

        Ok(Employee::from(model))
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let result = EmployeeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            tracing::debug!(id, "Delete matched no employee");
        }

        Ok(())
    }
}
