//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::repository::EmployeeStore;
use crate::service::{EmployeeManager, EmployeeService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Employee use cases
    pub employee_service: Arc<dyn EmployeeService>,
    /// Database handle (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Create new app state.
    pub fn new(employee_service: Arc<dyn EmployeeService>, database: Arc<Database>) -> Self {
        Self {
            employee_service,
            database,
        }
    }

    /// Wire the SeaORM store and the employee service on top of a database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repo = Arc::new(EmployeeStore::new(database.get_connection()));
        let service = Arc::new(EmployeeManager::new(repo));

        Self::new(service, database)
    }
}
