//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::employee_handler;
use domain::Employee;

/// OpenAPI documentation for the employee service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Directory API",
        version = "0.1.0",
        description = "CRUD API over employee records backed by SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        employee_handler::list_employees,
        employee_handler::get_employee,
        employee_handler::create_employee,
        employee_handler::update_employee,
        employee_handler::delete_employee,
    ),
    components(
        schemas(
            Employee,
            employee_handler::EmployeeRequest,
        )
    ),
    tags(
        (name = "Employees", description = "Employee directory operations")
    )
)]
pub struct ApiDoc;
