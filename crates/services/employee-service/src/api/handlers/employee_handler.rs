//! Employee handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::{Employee, NewEmployee};

use crate::api::extractors::{EmployeeId, ValidatedJson};
use crate::api::AppState;

/// Employee create/replace request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    /// Given name
    #[validate(length(min = 1, max = 45, message = "First name must be 1-45 characters"))]
    #[schema(example = "Leslie", max_length = 45)]
    pub first_name: String,
    /// Family name
    #[validate(length(min = 1, max = 45, message = "Last name must be 1-45 characters"))]
    #[schema(example = "Andrews", max_length = 45)]
    pub last_name: String,
    /// Contact email address
    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email is too long")
    )]
    #[schema(example = "leslie@example.com")]
    pub email: String,
}

impl From<EmployeeRequest> for NewEmployee {
    fn from(req: EmployeeRequest) -> Self {
        NewEmployee {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
        }
    }
}

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "All employees ordered by id", body = Vec<Employee>)
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employee_service.list_employees().await?;
    Ok(Json(employees))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee record", body = Employee),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> AppResult<Json<Employee>> {
    let employee = state.employee_service.get_employee(id).await?;
    Ok(Json(employee))
}

/// Create a new employee
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "Employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EmployeeRequest>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let employee = state
        .employee_service
        .create_employee(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Replace an existing employee
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
    ValidatedJson(payload): ValidatedJson<EmployeeRequest>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employee_service
        .update_employee(id, payload.into())
        .await?;

    Ok(Json(employee))
}

/// Delete employee
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> AppResult<StatusCode> {
    state.employee_service.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
