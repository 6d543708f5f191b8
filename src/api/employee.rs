use actix_web::{HttpResponse, web};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use crate::{
    api::admission::read_body,
    config::Config,
    error::ApiError,
    model::employee::{DeletedEmployee, EmployeeId},
    store::EmployeeStore,
    utils::validation::{parse_employee_patch, parse_new_employee},
};

/// admission -> parse -> validate
async fn json_body(payload: web::Payload, config: &Config) -> Result<Value, ApiError> {
    let raw = read_body(payload, config.max_body_bytes).await?;
    Ok(serde_json::from_slice(&raw)?)
}

/// List employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees keyed by id, salaries omitted",
            body = Object,
            example = json!({"1": {"name": "Test User", "role": "Tester"}}))
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    store: web::Data<dyn EmployeeStore>,
) -> Result<HttpResponse, ApiError> {
    let employees = store.list().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Get employee by id
#[utoipa::path(
    get,
    path = "/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeView),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "employee 1 not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<EmployeeId>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    debug!(employee_id, "Fetching employee");

    let employee = store.get(employee_id).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Create employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body(
        content = crate::model::employee::NewEmployee,
        example = json!({"name": "Test User", "role": "Tester", "salary": 100000})
    ),
    responses(
        (status = 201, description = "Employee created, keyed by its new id",
            body = Object,
            example = json!({"1": {"name": "Test User", "role": "Tester"}})),
        (status = 400, description = "Invalid JSON or schema violation", body = Object, example = json!({
            "error": "field `role` must be a string"
        })),
        (status = 413, description = "Request body too large", body = Object)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    config: web::Data<Config>,
    payload: web::Payload,
) -> Result<HttpResponse, ApiError> {
    let body = json_body(payload, &config).await?;
    let new_employee = parse_new_employee(&body)?;

    let (employee_id, employee) = store.create(new_employee).await?;

    Ok(HttpResponse::Created().json(BTreeMap::from([(employee_id, employee)])))
}

/// Update employee
#[utoipa::path(
    put,
    path = "/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    request_body(
        content = crate::model::employee::EmployeePatch,
        example = json!({"name": "Updated Test", "role": "Senior Intern"})
    ),
    responses(
        (status = 200, description = "Full updated employee", body = EmployeeView),
        (status = 400, description = "Invalid JSON, wrong field type, or immutable field", body = Object),
        (status = 404, description = "Employee not found", body = Object),
        (status = 413, description = "Request body too large", body = Object)
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    store: web::Data<dyn EmployeeStore>,
    config: web::Data<Config>,
    path: web::Path<EmployeeId>,
    payload: web::Payload,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let body = json_body(payload, &config).await?;
    let patch = parse_employee_patch(&body)?;

    let employee = store.update(employee_id, patch).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete employee
#[utoipa::path(
    delete,
    path = "/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = DeletedEmployee),
        (status = 404, description = "Employee not found", body = Object)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<EmployeeId>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let deleted = store.delete(employee_id).await?;
    Ok(HttpResponse::Ok().json(DeletedEmployee { deleted }))
}
