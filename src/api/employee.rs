use crate::{
    api::MessageResponse,
    error::AppError,
    model::employee::{Employee, EmployeeFields},
    service::records::RecordService,
};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EmployeeEnvelope {
    pub employee: Employee,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EmployeeListEnvelope {
    pub employees: Vec<Employee>,
}

/// List employees
#[utoipa::path(
    get,
    path = "/employees/",
    responses(
        (status = 200, description = "All employees with department names", body = EmployeeListEnvelope),
        (status = 500, description = "Internal server error", body = crate::api::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn list_employees(records: web::Data<RecordService>) -> Result<HttpResponse, AppError> {
    let employees = records.list_employees().await?;
    Ok(HttpResponse::Ok().json(EmployeeListEnvelope { employees }))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees/",
    request_body = EmployeeFields,
    responses(
        (status = 201, description = "Employee created", body = EmployeeEnvelope),
        (status = 400, description = "Missing fields, invalid email or duplicate email", body = crate::api::ErrorBody, example = json!({
            "error": "Employee with this email already exists"
        })),
        (status = 404, description = "Department not found", body = crate::api::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::api::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    records: web::Data<RecordService>,
    payload: web::Json<EmployeeFields>,
) -> Result<HttpResponse, AppError> {
    let employee = records.create_employee(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(EmployeeEnvelope { employee }))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/employees/{id}/",
    params(
        ("id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeEnvelope),
        (status = 404, description = "Employee not found", body = crate::api::ErrorBody, example = json!({
            "error": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    records: web::Data<RecordService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let employee = records.get_employee(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(EmployeeEnvelope { employee }))
}

/// Update Employee
///
/// Only fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/employees/{id}/",
    params(
        ("id" = u64, Path, description = "Employee ID")
    ),
    request_body = EmployeeFields,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeEnvelope),
        (status = 400, description = "Invalid or duplicate email", body = crate::api::ErrorBody),
        (status = 404, description = "Employee or department not found", body = crate::api::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::api::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    records: web::Data<RecordService>,
    path: web::Path<u64>,
    payload: web::Json<EmployeeFields>,
) -> Result<HttpResponse, AppError> {
    let employee = records
        .update_employee(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(EmployeeEnvelope { employee }))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employees/{id}/",
    params(
        ("id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee and their attendance deleted", body = MessageResponse, example = json!({
            "message": "Employee deleted successfully"
        })),
        (status = 404, description = "Employee not found", body = crate::api::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    records: web::Data<RecordService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    records.delete_employee(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Employee deleted successfully")))
}
