use crate::{
    api::MessageResponse,
    error::AppError,
    model::department::{Department, DepartmentFields},
    service::records::RecordService,
};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DepartmentEnvelope {
    pub department: Department,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DepartmentListEnvelope {
    pub departments: Vec<Department>,
}

#[utoipa::path(
    get,
    path = "/departments/",
    responses(
        (status = 200, description = "All departments", body = DepartmentListEnvelope),
        (status = 500, description = "Internal server error", body = crate::api::ErrorBody)
    ),
    tag = "Department"
)]
pub async fn list_departments(
    records: web::Data<RecordService>,
) -> Result<HttpResponse, AppError> {
    let departments = records.list_departments().await?;
    Ok(HttpResponse::Ok().json(DepartmentListEnvelope { departments }))
}

#[utoipa::path(
    post,
    path = "/departments/",
    request_body = DepartmentFields,
    responses(
        (status = 201, description = "Department created", body = DepartmentEnvelope),
        (status = 400, description = "Department name is required", body = crate::api::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::api::ErrorBody)
    ),
    tag = "Department"
)]
pub async fn create_department(
    records: web::Data<RecordService>,
    payload: web::Json<DepartmentFields>,
) -> Result<HttpResponse, AppError> {
    let department = records.create_department(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(DepartmentEnvelope { department }))
}

#[utoipa::path(
    get,
    path = "/departments/{id}/",
    params(
        ("id" = u64, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department found", body = DepartmentEnvelope),
        (status = 404, description = "Department not found", body = crate::api::ErrorBody)
    ),
    tag = "Department"
)]
pub async fn get_department(
    records: web::Data<RecordService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let department = records.get_department(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DepartmentEnvelope { department }))
}

#[utoipa::path(
    put,
    path = "/departments/{id}/",
    params(
        ("id" = u64, Path, description = "Department ID")
    ),
    request_body = DepartmentFields,
    responses(
        (status = 200, description = "Department updated", body = DepartmentEnvelope),
        (status = 404, description = "Department not found", body = crate::api::ErrorBody)
    ),
    tag = "Department"
)]
pub async fn update_department(
    records: web::Data<RecordService>,
    path: web::Path<u64>,
    payload: web::Json<DepartmentFields>,
) -> Result<HttpResponse, AppError> {
    let department = records
        .update_department(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(DepartmentEnvelope { department }))
}

/// Delete a department; its employees are kept with no department.
#[utoipa::path(
    delete,
    path = "/departments/{id}/",
    params(
        ("id" = u64, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department deleted", body = MessageResponse),
        (status = 404, description = "Department not found", body = crate::api::ErrorBody)
    ),
    tag = "Department"
)]
pub async fn delete_department(
    records: web::Data<RecordService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    records.delete_department(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Department deleted successfully")))
}
