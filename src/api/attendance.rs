use crate::{
    api::MessageResponse,
    error::AppError,
    model::attendance::{Attendance, AttendanceEntry, AttendanceFields},
    service::records::RecordService,
    utils::validation::PageRequest,
};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number, starting at 1 (default 1)
    pub page: Option<String>,
    /// Records per page (default 10)
    pub page_size: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AttendanceEnvelope {
    pub attendance: Attendance,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AttendancePageEnvelope {
    pub attendance_records: Vec<AttendanceEntry>,
    #[schema(example = 42)]
    pub total_count: i64,
}

/// Paginated attendance for one employee, most recent first
#[utoipa::path(
    get,
    path = "/attendance/{employee_id}/",
    params(
        ("employee_id" = u64, Path, description = "Employee ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "One page of attendance records", body = AttendancePageEnvelope),
        (status = 400, description = "page or page_size is not a positive integer", body = crate::api::ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    records: web::Data<RecordService>,
    path: web::Path<u64>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = PageRequest::parse(query.page.as_deref(), query.page_size.as_deref())?;
    let result = records
        .list_attendance_for_employee(path.into_inner(), page)
        .await?;

    Ok(HttpResponse::Ok().json(AttendancePageEnvelope {
        attendance_records: result.records,
        total_count: result.total_count,
    }))
}

#[utoipa::path(
    post,
    path = "/attendance/{employee_id}/",
    params(
        ("employee_id" = u64, Path, description = "Employee ID")
    ),
    request_body = AttendanceFields,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceEnvelope),
        (status = 400, description = "Missing date/status or malformed date", body = crate::api::ErrorBody),
        (status = 404, description = "Employee not found", body = crate::api::ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn create_attendance(
    records: web::Data<RecordService>,
    path: web::Path<u64>,
    payload: web::Json<AttendanceFields>,
) -> Result<HttpResponse, AppError> {
    let attendance = records
        .create_attendance(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(AttendanceEnvelope { attendance }))
}

#[utoipa::path(
    get,
    path = "/attendance/detail/{id}/",
    params(
        ("id" = u64, Path, description = "Attendance record ID")
    ),
    responses(
        (status = 200, description = "Attendance record", body = AttendanceEnvelope),
        (status = 404, description = "Attendance record not found", body = crate::api::ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    records: web::Data<RecordService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let attendance = records.get_attendance(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(AttendanceEnvelope { attendance }))
}

/// Flip present/absent
#[utoipa::path(
    put,
    path = "/attendance/update/{id}/",
    params(
        ("id" = u64, Path, description = "Attendance record ID")
    ),
    responses(
        (status = 200, description = "Status toggled", body = AttendanceEnvelope),
        (status = 404, description = "Attendance record not found", body = crate::api::ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn toggle_attendance(
    records: web::Data<RecordService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let attendance = records.toggle_attendance_status(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(AttendanceEnvelope { attendance }))
}

#[utoipa::path(
    delete,
    path = "/attendance/delete/{id}/",
    params(
        ("id" = u64, Path, description = "Attendance record ID")
    ),
    responses(
        (status = 200, description = "Attendance record deleted", body = MessageResponse),
        (status = 404, description = "Attendance record not found", body = crate::api::ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    records: web::Data<RecordService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    records.delete_attendance(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(
        "Attendance record deleted successfully",
    )))
}
