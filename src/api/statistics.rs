use crate::{
    error::AppError,
    model::statistics::StatusCount,
    service::statistics::StatisticsService,
};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusCountEnvelope {
    pub statistics: Vec<StatusCount>,
}

/// Present/absent totals over live attendance records
#[utoipa::path(
    get,
    path = "/statistics/attendance/",
    responses(
        (status = 200, description = "Count per status value", body = StatusCountEnvelope, example = json!({
            "statistics": [
                { "status": true, "count": 120 },
                { "status": false, "count": 14 }
            ]
        })),
        (status = 500, description = "Internal server error", body = crate::api::ErrorBody)
    ),
    tag = "Statistics"
)]
pub async fn attendance_statistics(
    stats: web::Data<StatisticsService>,
) -> Result<HttpResponse, AppError> {
    let statistics = stats.attendance_status_counts().await?;
    Ok(HttpResponse::Ok().json(StatusCountEnvelope { statistics }))
}

#[utoipa::path(
    get,
    path = "/statistics/",
    responses(
        (status = 200, description = "Entity totals and mean attendance rate", body = crate::model::statistics::Summary),
        (status = 500, description = "Internal server error", body = crate::api::ErrorBody)
    ),
    tag = "Statistics"
)]
pub async fn summary(stats: web::Data<StatisticsService>) -> Result<HttpResponse, AppError> {
    let summary = stats.summary().await?;
    Ok(HttpResponse::Ok().json(summary))
}
