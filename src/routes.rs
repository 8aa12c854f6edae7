use crate::{
    api::{attendance, department, employee, health, statistics},
    error::AppError,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::{Result, anyhow};
use tracing::warn;

pub type LimiterConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter config; build once and share across workers.
pub fn build_limiter(requests_per_min: u32) -> Result<LimiterConfig> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        (60_000 / u64::from(requests_per_min)).max(1)
    };
    GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit: {requests_per_min} requests per minute"))
}

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str, limiter: &LimiterConfig) {
    cfg.service(health::health);

    cfg.service(
        web::scope(api_prefix)
            .wrap(Governor::new(limiter))
            .configure(services),
    );
}

/// Resource routes plus extractor error handling, without middleware.
pub fn services(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "Rejected request body");
        AppError::validation("Invalid request body").into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "Rejected path parameter");
        AppError::validation("Invalid id in path").into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "Rejected query string");
        AppError::validation("Invalid query string").into()
    }));

    cfg.service(
        web::scope("/employees")
            // /employees
            .service(
                web::resource("")
                    .route(web::get().to(employee::list_employees))
                    .route(web::post().to(employee::create_employee)),
            )
            // /employees/{id}
            .service(
                web::resource("/{id}")
                    .route(web::get().to(employee::get_employee))
                    .route(web::put().to(employee::update_employee))
                    .route(web::delete().to(employee::delete_employee)),
            ),
    )
    .service(
        web::scope("/departments")
            .service(
                web::resource("")
                    .route(web::get().to(department::list_departments))
                    .route(web::post().to(department::create_department)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(department::get_department))
                    .route(web::put().to(department::update_department))
                    .route(web::delete().to(department::delete_department)),
            ),
    )
    .service(
        web::scope("/attendance")
            // /attendance/update/{id}
            .service(
                web::resource("/update/{id}").route(web::put().to(attendance::toggle_attendance)),
            )
            // /attendance/delete/{id}
            .service(
                web::resource("/delete/{id}")
                    .route(web::delete().to(attendance::delete_attendance)),
            )
            // /attendance/detail/{id}
            .service(
                web::resource("/detail/{id}").route(web::get().to(attendance::get_attendance)),
            )
            // /attendance/{employee_id}
            .service(
                web::resource("/{employee_id}")
                    .route(web::get().to(attendance::list_attendance))
                    .route(web::post().to(attendance::create_attendance)),
            ),
    )
    .service(
        web::scope("/statistics")
            .service(
                web::resource("").route(web::get().to(statistics::summary)),
            )
            .service(
                web::resource("/attendance")
                    .route(web::get().to(statistics::attendance_statistics)),
            ),
    );
}
