use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single day's attendance, with the owning employee's name attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Attendance {
    #[schema(example = 42)]
    pub id: u64,

    #[schema(example = 1)]
    pub employee_id: u64,

    /// Full name of the employee the record belongs to
    #[schema(example = "John Doe")]
    pub employee: String,

    #[schema(example = "2026-01-05", value_type = String, format = "date")]
    pub date: NaiveDate,

    /// true = present, false = absent
    #[schema(example = true)]
    pub status: bool,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,

    #[schema(value_type = String, format = "date-time")]
    pub updated_at: DateTime<Utc>,
}

/// Row shape used by the per-employee paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceEntry {
    #[schema(example = 42)]
    pub id: u64,

    #[schema(example = "2026-01-05", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = true)]
    pub status: bool,
}

#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub employee_id: u64,
    pub date: NaiveDate,
    pub status: bool,
}

/// One page of an employee's attendance plus the unpaged total.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendancePage {
    pub records: Vec<AttendanceEntry>,
    pub total_count: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct AttendanceFields {
    #[schema(example = "2026-01-05", format = "date")]
    pub date: Option<String>,
    #[schema(example = true)]
    pub status: Option<bool>,
}
