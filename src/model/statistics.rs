use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Count of live attendance rows sharing one status value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusCount {
    #[schema(example = true)]
    pub status: bool,
    #[schema(example = 120)]
    pub count: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct StatusTotals {
    pub present: i64,
    pub absent: i64,
}

impl StatusTotals {
    /// Present first, then absent.
    pub fn into_counts(self) -> Vec<StatusCount> {
        vec![
            StatusCount {
                status: true,
                count: self.present,
            },
            StatusCount {
                status: false,
                count: self.absent,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct EntityCounts {
    pub employees: i64,
    pub departments: i64,
    pub attendance_records: i64,
}

/// Present/total attendance for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct AttendanceTally {
    pub employee_id: u64,
    pub present: i64,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "total_employees": 12,
    "total_departments": 3,
    "total_attendance_records": 240,
    "average_attendance_per_employee": 0.875
}))]
pub struct Summary {
    pub total_employees: i64,
    pub total_departments: i64,
    pub total_attendance_records: i64,
    /// Mean of each employee's own attendance rate; null when nothing is recorded
    #[schema(nullable = true)]
    pub average_attendance_per_employee: Option<f64>,
}
