//! Persistence port for the HR records.
//!
//! Every method is a single statement (or a trivially joined select) against
//! the relational store. Reads skip rows whose `deleted_at` is set; deletes are
//! physical and rely on the schema's `ON DELETE` rules.

use async_trait::async_trait;
use derive_more::Display;
use sqlx::error::ErrorKind;

use crate::model::attendance::{Attendance, AttendanceEntry, NewAttendance};
use crate::model::department::{Department, DepartmentChanges, NewDepartment};
use crate::model::employee::{Employee, EmployeeChanges, NewEmployee};
use crate::model::statistics::{AttendanceTally, EntityCounts, StatusTotals};

#[cfg(test)]
pub mod memory;
pub mod mysql;

#[derive(Debug, Display, Clone, PartialEq)]
pub enum StoreError {
    #[display(fmt = "unique constraint violated")]
    UniqueViolation,
    #[display(fmt = "foreign key constraint violated")]
    ForeignKeyViolation,
    #[display(fmt = "database error: {}", _0)]
    Database(String),
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation => return StoreError::UniqueViolation,
                ErrorKind::ForeignKeyViolation => return StoreError::ForeignKeyViolation,
                _ => {}
            }
        }
        StoreError::Database(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait HrStore: Send + Sync {
    // Employees
    async fn list_employees(&self) -> StoreResult<Vec<Employee>>;
    async fn find_employee(&self, id: u64) -> StoreResult<Option<Employee>>;
    /// Returns the new id.
    async fn insert_employee(&self, employee: &NewEmployee) -> StoreResult<u64>;
    async fn update_employee(&self, id: u64, changes: &EmployeeChanges) -> StoreResult<()>;
    /// Returns false when no row was removed.
    async fn delete_employee(&self, id: u64) -> StoreResult<bool>;

    // Departments
    async fn list_departments(&self) -> StoreResult<Vec<Department>>;
    async fn find_department(&self, id: u64) -> StoreResult<Option<Department>>;
    async fn insert_department(&self, department: &NewDepartment) -> StoreResult<u64>;
    async fn update_department(&self, id: u64, changes: &DepartmentChanges) -> StoreResult<()>;
    async fn delete_department(&self, id: u64) -> StoreResult<bool>;

    // Attendance
    async fn find_attendance(&self, id: u64) -> StoreResult<Option<Attendance>>;
    async fn insert_attendance(&self, attendance: &NewAttendance) -> StoreResult<u64>;
    /// Flips `status` in place. Returns false when no row matched.
    async fn toggle_attendance(&self, id: u64) -> StoreResult<bool>;
    async fn delete_attendance(&self, id: u64) -> StoreResult<bool>;
    /// Most recent first.
    async fn attendance_for_employee(
        &self,
        employee_id: u64,
        limit: u64,
        offset: u64,
    ) -> StoreResult<Vec<AttendanceEntry>>;
    async fn count_attendance_for_employee(&self, employee_id: u64) -> StoreResult<i64>;

    // Aggregates
    async fn attendance_status_totals(&self) -> StoreResult<StatusTotals>;
    async fn entity_counts(&self) -> StoreResult<EntityCounts>;
    /// One entry per employee with at least one live attendance row.
    async fn attendance_tallies(&self) -> StoreResult<Vec<AttendanceTally>>;
}
