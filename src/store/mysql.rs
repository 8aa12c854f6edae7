use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::debug;

use super::{HrStore, StoreResult};
use crate::model::attendance::{Attendance, AttendanceEntry, NewAttendance};
use crate::model::department::{Department, DepartmentChanges, NewDepartment};
use crate::model::employee::{Employee, EmployeeChanges, NewEmployee};
use crate::model::statistics::{AttendanceTally, EntityCounts, StatusTotals};
use crate::utils::db_utils::{Assignments, build_update_sql, execute_update};

const EMPLOYEE_SELECT: &str = r#"
    SELECT
        e.id,
        e.full_name,
        e.email,
        d.id AS department_id,
        d.name AS department,
        e.created_at,
        e.updated_at
    FROM employees e
    LEFT JOIN departments d
        ON d.id = e.department_id AND d.deleted_at IS NULL
    WHERE e.deleted_at IS NULL
"#;

const DEPARTMENT_SELECT: &str = r#"
    SELECT id, name, description, created_at, updated_at
    FROM departments
    WHERE deleted_at IS NULL
"#;

const ATTENDANCE_SELECT: &str = r#"
    SELECT
        a.id,
        a.employee_id,
        e.full_name AS employee,
        a.date,
        a.status,
        a.created_at,
        a.updated_at
    FROM attendance a
    JOIN employees e ON e.id = a.employee_id
    WHERE a.deleted_at IS NULL
"#;

#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HrStore for MySqlStore {
    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        let sql = format!("{EMPLOYEE_SELECT} ORDER BY e.id");
        let rows = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_employee(&self, id: u64) -> StoreResult<Option<Employee>> {
        let sql = format!("{EMPLOYEE_SELECT} AND e.id = ?");
        let row = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_employee(&self, employee: &NewEmployee) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees (full_name, email, department_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&employee.full_name)
        .bind(&employee.email)
        .bind(employee.department_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn update_employee(&self, id: u64, changes: &EmployeeChanges) -> StoreResult<()> {
        let mut assignments = Assignments::default();
        assignments.set_if_some("full_name", changes.full_name.clone());
        assignments.set_if_some("email", changes.email.clone());
        assignments.set_if_some("department_id", changes.department_id);

        if let Some(update) = build_update_sql("employees", assignments, "id", id) {
            debug!(sql = %update.sql, employee_id = id, "Updating employee");
            execute_update(&self.pool, update).await?;
        }
        Ok(())
    }

    async fn delete_employee(&self, id: u64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ? AND deleted_at IS NULL")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_departments(&self) -> StoreResult<Vec<Department>> {
        let sql = format!("{DEPARTMENT_SELECT} ORDER BY id");
        let rows = sqlx::query_as::<_, Department>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_department(&self, id: u64) -> StoreResult<Option<Department>> {
        let sql = format!("{DEPARTMENT_SELECT} AND id = ?");
        let row = sqlx::query_as::<_, Department>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_department(&self, department: &NewDepartment) -> StoreResult<u64> {
        let result = sqlx::query("INSERT INTO departments (name, description) VALUES (?, ?)")
            .bind(&department.name)
            .bind(&department.description)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_id())
    }

    async fn update_department(&self, id: u64, changes: &DepartmentChanges) -> StoreResult<()> {
        let mut assignments = Assignments::default();
        assignments.set_if_some("name", changes.name.clone());
        assignments.set_if_some("description", changes.description.clone());

        if let Some(update) = build_update_sql("departments", assignments, "id", id) {
            debug!(sql = %update.sql, department_id = id, "Updating department");
            execute_update(&self.pool, update).await?;
        }
        Ok(())
    }

    async fn delete_department(&self, id: u64) -> StoreResult<bool> {
        // employees.department_id is ON DELETE SET NULL
        let result = sqlx::query("DELETE FROM departments WHERE id = ? AND deleted_at IS NULL")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_attendance(&self, id: u64) -> StoreResult<Option<Attendance>> {
        let sql = format!("{ATTENDANCE_SELECT} AND a.id = ?");
        let row = sqlx::query_as::<_, Attendance>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_attendance(&self, attendance: &NewAttendance) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO attendance (employee_id, date, status)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(attendance.employee_id)
        .bind(attendance.date)
        .bind(attendance.status)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn toggle_attendance(&self, id: u64) -> StoreResult<bool> {
        let result = sqlx::query(
            "UPDATE attendance SET status = NOT status WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_attendance(&self, id: u64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM attendance WHERE id = ? AND deleted_at IS NULL")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn attendance_for_employee(
        &self,
        employee_id: u64,
        limit: u64,
        offset: u64,
    ) -> StoreResult<Vec<AttendanceEntry>> {
        debug!(employee_id, limit, offset, "Fetching attendance page");

        let rows = sqlx::query_as::<_, AttendanceEntry>(
            r#"
            SELECT id, date, status
            FROM attendance
            WHERE employee_id = ? AND deleted_at IS NULL
            ORDER BY date DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(employee_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn count_attendance_for_employee(&self, employee_id: u64) -> StoreResult<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM attendance WHERE employee_id = ? AND deleted_at IS NULL",
        )
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    async fn attendance_status_totals(&self) -> StoreResult<StatusTotals> {
        let totals = sqlx::query_as::<_, StatusTotals>(
            r#"
            SELECT
                CAST(COALESCE(SUM(status), 0) AS SIGNED) AS present,
                CAST(COALESCE(SUM(NOT status), 0) AS SIGNED) AS absent
            FROM attendance
            WHERE deleted_at IS NULL
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(totals)
    }

    async fn entity_counts(&self) -> StoreResult<EntityCounts> {
        let counts = sqlx::query_as::<_, EntityCounts>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM employees WHERE deleted_at IS NULL) AS employees,
                (SELECT COUNT(*) FROM departments WHERE deleted_at IS NULL) AS departments,
                (SELECT COUNT(*) FROM attendance WHERE deleted_at IS NULL) AS attendance_records
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(counts)
    }

    async fn attendance_tallies(&self) -> StoreResult<Vec<AttendanceTally>> {
        let tallies = sqlx::query_as::<_, AttendanceTally>(
            r#"
            SELECT
                employee_id,
                CAST(SUM(status) AS SIGNED) AS present,
                COUNT(*) AS total
            FROM attendance
            WHERE deleted_at IS NULL
            GROUP BY employee_id
            ORDER BY employee_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(tallies)
    }
}
