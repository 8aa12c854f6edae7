//! In-memory `HrStore` mirroring the constraints declared in `sql/schema.sql`.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use super::{HrStore, StoreError, StoreResult};
use crate::model::attendance::{Attendance, AttendanceEntry, NewAttendance};
use crate::model::department::{Department, DepartmentChanges, NewDepartment};
use crate::model::employee::{Employee, EmployeeChanges, NewEmployee};
use crate::model::statistics::{AttendanceTally, EntityCounts, StatusTotals};

struct EmployeeRow {
    full_name: String,
    email: String,
    department_id: Option<u64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

struct DepartmentRow {
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

struct AttendanceRow {
    employee_id: u64,
    date: NaiveDate,
    status: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct Tables {
    next_id: u64,
    employees: BTreeMap<u64, EmployeeRow>,
    departments: BTreeMap<u64, DepartmentRow>,
    attendance: BTreeMap<u64, AttendanceRow>,
}

impl Tables {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn email_taken(&self, email: &str, except: Option<u64>) -> bool {
        self.employees
            .iter()
            .any(|(id, row)| Some(*id) != except && row.email == email)
    }

    fn employee_view(&self, id: u64, row: &EmployeeRow) -> Employee {
        let live = row
            .department_id
            .and_then(|d| self.departments.get(&d).map(|dept| (d, dept)))
            .filter(|(_, dept)| dept.deleted_at.is_none());
        let department_id = live.map(|(d, _)| d);
        let department = live.map(|(_, dept)| dept.name.clone());

        Employee {
            id,
            full_name: row.full_name.clone(),
            email: row.email.clone(),
            department_id,
            department,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn department_view(id: u64, row: &DepartmentRow) -> Department {
    Department {
        id,
        name: row.name.clone(),
        description: row.description.clone(),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    /// Sets `deleted_at` on an attendance row without removing it.
    pub fn soft_delete_attendance(&self, id: u64) {
        if let Some(row) = self.tables().attendance.get_mut(&id) {
            row.deleted_at = Some(Utc::now());
        }
    }

    pub fn soft_delete_department(&self, id: u64) {
        if let Some(row) = self.tables().departments.get_mut(&id) {
            row.deleted_at = Some(Utc::now());
        }
    }

    pub fn soft_delete_employee(&self, id: u64) {
        if let Some(row) = self.tables().employees.get_mut(&id) {
            row.deleted_at = Some(Utc::now());
        }
    }
}

#[async_trait]
impl HrStore for MemoryStore {
    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        let t = self.tables();
        Ok(t.employees
            .iter()
            .filter(|(_, row)| row.deleted_at.is_none())
            .map(|(id, row)| t.employee_view(*id, row))
            .collect())
    }

    async fn find_employee(&self, id: u64) -> StoreResult<Option<Employee>> {
        let t = self.tables();
        Ok(t.employees
            .get(&id)
            .filter(|row| row.deleted_at.is_none())
            .map(|row| t.employee_view(id, row)))
    }

    async fn insert_employee(&self, employee: &NewEmployee) -> StoreResult<u64> {
        let mut t = self.tables();
        if t.email_taken(&employee.email, None) {
            return Err(StoreError::UniqueViolation);
        }
        if let Some(department_id) = employee.department_id {
            if !t.departments.contains_key(&department_id) {
                return Err(StoreError::ForeignKeyViolation);
            }
        }

        let id = t.next_id();
        let now = Utc::now();
        t.employees.insert(
            id,
            EmployeeRow {
                full_name: employee.full_name.clone(),
                email: employee.email.clone(),
                department_id: employee.department_id,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            },
        );
        Ok(id)
    }

    async fn update_employee(&self, id: u64, changes: &EmployeeChanges) -> StoreResult<()> {
        let mut t = self.tables();
        if let Some(email) = &changes.email {
            if t.email_taken(email, Some(id)) {
                return Err(StoreError::UniqueViolation);
            }
        }
        if let Some(department_id) = changes.department_id {
            if !t.departments.contains_key(&department_id) {
                return Err(StoreError::ForeignKeyViolation);
            }
        }

        if let Some(row) = t.employees.get_mut(&id).filter(|r| r.deleted_at.is_none()) {
            if let Some(full_name) = &changes.full_name {
                row.full_name = full_name.clone();
            }
            if let Some(email) = &changes.email {
                row.email = email.clone();
            }
            if changes.department_id.is_some() {
                row.department_id = changes.department_id;
            }
            row.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete_employee(&self, id: u64) -> StoreResult<bool> {
        let mut t = self.tables();
        let live = t.employees.get(&id).is_some_and(|r| r.deleted_at.is_none());
        if !live {
            return Ok(false);
        }
        t.employees.remove(&id);
        // ON DELETE CASCADE
        t.attendance.retain(|_, row| row.employee_id != id);
        Ok(true)
    }

    async fn list_departments(&self) -> StoreResult<Vec<Department>> {
        Ok(self
            .tables()
            .departments
            .iter()
            .filter(|(_, row)| row.deleted_at.is_none())
            .map(|(id, row)| department_view(*id, row))
            .collect())
    }

    async fn find_department(&self, id: u64) -> StoreResult<Option<Department>> {
        Ok(self
            .tables()
            .departments
            .get(&id)
            .filter(|row| row.deleted_at.is_none())
            .map(|row| department_view(id, row)))
    }

    async fn insert_department(&self, department: &NewDepartment) -> StoreResult<u64> {
        let mut t = self.tables();
        let id = t.next_id();
        let now = Utc::now();
        t.departments.insert(
            id,
            DepartmentRow {
                name: department.name.clone(),
                description: department.description.clone(),
                created_at: now,
                updated_at: now,
                deleted_at: None,
            },
        );
        Ok(id)
    }

    async fn update_department(&self, id: u64, changes: &DepartmentChanges) -> StoreResult<()> {
        let mut t = self.tables();
        if let Some(row) = t.departments.get_mut(&id).filter(|r| r.deleted_at.is_none()) {
            if let Some(name) = &changes.name {
                row.name = name.clone();
            }
            if changes.description.is_some() {
                row.description = changes.description.clone();
            }
            row.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete_department(&self, id: u64) -> StoreResult<bool> {
        let mut t = self.tables();
        let live = t.departments.get(&id).is_some_and(|r| r.deleted_at.is_none());
        if !live {
            return Ok(false);
        }
        t.departments.remove(&id);
        // ON DELETE SET NULL
        for row in t.employees.values_mut() {
            if row.department_id == Some(id) {
                row.department_id = None;
            }
        }
        Ok(true)
    }

    async fn find_attendance(&self, id: u64) -> StoreResult<Option<Attendance>> {
        let t = self.tables();
        let Some(row) = t.attendance.get(&id).filter(|r| r.deleted_at.is_none()) else {
            return Ok(None);
        };
        Ok(t.employees.get(&row.employee_id).map(|employee| Attendance {
            id,
            employee_id: row.employee_id,
            employee: employee.full_name.clone(),
            date: row.date,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }))
    }

    async fn insert_attendance(&self, attendance: &NewAttendance) -> StoreResult<u64> {
        let mut t = self.tables();
        if !t.employees.contains_key(&attendance.employee_id) {
            return Err(StoreError::ForeignKeyViolation);
        }

        let id = t.next_id();
        let now = Utc::now();
        t.attendance.insert(
            id,
            AttendanceRow {
                employee_id: attendance.employee_id,
                date: attendance.date,
                status: attendance.status,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            },
        );
        Ok(id)
    }

    async fn toggle_attendance(&self, id: u64) -> StoreResult<bool> {
        let mut t = self.tables();
        match t.attendance.get_mut(&id).filter(|r| r.deleted_at.is_none()) {
            Some(row) => {
                row.status = !row.status;
                row.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_attendance(&self, id: u64) -> StoreResult<bool> {
        let mut t = self.tables();
        let live = t.attendance.get(&id).is_some_and(|r| r.deleted_at.is_none());
        if live {
            t.attendance.remove(&id);
        }
        Ok(live)
    }

    async fn attendance_for_employee(
        &self,
        employee_id: u64,
        limit: u64,
        offset: u64,
    ) -> StoreResult<Vec<AttendanceEntry>> {
        let t = self.tables();
        let mut entries: Vec<AttendanceEntry> = t
            .attendance
            .iter()
            .filter(|(_, r)| r.employee_id == employee_id && r.deleted_at.is_none())
            .map(|(id, r)| AttendanceEntry {
                id: *id,
                date: r.date,
                status: r.status,
            })
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(entries.into_iter().skip(offset).take(limit).collect())
    }

    async fn count_attendance_for_employee(&self, employee_id: u64) -> StoreResult<i64> {
        let count = self
            .tables()
            .attendance
            .values()
            .filter(|r| r.employee_id == employee_id && r.deleted_at.is_none())
            .count();
        Ok(count as i64)
    }

    async fn attendance_status_totals(&self) -> StoreResult<StatusTotals> {
        let t = self.tables();
        let mut totals = StatusTotals::default();
        for row in t.attendance.values().filter(|r| r.deleted_at.is_none()) {
            if row.status {
                totals.present += 1;
            } else {
                totals.absent += 1;
            }
        }
        Ok(totals)
    }

    async fn entity_counts(&self) -> StoreResult<EntityCounts> {
        let t = self.tables();
        Ok(EntityCounts {
            employees: t.employees.values().filter(|r| r.deleted_at.is_none()).count() as i64,
            departments: t.departments.values().filter(|r| r.deleted_at.is_none()).count() as i64,
            attendance_records: t.attendance.values().filter(|r| r.deleted_at.is_none()).count()
                as i64,
        })
    }

    async fn attendance_tallies(&self) -> StoreResult<Vec<AttendanceTally>> {
        let t = self.tables();
        let mut by_employee: BTreeMap<u64, AttendanceTally> = BTreeMap::new();
        for row in t.attendance.values().filter(|r| r.deleted_at.is_none()) {
            let tally = by_employee.entry(row.employee_id).or_insert(AttendanceTally {
                employee_id: row.employee_id,
                present: 0,
                total: 0,
            });
            tally.total += 1;
            if row.status {
                tally.present += 1;
            }
        }
        Ok(by_employee.into_values().collect())
    }
}
