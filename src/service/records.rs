use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::error::{AppError, Resource};
use crate::model::attendance::{Attendance, AttendanceFields, AttendancePage, NewAttendance};
use crate::model::department::{Department, DepartmentChanges, DepartmentFields, NewDepartment};
use crate::model::employee::{Employee, EmployeeChanges, EmployeeFields, NewEmployee};
use crate::store::{HrStore, StoreError};
use crate::utils::validation::{PageRequest, non_blank, parse_date, validate_email};

pub const DUPLICATE_EMAIL: &str = "Employee with this email already exists";

/// CRUD over employees, departments and attendance.
#[derive(Clone)]
pub struct RecordService {
    store: Arc<dyn HrStore>,
}

/// The uniqueness constraint is the only authority on duplicate emails.
fn employee_write_error(err: StoreError) -> AppError {
    match err {
        StoreError::UniqueViolation => AppError::Conflict(DUPLICATE_EMAIL.to_string()),
        StoreError::ForeignKeyViolation => AppError::NotFound(Resource::Department),
        other => other.into(),
    }
}

impl RecordService {
    pub fn new(store: Arc<dyn HrStore>) -> Self {
        Self { store }
    }

    // ---------- employees ----------

    pub async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.store.list_employees().await?)
    }

    pub async fn get_employee(&self, id: u64) -> Result<Employee, AppError> {
        self.store
            .find_employee(id)
            .await?
            .ok_or(AppError::NotFound(Resource::Employee))
    }

    #[instrument(skip(self, fields))]
    pub async fn create_employee(&self, fields: EmployeeFields) -> Result<Employee, AppError> {
        let (Some(full_name), Some(email)) = (non_blank(fields.full_name), non_blank(fields.email))
        else {
            return Err(AppError::validation("Full name and email are required"));
        };
        validate_email(&email)?;

        if let Some(department_id) = fields.department_id {
            self.get_department(department_id).await?;
        }

        let new = NewEmployee {
            full_name,
            email,
            department_id: fields.department_id,
        };
        let id = self
            .store
            .insert_employee(&new)
            .await
            .map_err(employee_write_error)?;

        info!(employee_id = id, "Employee created");
        self.get_employee(id).await
    }

    /// All-or-nothing: every supplied field is validated before the single write.
    #[instrument(skip(self, fields))]
    pub async fn update_employee(
        &self,
        id: u64,
        fields: EmployeeFields,
    ) -> Result<Employee, AppError> {
        self.get_employee(id).await?;

        let changes = EmployeeChanges {
            full_name: non_blank(fields.full_name),
            email: non_blank(fields.email),
            department_id: fields.department_id,
        };
        if let Some(email) = &changes.email {
            validate_email(email)?;
        }
        if let Some(department_id) = changes.department_id {
            self.get_department(department_id).await?;
        }

        if !changes.is_empty() {
            self.store
                .update_employee(id, &changes)
                .await
                .map_err(employee_write_error)?;
        }

        self.get_employee(id).await
    }

    /// Attendance rows go with the employee.
    #[instrument(skip(self))]
    pub async fn delete_employee(&self, id: u64) -> Result<(), AppError> {
        if !self.store.delete_employee(id).await? {
            return Err(AppError::NotFound(Resource::Employee));
        }
        info!(employee_id = id, "Employee deleted");
        Ok(())
    }

    // ---------- departments ----------

    pub async fn list_departments(&self) -> Result<Vec<Department>, AppError> {
        Ok(self.store.list_departments().await?)
    }

    pub async fn get_department(&self, id: u64) -> Result<Department, AppError> {
        self.store
            .find_department(id)
            .await?
            .ok_or(AppError::NotFound(Resource::Department))
    }

    #[instrument(skip(self, fields))]
    pub async fn create_department(&self, fields: DepartmentFields) -> Result<Department, AppError> {
        let Some(name) = non_blank(fields.name) else {
            return Err(AppError::validation("Department name is required"));
        };

        let new = NewDepartment {
            name,
            description: fields.description,
        };
        let id = self.store.insert_department(&new).await?;

        info!(department_id = id, "Department created");
        self.get_department(id).await
    }

    #[instrument(skip(self, fields))]
    pub async fn update_department(
        &self,
        id: u64,
        fields: DepartmentFields,
    ) -> Result<Department, AppError> {
        self.get_department(id).await?;

        let changes = DepartmentChanges {
            name: non_blank(fields.name),
            description: fields.description,
        };
        if !changes.is_empty() {
            self.store.update_department(id, &changes).await?;
        }

        self.get_department(id).await
    }

    /// Referencing employees keep existing with no department.
    #[instrument(skip(self))]
    pub async fn delete_department(&self, id: u64) -> Result<(), AppError> {
        if !self.store.delete_department(id).await? {
            return Err(AppError::NotFound(Resource::Department));
        }
        info!(department_id = id, "Department deleted");
        Ok(())
    }

    // ---------- attendance ----------

    pub async fn get_attendance(&self, id: u64) -> Result<Attendance, AppError> {
        self.store
            .find_attendance(id)
            .await?
            .ok_or(AppError::NotFound(Resource::Attendance))
    }

    pub async fn list_attendance_for_employee(
        &self,
        employee_id: u64,
        page: PageRequest,
    ) -> Result<AttendancePage, AppError> {
        let records = self
            .store
            .attendance_for_employee(employee_id, page.limit(), page.offset())
            .await?;
        let total_count = self.store.count_attendance_for_employee(employee_id).await?;

        Ok(AttendancePage {
            records,
            total_count,
        })
    }

    #[instrument(skip(self, fields))]
    pub async fn create_attendance(
        &self,
        employee_id: u64,
        fields: AttendanceFields,
    ) -> Result<Attendance, AppError> {
        let (Some(raw_date), Some(status)) = (non_blank(fields.date), fields.status) else {
            return Err(AppError::validation("employee_id, date and status are required"));
        };
        let date = parse_date(&raw_date)?;

        self.get_employee(employee_id).await?;

        let new = NewAttendance {
            employee_id,
            date,
            status,
        };
        let id = self
            .store
            .insert_attendance(&new)
            .await
            .map_err(|err| match err {
                // employee removed between the lookup and the insert
                StoreError::ForeignKeyViolation => AppError::NotFound(Resource::Employee),
                other => other.into(),
            })?;

        info!(attendance_id = id, employee_id, "Attendance recorded");
        self.get_attendance(id).await
    }

    #[instrument(skip(self))]
    pub async fn toggle_attendance_status(&self, id: u64) -> Result<Attendance, AppError> {
        if !self.store.toggle_attendance(id).await? {
            warn!(attendance_id = id, "Toggle on missing attendance record");
            return Err(AppError::NotFound(Resource::Attendance));
        }
        self.get_attendance(id).await
    }

    #[instrument(skip(self))]
    pub async fn delete_attendance(&self, id: u64) -> Result<(), AppError> {
        if !self.store.delete_attendance(id).await? {
            return Err(AppError::NotFound(Resource::Attendance));
        }
        Ok(())
    }
}
