use crate::api::attendance::{AttendanceEnvelope, AttendancePageEnvelope};
use crate::api::department::{DepartmentEnvelope, DepartmentListEnvelope};
use crate::api::employee::{EmployeeEnvelope, EmployeeListEnvelope};
use crate::api::statistics::StatusCountEnvelope;
use crate::api::{ErrorBody, MessageResponse};
use crate::model::attendance::{Attendance, AttendanceEntry, AttendanceFields};
use crate::model::department::{Department, DepartmentFields};
use crate::model::employee::{Employee, EmployeeFields};
use crate::model::statistics::{StatusCount, Summary};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HR Records API",
        version = "0.1.0",
        description = r#"
## HR record keeping

CRUD over **employees**, **departments** and daily **attendance**, plus
aggregate statistics.

### Response format
- Success payloads are wrapped in a key named after the resource
  (`employee`, `employees`, `department`, `attendance`, ...).
- Errors are always `{"error": "<message>"}`:
  400 for validation failures and duplicate emails, 404 for missing records,
  500 for anything unexpected.

### Deletion rules
- Deleting a department keeps its employees, with no department.
- Deleting an employee deletes their attendance records.
"#,
    ),
    paths(
        crate::api::health::health,

        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::department::list_departments,
        crate::api::department::create_department,
        crate::api::department::get_department,
        crate::api::department::update_department,
        crate::api::department::delete_department,

        crate::api::attendance::list_attendance,
        crate::api::attendance::create_attendance,
        crate::api::attendance::get_attendance,
        crate::api::attendance::toggle_attendance,
        crate::api::attendance::delete_attendance,

        crate::api::statistics::attendance_statistics,
        crate::api::statistics::summary
    ),
    components(
        schemas(
            Employee,
            EmployeeFields,
            EmployeeEnvelope,
            EmployeeListEnvelope,
            Department,
            DepartmentFields,
            DepartmentEnvelope,
            DepartmentListEnvelope,
            Attendance,
            AttendanceEntry,
            AttendanceFields,
            AttendanceEnvelope,
            AttendancePageEnvelope,
            StatusCount,
            StatusCountEnvelope,
            Summary,
            MessageResponse,
            ErrorBody
        )
    ),
    tags(
        (name = "Employee", description = "Employee records"),
        (name = "Department", description = "Departments"),
        (name = "Attendance", description = "Daily attendance"),
        (name = "Statistics", description = "Aggregate statistics"),
        (name = "Health", description = "Liveness"),
    )
)]
pub struct ApiDoc;
