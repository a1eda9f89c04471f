//! Employee endpoints backing the mobile view and HR dashboard

use axum::{extract::Query, Json};
use payflow_common::api::PaginationMeta;
use serde::{Deserialize, Serialize};

use crate::pagination::{page_slice, paginate, DEFAULT_PER_PAGE};
use crate::roster::{self, Employee, EmployeeProfile};

/// Query parameters for the roster listing
#[derive(Debug, Deserialize)]
pub struct EmployeesQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u64,

    /// Page size
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

/// Current-employee response
#[derive(Debug, Serialize)]
pub struct EmployeeMeResponse {
    pub success: bool,
    pub employee: EmployeeProfile,
}

/// Paginated roster response
#[derive(Debug, Serialize)]
pub struct EmployeesResponse {
    pub success: bool,
    pub employees: Vec<Employee>,
    pub pagination: PaginationMeta,
}

/// GET /api/v1/employee/me
///
/// Payroll data for the signed-in demo employee.
pub async fn employee_me() -> Json<EmployeeMeResponse> {
    Json(EmployeeMeResponse {
        success: true,
        employee: roster::current_employee(),
    })
}

/// GET /api/v1/employees?page=N&per_page=M
///
/// Paginated roster for the HR dashboard. A page past the end returns an
/// empty list; the pagination block always reflects the full collection.
pub async fn list_employees(Query(query): Query<EmployeesQuery>) -> Json<EmployeesResponse> {
    let all = &*roster::EMPLOYEES;
    let pagination = paginate(all.len() as u64, query.page, query.per_page);
    let employees = page_slice(all, &pagination).to_vec();

    Json(EmployeesResponse {
        success: true,
        employees,
        pagination,
    })
}
