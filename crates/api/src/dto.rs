use chrono::NaiveDate;
use entity::employee::Role;
use serde::{Deserialize, Serialize};

/// Write model for create and full-update. Carries every mutable field and
/// no id; the store assigns ids on insert.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub birthdate: NaiveDate,
    pub employment_date: NaiveDate,
    #[serde(default)]
    pub manager_id: Option<i32>,
    pub home_address: String,
    pub current_salary: f64,
    pub role: Role,
}

/// Narrow write model for the salary-only update path.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryUpdate {
    pub new_salary: f64,
}

/// Optional filters for employee search; all combine conjunctively, and a
/// request with no filters returns every record.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleStats {
    pub count: i64,
    pub average_salary: f64,
}
