//! Business invariants for employee records.
//!
//! The engine is an explicit ordered list of rule functions. Every rule runs
//! against the candidate and the results are concatenated, so a caller gets
//! all problems in one report instead of the first one found. An empty
//! report means the candidate is valid.

use chrono::{Datelike, NaiveDate};
use entity::employee::Role;
use serde::Serialize;
use std::fmt;

use crate::dto::EmployeeInput;

const MAX_NAME_LEN: usize = 50;
const MIN_AGE_YEARS: i32 = 18;
const MAX_AGE_YEARS: i32 = 70;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// One reported invariant failure: the offending field (wire name), a
/// human-readable message and a severity.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
    pub severity: Severity,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} Severity: {:?}",
            self.field, self.message, self.severity
        )
    }
}

/// The full, possibly empty, set of violations for one candidate.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport(pub Vec<Violation>);

impl ValidationReport {
    pub fn single(violation: Violation) -> Self {
        Self(vec![violation])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(|v| v.to_string()).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

type Rule = fn(&EmployeeInput, NaiveDate) -> Vec<Violation>;

const RULES: &[Rule] = &[
    hierarchy_rule,
    first_name_rule,
    last_name_rule,
    birthdate_rule,
    employment_date_rule,
    home_address_rule,
    salary_rule,
];

/// Evaluates every rule against the candidate. `ceo_taken` is the resolved
/// answer to "does another record already hold the CEO role"; the caller
/// queries the store for it (excluding the record under update, if any) so
/// the rules themselves stay pure.
pub fn validate_employee(
    input: &EmployeeInput,
    today: NaiveDate,
    ceo_taken: bool,
) -> ValidationReport {
    let mut violations: Vec<Violation> =
        RULES.iter().flat_map(|rule| rule(input, today)).collect();
    if input.role == Role::Ceo && ceo_taken {
        violations.push(Violation::new("role", "There can only be one CEO."));
    }
    ValidationReport(violations)
}

/// Shared salary sub-rule, also used on its own by the salary-only update.
pub fn validate_salary(field: &'static str, amount: f64) -> ValidationReport {
    match salary_violation(field, amount) {
        Some(violation) => ValidationReport::single(violation),
        None => ValidationReport::default(),
    }
}

/// First day of the window the employment date may fall in.
pub fn employment_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date")
}

fn hierarchy_rule(input: &EmployeeInput, _today: NaiveDate) -> Vec<Violation> {
    match (input.role, input.manager_id) {
        (Role::Ceo, Some(_)) => vec![Violation::new("managerId", "CEO must not have a boss.")],
        (Role::Ceo, None) => vec![],
        (_, None) => vec![Violation::new(
            "managerId",
            "Non-CEO employees must have a boss.",
        )],
        _ => vec![],
    }
}

fn first_name_rule(input: &EmployeeInput, _today: NaiveDate) -> Vec<Violation> {
    let mut violations = name_violations("firstName", "First name", &input.first_name);
    if input.first_name == input.last_name {
        violations.push(Violation::new(
            "firstName",
            "First name and last name cannot be the same.",
        ));
    }
    violations
}

fn last_name_rule(input: &EmployeeInput, _today: NaiveDate) -> Vec<Violation> {
    name_violations("lastName", "Last name", &input.last_name)
}

fn name_violations(field: &'static str, label: &str, value: &str) -> Vec<Violation> {
    let mut violations = Vec::new();
    if value.trim().is_empty() {
        violations.push(Violation::new(field, format!("{} is required.", label)));
    }
    if value.chars().count() > MAX_NAME_LEN {
        violations.push(Violation::new(
            field,
            format!("{} must be at most {} characters.", label, MAX_NAME_LEN),
        ));
    }
    violations
}

fn birthdate_rule(input: &EmployeeInput, today: NaiveDate) -> Vec<Violation> {
    let mut violations = Vec::new();
    let oldest = years_before(today, MAX_AGE_YEARS);
    let youngest = years_before(today, MIN_AGE_YEARS);
    if input.birthdate < oldest || input.birthdate > youngest {
        violations.push(Violation::new(
            "birthdate",
            format!(
                "Employee must be between {} and {} years old.",
                MIN_AGE_YEARS, MAX_AGE_YEARS
            ),
        ));
    }
    if input.birthdate > today {
        violations.push(Violation::new(
            "birthdate",
            "Birthdate cannot be in the future.",
        ));
    }
    violations
}

fn employment_date_rule(input: &EmployeeInput, today: NaiveDate) -> Vec<Violation> {
    if input.employment_date < employment_epoch() || input.employment_date > today {
        return vec![Violation::new(
            "employmentDate",
            "Employment date must be between 2000-01-01 and today.",
        )];
    }
    vec![]
}

fn home_address_rule(input: &EmployeeInput, _today: NaiveDate) -> Vec<Violation> {
    if input.home_address.trim().is_empty() {
        return vec![Violation::new("homeAddress", "Home address is required.")];
    }
    vec![]
}

fn salary_rule(input: &EmployeeInput, _today: NaiveDate) -> Vec<Violation> {
    salary_violation("currentSalary", input.current_salary)
        .into_iter()
        .collect()
}

fn salary_violation(field: &'static str, amount: f64) -> Option<Violation> {
    if amount < 0.0 {
        return Some(Violation::new(field, "Salary must be non-negative."));
    }
    None
}

/// The same calendar day `years` years earlier; Feb 29 clamps to Feb 28 on
/// non-leap years.
fn years_before(date: NaiveDate, years: i32) -> NaiveDate {
    date.with_year(date.year() - years).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(date.year() - years, 2, 28).expect("valid date")
    })
}
