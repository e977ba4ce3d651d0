use api::dto::EmployeeInput;
use chrono::NaiveDate;
use entity::employee::Role;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh migrated in-memory database. A single pooled connection keeps the
/// SQLite database alive for the duration of the test.
pub async fn setup_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1).min_connections(1);
    let db = Database::connect(opts).await.expect("connect to sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn employee_input(
    first: &str,
    last: &str,
    role: Role,
    manager_id: Option<i32>,
) -> EmployeeInput {
    EmployeeInput {
        first_name: first.to_string(),
        last_name: last.to_string(),
        birthdate: date(1990, 4, 2),
        employment_date: date(2018, 9, 3),
        manager_id,
        home_address: "1 Example Street".to_string(),
        current_salary: 50_000.0,
        role,
    }
}
