//! Query/aggregation service: the single entry point consuming the
//! validation engine and the store. Stateless between calls; every
//! mutation validates first and persists only on an empty report.

use chrono::{NaiveDate, Utc};
use entity::employee::{self, Role};
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, FromQueryResult, IntoActiveModel, ModelTrait,
    PaginatorTrait, QueryFilter, QuerySelect, SqlErr, TransactionTrait,
};
use tracing::{info, info_span};

use crate::dto::{EmployeeInput, RoleStats, SalaryUpdate, SearchQuery};
use crate::error::Error;
use crate::{mapper, validate};

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> Result<employee::Model, Error> {
    employee::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound)
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<employee::Model>, Error> {
    Ok(employee::Entity::find().all(db).await?)
}

/// Records whose first or last name contains the (case-sensitive) name
/// fragment and whose birthdate falls within the supplied bounds. Filters
/// combine conjunctively; none supplied means every record.
pub async fn search(
    db: &DatabaseConnection,
    query: &SearchQuery,
) -> Result<Vec<employee::Model>, Error> {
    let span = info_span!(
        "roster.employees.search",
        has_name = query.name.is_some(),
        has_range = query.from.is_some() || query.to.is_some()
    );
    let _guard = span.enter();

    let mut select = employee::Entity::find();
    if let Some(name) = query
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
    {
        select = select.filter(
            Condition::any()
                .add(employee::Column::FirstName.contains(name))
                .add(employee::Column::LastName.contains(name)),
        );
    }
    if let Some(from) = query.from {
        select = select.filter(employee::Column::Birthdate.gte(from));
    }
    if let Some(to) = query.to {
        select = select.filter(employee::Column::Birthdate.lte(to));
    }
    Ok(select.all(db).await?)
}

/// Direct reports of the given manager; an unknown id yields an empty list,
/// not an error.
pub async fn list_by_manager(
    db: &DatabaseConnection,
    manager_id: i32,
) -> Result<Vec<employee::Model>, Error> {
    Ok(employee::Entity::find()
        .filter(employee::Column::ManagerId.eq(manager_id))
        .all(db)
        .await?)
}

#[derive(Debug, FromQueryResult)]
struct RoleStatsRow {
    count: i64,
    average_salary: Option<f64>,
}

/// Head count and average salary for one role, in a single aggregate query.
/// An empty role reports an average of zero rather than failing on the
/// division.
pub async fn role_stats(db: &DatabaseConnection, role: Role) -> Result<RoleStats, Error> {
    let average: SimpleExpr = Func::avg(Expr::col(employee::Column::CurrentSalary)).into();
    let row = employee::Entity::find()
        .select_only()
        .column_as(employee::Column::Id.count(), "count")
        .column_as(average, "average_salary")
        .filter(employee::Column::Role.eq(role))
        .into_model::<RoleStatsRow>()
        .one(db)
        .await?;
    Ok(match row {
        Some(row) => RoleStats {
            count: row.count,
            average_salary: row.average_salary.unwrap_or(0.0),
        },
        None => RoleStats {
            count: 0,
            average_salary: 0.0,
        },
    })
}

pub async fn create(
    db: &DatabaseConnection,
    input: &EmployeeInput,
) -> Result<employee::Model, Error> {
    // The uniqueness check and the insert share one transaction; the store's
    // boundary is the only defense against two concurrent CEO creations.
    let txn = db.begin().await?;
    let ceo_taken = other_ceo_exists(&txn, input, None).await?;
    let report = validate::validate_employee(input, today(), ceo_taken);
    if !report.is_empty() {
        return Err(Error::Validation(report));
    }
    let model = mapper::to_entity(input)
        .insert(&txn)
        .await
        .map_err(map_write_err)?;
    txn.commit().await?;
    info!(id = model.id, "employee created");
    Ok(model)
}

pub async fn update(db: &DatabaseConnection, id: i32, input: &EmployeeInput) -> Result<(), Error> {
    let txn = db.begin().await?;
    let existing = employee::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(Error::NotFound)?;
    // A sitting CEO may update their own record without tripping the
    // uniqueness check, so the record under update is excluded.
    let ceo_taken = other_ceo_exists(&txn, input, Some(id)).await?;
    let report = validate::validate_employee(input, today(), ceo_taken);
    if !report.is_empty() {
        return Err(Error::Validation(report));
    }
    mapper::apply_update(existing, input)
        .update(&txn)
        .await
        .map_err(map_write_err)?;
    txn.commit().await?;
    Ok(())
}

pub async fn update_salary(
    db: &DatabaseConnection,
    id: i32,
    update: &SalaryUpdate,
) -> Result<(), Error> {
    let existing = get_by_id(db, id).await?;
    let report = validate::validate_salary("newSalary", update.new_salary);
    if !report.is_empty() {
        return Err(Error::Validation(report));
    }
    let mut active = existing.into_active_model();
    active.current_salary = Set(update.new_salary);
    active.update(db).await?;
    Ok(())
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), Error> {
    let existing = get_by_id(db, id).await?;
    existing.delete(db).await.map_err(map_write_err)?;
    info!(id, "employee deleted");
    Ok(())
}

/// True when a CEO record other than `exclude` already exists. Only queried
/// when the candidate claims the role.
async fn other_ceo_exists<C: ConnectionTrait>(
    conn: &C,
    input: &EmployeeInput,
    exclude: Option<i32>,
) -> Result<bool, DbErr> {
    if input.role != Role::Ceo {
        return Ok(false);
    }
    let mut query = employee::Entity::find().filter(employee::Column::Role.eq(Role::Ceo));
    if let Some(id) = exclude {
        query = query.filter(employee::Column::Id.ne(id));
    }
    Ok(query.count(conn).await? > 0)
}

/// The store refuses writes that would break the manager reference: a
/// dangling `manager_id` on insert/update, or deleting a record that other
/// records still point at.
fn map_write_err(err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => Error::ManagerReferenced,
        _ => Error::Db(err),
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
