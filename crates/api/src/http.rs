//! HTTP surface: one route per service operation. Not-found maps to 404,
//! validation failures to 400 with the full report, referential-integrity
//! refusals to 409, anything else to a generic 500 (see `error`).

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use entity::employee::{self, Role};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::dto::{EmployeeInput, RoleStats, SalaryUpdate, SearchQuery};
use crate::error::Error;
use crate::service;
use crate::validate::{ValidationReport, Violation};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/search", get(search_employees))
        .route("/employees/stats", get(role_stats))
        .route(
            "/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/employees/{id}/reports", get(list_reports))
        .route("/employees/{id}/salary", patch(update_salary))
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    db_ok: bool,
    version: &'static str,
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let db_ok = state.db.ping().await.is_ok();
    Json(HealthResponse {
        ok: db_ok,
        db_ok,
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<employee::Model>>, Error> {
    Ok(Json(service::list_all(state.db.as_ref()).await?))
}

async fn search_employees(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<employee::Model>>, Error> {
    Ok(Json(service::search(state.db.as_ref(), &query).await?))
}

#[derive(Deserialize)]
struct StatsParams {
    role: i16,
}

async fn role_stats(
    State(state): State<AppState>,
    Query(params): Query<StatsParams>,
) -> Result<Json<RoleStats>, Error> {
    let role = Role::try_from(params.role).map_err(|_| {
        Error::Validation(ValidationReport::single(Violation::new(
            "role",
            "Role must be one of the defined values.",
        )))
    })?;
    Ok(Json(service::role_stats(state.db.as_ref(), role).await?))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<employee::Model>, Error> {
    Ok(Json(service::get_by_id(state.db.as_ref(), id).await?))
}

async fn list_reports(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<employee::Model>>, Error> {
    Ok(Json(service::list_by_manager(state.db.as_ref(), id).await?))
}

async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<EmployeeInput>,
) -> Result<(StatusCode, Json<employee::Model>), Error> {
    let model = service::create(state.db.as_ref(), &input).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<EmployeeInput>,
) -> Result<StatusCode, Error> {
    service::update(state.db.as_ref(), id, &input).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn update_salary(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(update): Json<SalaryUpdate>,
) -> Result<StatusCode, Error> {
    service::update_salary(state.db.as_ref(), id, &update).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Error> {
    service::delete(state.db.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
