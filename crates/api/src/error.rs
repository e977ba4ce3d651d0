use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde_json::json;

use crate::validate::ValidationReport;

/// Failure taxonomy for the employee service. Business-rule violations are
/// computed and returned as data; only store failures travel the error
/// channel unshaped, and a single spot below translates everything into a
/// status code at the transport edge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(ValidationReport),
    #[error("employee not found")]
    NotFound,
    #[error("employee is referenced as a manager by other records")]
    ManagerReferenced,
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Validation(report) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "status": 400,
                    "error": "Validation Failed",
                    "details": report,
                })),
            )
                .into_response(),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "status": 404,
                    "error": "Employee not found",
                })),
            )
                .into_response(),
            Error::ManagerReferenced => (
                StatusCode::CONFLICT,
                Json(json!({
                    "status": 409,
                    "error": "Employee is referenced as a manager by other employees",
                })),
            )
                .into_response(),
            Error::Db(err) => {
                // Log the detail, expose only a generic message.
                tracing::error!(error = %err, "unhandled store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "status": 500,
                        "error": "Internal Server Error",
                    })),
                )
                    .into_response()
            }
        }
    }
}
