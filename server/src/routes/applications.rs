//! Application routes: kanban board rows for the signed-in user.
//!
//! Rows are passed through as opaque JSON objects; row-level security on the
//! backend decides which rows the user's token can see or change.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use propulse_client::net::types::ApplicationStatus;
use serde::Deserialize;

use super::auth::AuthUser;
use super::backend_status;
use crate::state::AppState;

pub(crate) const TABLE: &str = "applications";

/// `GET /api/applications`: list the user's applications.
pub async fn list_applications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<serde_json::Value>>, StatusCode> {
    let rows = state
        .backend
        .select::<serde_json::Value>(TABLE, Some(&auth.token))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %auth.user.id, "application list failed");
            backend_status(&e)
        })?;

    tracing::debug!(count = rows.len(), user_id = %auth.user.id, "applications listed");
    Ok(Json(rows))
}

#[derive(Deserialize)]
pub struct StatusPatch {
    status: String,
}

/// Build the update payload for a status change, rejecting unknown columns.
pub(crate) fn status_patch(raw: &str) -> Result<serde_json::Value, StatusCode> {
    let status = raw.parse::<ApplicationStatus>().map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok(serde_json::json!({ "status": status.as_str() }))
}

/// `PATCH /api/applications/{id}`: move an application to another column.
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(body): Json<StatusPatch>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let patch = status_patch(&body.status)?;

    let mut rows = state
        .backend
        .update_by_id::<serde_json::Value>(TABLE, &id, &patch, Some(&auth.token))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, application_id = %id, "application update failed");
            backend_status(&e)
        })?;

    if rows.is_empty() {
        return Err(StatusCode::NOT_FOUND);
    }
    tracing::info!(application_id = %id, status = %body.status, "application moved");
    Ok(Json(rows.swap_remove(0)))
}

#[cfg(test)]
#[path = "applications_test.rs"]
mod tests;
