use axum::{extract::State, routing::get, Json, Router};

use crate::api::errors::{require_affected, ApiError};
use crate::api::extract::{ApiJson, ApiPath};
use crate::core::state::AppState;
use crate::db::models::Admin;
use crate::repositories;
use crate::schemas::admin::AdminPayload;
use crate::schemas::MessageResponse;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_admins).post(create_admin))
        .route("/:userid", get(get_admin).put(update_admin).delete(delete_admin))
}

async fn list_admins(State(state): State<AppState>) -> Result<Json<Vec<Admin>>, ApiError> {
    let admins = repositories::admins::list(state.db())
        .await
        .map_err(|e| ApiError::store(e, "Failed to list admins"))?;
    Ok(Json(admins))
}

async fn get_admin(
    ApiPath(userid): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Admin>>, ApiError> {
    let admins = repositories::admins::list_by_user(state.db(), userid)
        .await
        .map_err(|e| ApiError::store(e, "Failed to fetch admin status"))?;
    Ok(Json(admins))
}

async fn create_admin(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AdminPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    repositories::admins::create(state.db(), payload.userid, payload.admin)
        .await
        .map_err(|e| ApiError::store(e, "Failed to add admin"))?;

    tracing::info!(userid = ?payload.userid, action = "admin_create", "Admin flag added");
    Ok(Json(MessageResponse::new("New admin added successfully!")))
}

async fn update_admin(
    ApiPath(userid): ApiPath<i64>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AdminPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = repositories::admins::update(state.db(), userid, payload.admin)
        .await
        .map_err(|e| ApiError::store(e, "Failed to update admin"))?;
    require_affected(affected, || format!("No admin found with userid {userid}."))?;

    tracing::info!(userid, action = "admin_update", "Admin flag updated");
    Ok(Json(MessageResponse::new("Admin updated successfully!")))
}

async fn delete_admin(
    ApiPath(userid): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = repositories::admins::delete(state.db(), userid)
        .await
        .map_err(|e| ApiError::store(e, "Failed to delete admin"))?;
    require_affected(affected, || format!("No admin found with userid {userid}."))?;

    tracing::info!(userid, action = "admin_delete", "Admin flag removed");
    Ok(Json(MessageResponse::new(format!("Admin with userid {userid} deleted successfully!"))))
}
