use axum::{extract::State, routing::get, Json, Router};

use crate::api::errors::{require_affected, ApiError};
use crate::api::extract::{ApiJson, ApiPath};
use crate::core::state::AppState;
use crate::db::models::Authentication;
use crate::repositories;
use crate::schemas::auth::{AuthenticationPayload, CredentialResponse};
use crate::schemas::MessageResponse;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_credentials).post(create_credentials))
        .route("/:userid", get(get_credentials).put(update_credentials).delete(delete_credentials))
}

/// `POST /cred`. Success is decided by whether any user row matched.
pub(crate) async fn check_credentials(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AuthenticationPayload>,
) -> Result<Json<CredentialResponse>, ApiError> {
    let matches = repositories::authentication::find_matching_users(
        state.db(),
        payload.userid,
        payload.password.as_deref(),
    )
    .await
    .map_err(|e| ApiError::store(e, "Failed to check credentials"))?;

    let response = CredentialResponse::from_matches(matches);
    tracing::info!(userid = ?payload.userid, success = response.success, "Credential check");
    Ok(Json(response))
}

async fn list_credentials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Authentication>>, ApiError> {
    let rows = repositories::authentication::list(state.db())
        .await
        .map_err(|e| ApiError::store(e, "Failed to list authentication details"))?;
    Ok(Json(rows))
}

async fn get_credentials(
    ApiPath(userid): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Authentication>>, ApiError> {
    let rows = repositories::authentication::list_by_user(state.db(), userid)
        .await
        .map_err(|e| ApiError::store(e, "Failed to fetch authentication details"))?;
    Ok(Json(rows))
}

async fn create_credentials(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AuthenticationPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    repositories::authentication::create(
        state.db(),
        payload.userid,
        payload.password.as_deref(),
    )
    .await
    .map_err(|e| ApiError::store(e, "Failed to add authentication details"))?;

    tracing::info!(userid = ?payload.userid, action = "credentials_create", "Credentials added");
    Ok(Json(MessageResponse::new("New user authentication added successfully!")))
}

async fn update_credentials(
    ApiPath(userid): ApiPath<i64>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AuthenticationPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected =
        repositories::authentication::update(state.db(), userid, payload.password.as_deref())
            .await
            .map_err(|e| ApiError::store(e, "Failed to update password"))?;
    require_affected(affected, || {
        format!("No authentication details found for user ID {userid}.")
    })?;

    tracing::info!(userid, action = "credentials_update", "Password updated");
    Ok(Json(MessageResponse::new("User password updated successfully!")))
}

async fn delete_credentials(
    ApiPath(userid): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = repositories::authentication::delete(state.db(), userid)
        .await
        .map_err(|e| ApiError::store(e, "Failed to delete authentication details"))?;
    require_affected(affected, || {
        format!("No authentication details found for user ID {userid}.")
    })?;

    tracing::info!(userid, action = "credentials_delete", "Credentials removed");
    Ok(Json(MessageResponse::new(format!(
        "Authentication details for user ID {userid} deleted successfully!"
    ))))
}
