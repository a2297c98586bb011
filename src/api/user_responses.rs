use axum::{extract::State, routing::get, Json, Router};

use crate::api::errors::{require_affected, ApiError};
use crate::api::extract::{ApiJson, ApiPath};
use crate::core::state::AppState;
use crate::db::models::UserResponse;
use crate::repositories;
use crate::repositories::user_responses::UserResponseFields;
use crate::schemas::response::UserResponsePayload;
use crate::schemas::MessageResponse;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_responses).post(create_response))
        .route("/:response_id", get(get_response).put(update_response).delete(delete_response))
}

async fn list_responses(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let responses = repositories::user_responses::list(state.db())
        .await
        .map_err(|e| ApiError::store(e, "Failed to list responses"))?;
    Ok(Json(responses))
}

async fn get_response(
    ApiPath(response_id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let responses = repositories::user_responses::list_by_id(state.db(), response_id)
        .await
        .map_err(|e| ApiError::store(e, "Failed to fetch response"))?;
    Ok(Json(responses))
}

async fn create_response(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UserResponsePayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let response_id = repositories::user_responses::create(state.db(), fields(&payload))
        .await
        .map_err(|e| ApiError::store(e, "Failed to record response"))?;

    tracing::info!(
        response_id,
        user_id = ?payload.user_id,
        question_id = ?payload.question_id,
        action = "response_create",
        "Response recorded"
    );
    Ok(Json(MessageResponse::created("New response recorded successfully!", response_id)))
}

async fn update_response(
    ApiPath(response_id): ApiPath<i64>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UserResponsePayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = repositories::user_responses::update(state.db(), response_id, fields(&payload))
        .await
        .map_err(|e| ApiError::store(e, "Failed to update response"))?;
    require_affected(affected, || format!("No response found with ID {response_id}."))?;

    tracing::info!(response_id, action = "response_update", "Response updated");
    Ok(Json(MessageResponse::new("Response updated successfully!")))
}

async fn delete_response(
    ApiPath(response_id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = repositories::user_responses::delete(state.db(), response_id)
        .await
        .map_err(|e| ApiError::store(e, "Failed to delete response"))?;
    require_affected(affected, || format!("No response found with ID {response_id}."))?;

    tracing::info!(response_id, action = "response_delete", "Response deleted");
    Ok(Json(MessageResponse::new(format!("Response with ID {response_id} deleted successfully!"))))
}

fn fields(payload: &UserResponsePayload) -> UserResponseFields<'_> {
    UserResponseFields {
        user_id: payload.user_id,
        question_id: payload.question_id,
        selected_option: payload.selected_option.as_deref(),
    }
}
