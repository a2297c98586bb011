//! The `quizid` table: quiz names and the user moderating each quiz.

use axum::{extract::State, routing::get, Json, Router};

use crate::api::errors::{require_affected, ApiError};
use crate::api::extract::{ApiJson, ApiPath};
use crate::core::state::AppState;
use crate::db::models::QuizInfo;
use crate::repositories;
use crate::schemas::quiz::QuizInfoPayload;
use crate::schemas::MessageResponse;

pub(crate) fn router() -> Router<AppState> {
    // GET filters by moderator; PUT and DELETE address the quiz itself.
    Router::new()
        .route("/", get(list_quizzes).post(create_quiz))
        .route("/:key", get(list_moderated_quizzes).put(update_quiz).delete(delete_quiz))
}

async fn list_quizzes(State(state): State<AppState>) -> Result<Json<Vec<QuizInfo>>, ApiError> {
    let quizzes = repositories::quiz_ids::list(state.db())
        .await
        .map_err(|e| ApiError::store(e, "Failed to list quizzes"))?;
    Ok(Json(quizzes))
}

async fn list_moderated_quizzes(
    ApiPath(userid): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<QuizInfo>>, ApiError> {
    let quizzes = repositories::quiz_ids::list_by_moderator(state.db(), userid)
        .await
        .map_err(|e| ApiError::store(e, "Failed to list quizzes for moderator"))?;
    Ok(Json(quizzes))
}

async fn create_quiz(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<QuizInfoPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    repositories::quiz_ids::create(
        state.db(),
        payload.quizid,
        payload.moderator,
        payload.quizname.as_deref(),
    )
    .await
    .map_err(|e| ApiError::store(e, "Failed to create quiz"))?;

    tracing::info!(quizid = ?payload.quizid, action = "quiz_create", "Quiz created");
    Ok(Json(MessageResponse::new("New quiz created successfully!")))
}

async fn update_quiz(
    ApiPath(quizid): ApiPath<i64>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<QuizInfoPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = repositories::quiz_ids::update(
        state.db(),
        quizid,
        payload.moderator,
        payload.quizname.as_deref(),
    )
    .await
    .map_err(|e| ApiError::store(e, "Failed to update quiz"))?;
    require_affected(affected, || format!("No quiz found with ID {quizid}."))?;

    tracing::info!(quizid, action = "quiz_update", "Quiz updated");
    Ok(Json(MessageResponse::new("Quiz updated successfully!")))
}

async fn delete_quiz(
    ApiPath(quizid): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = repositories::quiz_ids::delete(state.db(), quizid)
        .await
        .map_err(|e| ApiError::store(e, "Failed to delete quiz"))?;
    require_affected(affected, || format!("No quiz found with ID {quizid}."))?;

    tracing::info!(quizid, action = "quiz_delete", "Quiz deleted");
    Ok(Json(MessageResponse::new(format!("Quiz with ID {quizid} deleted successfully!"))))
}
