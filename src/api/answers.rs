use axum::{extract::State, routing::get, Json, Router};

use crate::api::errors::{require_affected, ApiError};
use crate::api::extract::{ApiJson, ApiPath};
use crate::core::state::AppState;
use crate::db::models::Answer;
use crate::repositories;
use crate::schemas::quiz::AnswerPayload;
use crate::schemas::MessageResponse;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_answers).post(create_answer))
        .route("/:quizid", get(list_quiz_answers))
        .route("/:quizid/:questionnumber", axum::routing::put(update_answer).delete(delete_answer))
}

async fn list_answers(State(state): State<AppState>) -> Result<Json<Vec<Answer>>, ApiError> {
    let answers = repositories::answers::list(state.db())
        .await
        .map_err(|e| ApiError::store(e, "Failed to list answers"))?;
    Ok(Json(answers))
}

async fn list_quiz_answers(
    ApiPath(quizid): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Answer>>, ApiError> {
    let answers = repositories::answers::list_by_quiz(state.db(), quizid)
        .await
        .map_err(|e| ApiError::store(e, "Failed to list answers for quiz"))?;
    Ok(Json(answers))
}

async fn create_answer(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AnswerPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    repositories::answers::create(
        state.db(),
        payload.quizid,
        payload.questionnumber,
        payload.question.as_deref(),
        payload.answer.as_deref(),
    )
    .await
    .map_err(|e| ApiError::store(e, "Failed to add answer"))?;

    tracing::info!(
        quizid = ?payload.quizid,
        questionnumber = ?payload.questionnumber,
        action = "answer_create",
        "Answer added"
    );
    Ok(Json(MessageResponse::new("New answer added successfully!")))
}

async fn update_answer(
    ApiPath((quizid, questionnumber)): ApiPath<(i64, i64)>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AnswerPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = repositories::answers::update(
        state.db(),
        quizid,
        questionnumber,
        payload.question.as_deref(),
        payload.answer.as_deref(),
    )
    .await
    .map_err(|e| ApiError::store(e, "Failed to update answer"))?;
    require_affected(affected, || {
        format!("No answer found for quiz ID {quizid}, question number {questionnumber}.")
    })?;

    tracing::info!(quizid, questionnumber, action = "answer_update", "Answer updated");
    Ok(Json(MessageResponse::new("Answer updated successfully!")))
}

async fn delete_answer(
    ApiPath((quizid, questionnumber)): ApiPath<(i64, i64)>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = repositories::answers::delete(state.db(), quizid, questionnumber)
        .await
        .map_err(|e| ApiError::store(e, "Failed to delete answer"))?;
    require_affected(affected, || {
        format!("No answer found for quiz ID {quizid}, question number {questionnumber}.")
    })?;

    tracing::info!(quizid, questionnumber, action = "answer_delete", "Answer deleted");
    Ok(Json(MessageResponse::new(format!(
        "Answer for quiz ID {quizid}, question number {questionnumber} deleted successfully!"
    ))))
}
