//! Per-subject question banks. The same router is mounted once per subject,
//! with the subject captured by each route.

use axum::{extract::State, routing::get, Json, Router};

use crate::api::errors::{require_affected, ApiError};
use crate::api::extract::{ApiJson, ApiPath};
use crate::core::state::AppState;
use crate::db::models::SubjectQuestion;
use crate::db::types::Subject;
use crate::repositories;
use crate::repositories::subject_questions::SubjectQuestionFields;
use crate::schemas::question::SubjectQuestionPayload;
use crate::schemas::MessageResponse;

pub(crate) fn router(subject: Subject) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(move |state| list_questions(state, subject))
                .post(move |state, payload| create_question(state, subject, payload)),
        )
        .route(
            "/:id",
            get(move |path, state| get_question(path, state, subject))
                .put(move |path, state, payload| update_question(path, state, subject, payload))
                .delete(move |path, state| delete_question(path, state, subject)),
        )
}

async fn list_questions(
    State(state): State<AppState>,
    subject: Subject,
) -> Result<Json<Vec<SubjectQuestion>>, ApiError> {
    let questions = repositories::subject_questions::list(state.db(), subject)
        .await
        .map_err(|e| ApiError::store(e, "Failed to list questions"))?;
    Ok(Json(questions))
}

async fn get_question(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    subject: Subject,
) -> Result<Json<Vec<SubjectQuestion>>, ApiError> {
    let questions = repositories::subject_questions::list_by_id(state.db(), subject, id)
        .await
        .map_err(|e| ApiError::store(e, "Failed to fetch question"))?;
    Ok(Json(questions))
}

async fn create_question(
    State(state): State<AppState>,
    subject: Subject,
    ApiJson(payload): ApiJson<SubjectQuestionPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = repositories::subject_questions::create(state.db(), subject, fields(&payload))
        .await
        .map_err(|e| ApiError::store(e, "Failed to add question"))?;

    tracing::info!(
        table = subject.question_table(),
        id,
        action = "question_create",
        "Subject question added"
    );
    Ok(Json(MessageResponse::created("Added new question successfully!", id)))
}

async fn update_question(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    subject: Subject,
    ApiJson(payload): ApiJson<SubjectQuestionPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected =
        repositories::subject_questions::update(state.db(), subject, id, fields(&payload))
            .await
            .map_err(|e| ApiError::store(e, "Failed to update question"))?;
    require_affected(affected, || format!("No question found with ID {id}."))?;

    tracing::info!(
        table = subject.question_table(),
        id,
        action = "question_update",
        "Subject question updated"
    );
    Ok(Json(MessageResponse::new("Question updated successfully!")))
}

async fn delete_question(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    subject: Subject,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = repositories::subject_questions::delete(state.db(), subject, id)
        .await
        .map_err(|e| ApiError::store(e, "Failed to delete question"))?;
    require_affected(affected, || format!("No question found with ID {id}."))?;

    tracing::info!(
        table = subject.question_table(),
        id,
        action = "question_delete",
        "Subject question deleted"
    );
    Ok(Json(MessageResponse::new(format!("Question with ID {id} deleted successfully!"))))
}

fn fields(payload: &SubjectQuestionPayload) -> SubjectQuestionFields<'_> {
    SubjectQuestionFields {
        question: payload.question.as_deref(),
        option_a: payload.option_a.as_deref(),
        option_b: payload.option_b.as_deref(),
        option_c: payload.option_c.as_deref(),
        option_d: payload.option_d.as_deref(),
        answer: payload.answer.as_deref(),
    }
}
