//! Quiz questions (`quizzes` table), the per-subject listings and answer checking.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::api::errors::{require_affected, ApiError};
use crate::api::extract::{ApiJson, ApiPath};
use crate::core::state::AppState;
use crate::db::models::QuizQuestion;
use crate::db::types::Subject;
use crate::repositories;
use crate::repositories::quizzes::QuizQuestionFields;
use crate::schemas::quiz::{CheckAnswerRequest, CheckAnswerResponse, QuizQuestionPayload};
use crate::schemas::MessageResponse;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_questions).post(create_question))
        .route("/algebra", get(list_algebra))
        .route("/chemistry", get(list_chemistry))
        .route("/check-answer", post(check_answer))
        .route("/:questionnumber", get(get_question).put(update_question).delete(delete_question))
}

async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuizQuestion>>, ApiError> {
    let questions = repositories::quizzes::list(state.db())
        .await
        .map_err(|e| ApiError::store(e, "Failed to list quiz questions"))?;
    Ok(Json(questions))
}

async fn list_algebra(State(state): State<AppState>) -> Result<Json<Vec<QuizQuestion>>, ApiError> {
    list_for_subject(&state, Subject::Algebra).await
}

async fn list_chemistry(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuizQuestion>>, ApiError> {
    list_for_subject(&state, Subject::Chemistry).await
}

async fn list_for_subject(
    state: &AppState,
    subject: Subject,
) -> Result<Json<Vec<QuizQuestion>>, ApiError> {
    let questions = repositories::quizzes::list_by_quiz(state.db(), subject.quiz_id())
        .await
        .map_err(|e| ApiError::store(e, "Failed to list quiz questions for subject"))?;
    Ok(Json(questions))
}

async fn get_question(
    ApiPath(questionnumber): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<QuizQuestion>>, ApiError> {
    let questions = repositories::quizzes::list_by_number(state.db(), questionnumber)
        .await
        .map_err(|e| ApiError::store(e, "Failed to fetch quiz question"))?;
    Ok(Json(questions))
}

async fn create_question(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<QuizQuestionPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let questionnumber = repositories::quizzes::create(state.db(), fields(&payload))
        .await
        .map_err(|e| ApiError::store(e, "Failed to create quiz question"))?;

    tracing::info!(questionnumber, action = "question_create", "Quiz question created");
    Ok(Json(MessageResponse::created("New quiz created successfully!", questionnumber)))
}

async fn update_question(
    ApiPath(questionnumber): ApiPath<i64>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<QuizQuestionPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = repositories::quizzes::update(state.db(), questionnumber, fields(&payload))
        .await
        .map_err(|e| ApiError::store(e, "Failed to update quiz question"))?;
    require_affected(affected, || "No quiz found with the given question number.".to_string())?;

    tracing::info!(questionnumber, action = "question_update", "Quiz question updated");
    Ok(Json(MessageResponse::new("Quiz updated successfully!")))
}

async fn delete_question(
    ApiPath(questionnumber): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = repositories::quizzes::delete(state.db(), questionnumber)
        .await
        .map_err(|e| ApiError::store(e, "Failed to delete quiz question"))?;
    require_affected(affected, || format!("No quiz found with question number {questionnumber}."))?;

    tracing::info!(questionnumber, action = "question_delete", "Quiz question deleted");
    Ok(Json(MessageResponse::new(format!(
        "Quiz with question number {questionnumber} deleted successfully!"
    ))))
}

async fn check_answer(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CheckAnswerRequest>,
) -> Result<Json<CheckAnswerResponse>, ApiError> {
    let (Some(question_id), Some(user_answer)) = (payload.question_id, payload.user_answer) else {
        return Err(ApiError::BadRequest("questionId and userAnswer are required".to_string()));
    };

    let stored = repositories::quizzes::find_answer(state.db(), question_id)
        .await
        .map_err(|e| ApiError::store(e, "Failed to look up answer"))?;

    let Some(stored) = stored else {
        return Err(ApiError::NotFound(format!("No question found with number {question_id}.")));
    };

    Ok(Json(CheckAnswerResponse::grade(&stored, &user_answer)))
}

fn fields(payload: &QuizQuestionPayload) -> QuizQuestionFields<'_> {
    QuizQuestionFields {
        quizid: payload.quizid,
        question: payload.question.as_deref(),
        a: payload.a.as_deref(),
        b: payload.b.as_deref(),
        c: payload.c.as_deref(),
        d: payload.d.as_deref(),
        answer: payload.answer.as_deref(),
    }
}
