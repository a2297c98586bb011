use axum::{extract::State, routing::get, Json, Router};

use crate::api::errors::{require_affected, ApiError};
use crate::api::extract::{ApiJson, ApiPath};
use crate::core::state::AppState;
use crate::db::models::Classroom;
use crate::repositories;
use crate::repositories::classrooms::ClassroomFields;
use crate::schemas::classroom::ClassroomPayload;
use crate::schemas::MessageResponse;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_classrooms).post(create_classroom))
        .route("/:id", get(get_classroom).put(update_classroom).delete(delete_classroom))
}

async fn list_classrooms(State(state): State<AppState>) -> Result<Json<Vec<Classroom>>, ApiError> {
    let classrooms = repositories::classrooms::list(state.db())
        .await
        .map_err(|e| ApiError::store(e, "Failed to list classrooms"))?;
    Ok(Json(classrooms))
}

async fn get_classroom(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Classroom>>, ApiError> {
    let classrooms = repositories::classrooms::list_by_id(state.db(), id)
        .await
        .map_err(|e| ApiError::store(e, "Failed to fetch classroom"))?;
    Ok(Json(classrooms))
}

async fn create_classroom(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ClassroomPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = repositories::classrooms::create(state.db(), fields(payload))
        .await
        .map_err(|e| ApiError::store(e, "Failed to create classroom"))?;

    tracing::info!(classroom_id = id, action = "classroom_create", "Classroom created");
    Ok(Json(MessageResponse::created("New classroom created successfully!", id)))
}

async fn update_classroom(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ClassroomPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = repositories::classrooms::update(state.db(), id, fields(payload))
        .await
        .map_err(|e| ApiError::store(e, "Failed to update classroom"))?;
    require_affected(affected, || format!("No classroom found with ID {id}."))?;

    tracing::info!(classroom_id = id, action = "classroom_update", "Classroom updated");
    Ok(Json(MessageResponse::new("Classroom updated successfully!")))
}

async fn delete_classroom(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = repositories::classrooms::delete(state.db(), id)
        .await
        .map_err(|e| ApiError::store(e, "Failed to delete classroom"))?;
    require_affected(affected, || format!("No classroom found with ID {id}."))?;

    tracing::info!(classroom_id = id, action = "classroom_delete", "Classroom deleted");
    Ok(Json(MessageResponse::new(format!("Classroom with ID {id} deleted successfully!"))))
}

fn fields(payload: ClassroomPayload) -> ClassroomFields {
    ClassroomFields {
        moderatorid: payload.moderatorid,
        quizid: payload.quizid,
        quiztaker: payload.quiztaker,
    }
}
