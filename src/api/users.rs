use axum::{extract::State, routing::get, Json, Router};

use crate::api::errors::{require_affected, ApiError};
use crate::api::extract::{ApiJson, ApiPath};
use crate::core::state::AppState;
use crate::db::models::User;
use crate::repositories;
use crate::repositories::users::UserFields;
use crate::schemas::user::UserPayload;
use crate::schemas::MessageResponse;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:userid", get(get_user).put(update_user).delete(delete_user))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = repositories::users::list(state.db())
        .await
        .map_err(|e| ApiError::store(e, "Failed to list users"))?;
    Ok(Json(users))
}

async fn get_user(
    ApiPath(userid): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = repositories::users::list_by_id(state.db(), userid)
        .await
        .map_err(|e| ApiError::store(e, "Failed to fetch user"))?;
    Ok(Json(users))
}

async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UserPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    repositories::users::create(state.db(), payload.userid, fields(&payload))
        .await
        .map_err(|e| ApiError::store(e, "Failed to create user"))?;

    tracing::info!(userid = ?payload.userid, action = "user_create", "User created");
    Ok(Json(MessageResponse::new("New user created successfully!")))
}

async fn update_user(
    ApiPath(userid): ApiPath<i64>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UserPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = repositories::users::update(state.db(), userid, fields(&payload))
        .await
        .map_err(|e| ApiError::store(e, "Failed to update user"))?;
    require_affected(affected, || format!("No user found with ID {userid}."))?;

    tracing::info!(userid, action = "user_update", "User updated");
    Ok(Json(MessageResponse::new("User updated successfully!")))
}

async fn delete_user(
    ApiPath(userid): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = repositories::users::delete(state.db(), userid)
        .await
        .map_err(|e| ApiError::store(e, "Failed to delete user"))?;
    require_affected(affected, || format!("No user found with ID {userid}."))?;

    tracing::info!(userid, action = "user_delete", "User deleted");
    Ok(Json(MessageResponse::new(format!("User with ID {userid} deleted successfully!"))))
}

fn fields(payload: &UserPayload) -> UserFields<'_> {
    UserFields {
        username: payload.username.as_deref(),
        firstname: payload.firstname.as_deref(),
        lastname: payload.lastname.as_deref(),
        dateofbirth: payload.dateofbirth,
        email: payload.email.as_deref(),
        city: payload.city.as_deref(),
        state: payload.state.as_deref(),
        country: payload.country.as_deref(),
    }
}
