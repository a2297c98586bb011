use sqlx::PgPool;

use crate::db::models::UserResponse;

const COLUMNS: &str = "response_id, user_id, question_id, selected_option";

pub(crate) struct UserResponseFields<'a> {
    pub(crate) user_id: Option<i64>,
    pub(crate) question_id: Option<i64>,
    pub(crate) selected_option: Option<&'a str>,
}

pub(crate) async fn list(pool: &PgPool) -> Result<Vec<UserResponse>, sqlx::Error> {
    sqlx::query_as::<_, UserResponse>(&format!(
        "SELECT {COLUMNS} FROM user_responses ORDER BY response_id"
    ))
    .fetch_all(pool)
    .await
}

pub(crate) async fn list_by_id(
    pool: &PgPool,
    response_id: i64,
) -> Result<Vec<UserResponse>, sqlx::Error> {
    sqlx::query_as::<_, UserResponse>(&format!(
        "SELECT {COLUMNS} FROM user_responses WHERE response_id = $1"
    ))
    .bind(response_id)
    .fetch_all(pool)
    .await
}

/// Returns the generated response id.
pub(crate) async fn create(
    pool: &PgPool,
    fields: UserResponseFields<'_>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO user_responses (user_id, question_id, selected_option)
         VALUES ($1, $2, $3)
         RETURNING response_id",
    )
    .bind(fields.user_id)
    .bind(fields.question_id)
    .bind(fields.selected_option)
    .fetch_one(pool)
    .await
}

pub(crate) async fn update(
    pool: &PgPool,
    response_id: i64,
    fields: UserResponseFields<'_>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE user_responses SET user_id = $1, question_id = $2, selected_option = $3
         WHERE response_id = $4",
    )
    .bind(fields.user_id)
    .bind(fields.question_id)
    .bind(fields.selected_option)
    .bind(response_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn delete(pool: &PgPool, response_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM user_responses WHERE response_id = $1")
        .bind(response_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
