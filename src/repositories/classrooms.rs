use sqlx::PgPool;

use crate::db::models::Classroom;

const COLUMNS: &str = "id, moderatorid, quizid, quiztaker";

pub(crate) struct ClassroomFields {
    pub(crate) moderatorid: Option<i64>,
    pub(crate) quizid: Option<i64>,
    pub(crate) quiztaker: Option<i64>,
}

pub(crate) async fn list(pool: &PgPool) -> Result<Vec<Classroom>, sqlx::Error> {
    sqlx::query_as::<_, Classroom>(&format!("SELECT {COLUMNS} FROM classrooms ORDER BY id"))
        .fetch_all(pool)
        .await
}

pub(crate) async fn list_by_id(pool: &PgPool, id: i64) -> Result<Vec<Classroom>, sqlx::Error> {
    sqlx::query_as::<_, Classroom>(&format!("SELECT {COLUMNS} FROM classrooms WHERE id = $1"))
        .bind(id)
        .fetch_all(pool)
        .await
}

/// Returns the generated classroom id.
pub(crate) async fn create(pool: &PgPool, fields: ClassroomFields) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO classrooms (moderatorid, quizid, quiztaker) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(fields.moderatorid)
    .bind(fields.quizid)
    .bind(fields.quiztaker)
    .fetch_one(pool)
    .await
}

pub(crate) async fn update(
    pool: &PgPool,
    id: i64,
    fields: ClassroomFields,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE classrooms SET moderatorid = $1, quizid = $2, quiztaker = $3 WHERE id = $4",
    )
    .bind(fields.moderatorid)
    .bind(fields.quizid)
    .bind(fields.quiztaker)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM classrooms WHERE id = $1").bind(id).execute(pool).await?;
    Ok(result.rows_affected())
}
