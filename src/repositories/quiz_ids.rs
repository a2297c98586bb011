use sqlx::PgPool;

use crate::db::models::QuizInfo;

pub(crate) async fn list(pool: &PgPool) -> Result<Vec<QuizInfo>, sqlx::Error> {
    sqlx::query_as::<_, QuizInfo>("SELECT quizid, moderator, quizname FROM quizid ORDER BY quizid")
        .fetch_all(pool)
        .await
}

pub(crate) async fn list_by_moderator(
    pool: &PgPool,
    moderator: i64,
) -> Result<Vec<QuizInfo>, sqlx::Error> {
    sqlx::query_as::<_, QuizInfo>(
        "SELECT quizid, moderator, quizname FROM quizid WHERE moderator = $1 ORDER BY quizid",
    )
    .bind(moderator)
    .fetch_all(pool)
    .await
}

pub(crate) async fn create(
    pool: &PgPool,
    quizid: Option<i64>,
    moderator: Option<i64>,
    quizname: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let result =
        sqlx::query("INSERT INTO quizid (quizid, moderator, quizname) VALUES ($1, $2, $3)")
            .bind(quizid)
            .bind(moderator)
            .bind(quizname)
            .execute(pool)
            .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn update(
    pool: &PgPool,
    quizid: i64,
    moderator: Option<i64>,
    quizname: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE quizid SET moderator = $1, quizname = $2 WHERE quizid = $3")
        .bind(moderator)
        .bind(quizname)
        .bind(quizid)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn delete(pool: &PgPool, quizid: i64) -> Result<u64, sqlx::Error> {
    let result =
        sqlx::query("DELETE FROM quizid WHERE quizid = $1").bind(quizid).execute(pool).await?;
    Ok(result.rows_affected())
}
