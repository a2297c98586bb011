use sqlx::PgPool;

use crate::db::models::Answer;

const COLUMNS: &str = "quizid, questionnumber, question, answer";

pub(crate) async fn list(pool: &PgPool) -> Result<Vec<Answer>, sqlx::Error> {
    sqlx::query_as::<_, Answer>(&format!(
        "SELECT {COLUMNS} FROM answers ORDER BY quizid, questionnumber"
    ))
    .fetch_all(pool)
    .await
}

pub(crate) async fn list_by_quiz(pool: &PgPool, quizid: i64) -> Result<Vec<Answer>, sqlx::Error> {
    sqlx::query_as::<_, Answer>(&format!(
        "SELECT {COLUMNS} FROM answers WHERE quizid = $1 ORDER BY questionnumber"
    ))
    .bind(quizid)
    .fetch_all(pool)
    .await
}

pub(crate) async fn create(
    pool: &PgPool,
    quizid: Option<i64>,
    questionnumber: Option<i64>,
    question: Option<&str>,
    answer: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO answers (quizid, questionnumber, question, answer) VALUES ($1, $2, $3, $4)",
    )
    .bind(quizid)
    .bind(questionnumber)
    .bind(question)
    .bind(answer)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn update(
    pool: &PgPool,
    quizid: i64,
    questionnumber: i64,
    question: Option<&str>,
    answer: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE answers SET question = $1, answer = $2 WHERE quizid = $3 AND questionnumber = $4",
    )
    .bind(question)
    .bind(answer)
    .bind(quizid)
    .bind(questionnumber)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn delete(
    pool: &PgPool,
    quizid: i64,
    questionnumber: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM answers WHERE quizid = $1 AND questionnumber = $2")
        .bind(quizid)
        .bind(questionnumber)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
