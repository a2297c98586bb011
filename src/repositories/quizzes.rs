use sqlx::PgPool;

use crate::db::models::QuizQuestion;

const COLUMNS: &str = "questionnumber, quizid, question, a, b, c, d, answer";

pub(crate) struct QuizQuestionFields<'a> {
    pub(crate) quizid: Option<i64>,
    pub(crate) question: Option<&'a str>,
    pub(crate) a: Option<&'a str>,
    pub(crate) b: Option<&'a str>,
    pub(crate) c: Option<&'a str>,
    pub(crate) d: Option<&'a str>,
    pub(crate) answer: Option<&'a str>,
}

pub(crate) async fn list(pool: &PgPool) -> Result<Vec<QuizQuestion>, sqlx::Error> {
    sqlx::query_as::<_, QuizQuestion>(&format!(
        "SELECT {COLUMNS} FROM quizzes ORDER BY questionnumber"
    ))
    .fetch_all(pool)
    .await
}

pub(crate) async fn list_by_quiz(
    pool: &PgPool,
    quizid: i64,
) -> Result<Vec<QuizQuestion>, sqlx::Error> {
    sqlx::query_as::<_, QuizQuestion>(&format!(
        "SELECT {COLUMNS} FROM quizzes WHERE quizid = $1 ORDER BY questionnumber"
    ))
    .bind(quizid)
    .fetch_all(pool)
    .await
}

pub(crate) async fn list_by_number(
    pool: &PgPool,
    questionnumber: i64,
) -> Result<Vec<QuizQuestion>, sqlx::Error> {
    sqlx::query_as::<_, QuizQuestion>(&format!(
        "SELECT {COLUMNS} FROM quizzes WHERE questionnumber = $1"
    ))
    .bind(questionnumber)
    .fetch_all(pool)
    .await
}

pub(crate) async fn find_answer(
    pool: &PgPool,
    questionnumber: i64,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT answer FROM quizzes WHERE questionnumber = $1")
        .bind(questionnumber)
        .fetch_optional(pool)
        .await
}

/// Returns the generated question number.
pub(crate) async fn create(
    pool: &PgPool,
    fields: QuizQuestionFields<'_>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO quizzes (quizid, question, a, b, c, d, answer)
         VALUES ($1,$2,$3,$4,$5,$6,$7)
         RETURNING questionnumber",
    )
    .bind(fields.quizid)
    .bind(fields.question)
    .bind(fields.a)
    .bind(fields.b)
    .bind(fields.c)
    .bind(fields.d)
    .bind(fields.answer)
    .fetch_one(pool)
    .await
}

pub(crate) async fn update(
    pool: &PgPool,
    questionnumber: i64,
    fields: QuizQuestionFields<'_>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE quizzes SET
            quizid = $1, question = $2, a = $3, b = $4, c = $5, d = $6, answer = $7
         WHERE questionnumber = $8",
    )
    .bind(fields.quizid)
    .bind(fields.question)
    .bind(fields.a)
    .bind(fields.b)
    .bind(fields.c)
    .bind(fields.d)
    .bind(fields.answer)
    .bind(questionnumber)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn delete(pool: &PgPool, questionnumber: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM quizzes WHERE questionnumber = $1")
        .bind(questionnumber)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
