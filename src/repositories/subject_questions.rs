//! Question banks stored one table per subject. The table name always comes
//! from [`Subject::question_table`], never from request input.

use sqlx::PgPool;

use crate::db::models::SubjectQuestion;
use crate::db::types::Subject;

const COLUMNS: &str = "id, question, option_a, option_b, option_c, option_d, answer";

pub(crate) struct SubjectQuestionFields<'a> {
    pub(crate) question: Option<&'a str>,
    pub(crate) option_a: Option<&'a str>,
    pub(crate) option_b: Option<&'a str>,
    pub(crate) option_c: Option<&'a str>,
    pub(crate) option_d: Option<&'a str>,
    pub(crate) answer: Option<&'a str>,
}

pub(crate) async fn list(
    pool: &PgPool,
    subject: Subject,
) -> Result<Vec<SubjectQuestion>, sqlx::Error> {
    let table = subject.question_table();
    sqlx::query_as::<_, SubjectQuestion>(&format!("SELECT {COLUMNS} FROM {table} ORDER BY id"))
        .fetch_all(pool)
        .await
}

pub(crate) async fn list_by_id(
    pool: &PgPool,
    subject: Subject,
    id: i64,
) -> Result<Vec<SubjectQuestion>, sqlx::Error> {
    let table = subject.question_table();
    sqlx::query_as::<_, SubjectQuestion>(&format!("SELECT {COLUMNS} FROM {table} WHERE id = $1"))
        .bind(id)
        .fetch_all(pool)
        .await
}

/// Returns the generated question id.
pub(crate) async fn create(
    pool: &PgPool,
    subject: Subject,
    fields: SubjectQuestionFields<'_>,
) -> Result<i64, sqlx::Error> {
    let table = subject.question_table();
    sqlx::query_scalar::<_, i64>(&format!(
        "INSERT INTO {table} (question, option_a, option_b, option_c, option_d, answer)
         VALUES ($1,$2,$3,$4,$5,$6)
         RETURNING id"
    ))
    .bind(fields.question)
    .bind(fields.option_a)
    .bind(fields.option_b)
    .bind(fields.option_c)
    .bind(fields.option_d)
    .bind(fields.answer)
    .fetch_one(pool)
    .await
}

pub(crate) async fn update(
    pool: &PgPool,
    subject: Subject,
    id: i64,
    fields: SubjectQuestionFields<'_>,
) -> Result<u64, sqlx::Error> {
    let table = subject.question_table();
    let result = sqlx::query(&format!(
        "UPDATE {table} SET
            question = $1, option_a = $2, option_b = $3, option_c = $4, option_d = $5, answer = $6
         WHERE id = $7"
    ))
    .bind(fields.question)
    .bind(fields.option_a)
    .bind(fields.option_b)
    .bind(fields.option_c)
    .bind(fields.option_d)
    .bind(fields.answer)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn delete(pool: &PgPool, subject: Subject, id: i64) -> Result<u64, sqlx::Error> {
    let table = subject.question_table();
    let result =
        sqlx::query(&format!("DELETE FROM {table} WHERE id = $1")).bind(id).execute(pool).await?;
    Ok(result.rows_affected())
}
