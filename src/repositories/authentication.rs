use sqlx::PgPool;

use crate::db::models::{Authentication, User};

pub(crate) async fn list(pool: &PgPool) -> Result<Vec<Authentication>, sqlx::Error> {
    sqlx::query_as::<_, Authentication>(
        "SELECT userid, password FROM authentication ORDER BY userid",
    )
    .fetch_all(pool)
    .await
}

pub(crate) async fn list_by_user(
    pool: &PgPool,
    userid: i64,
) -> Result<Vec<Authentication>, sqlx::Error> {
    sqlx::query_as::<_, Authentication>(
        "SELECT userid, password FROM authentication WHERE userid = $1",
    )
    .bind(userid)
    .fetch_all(pool)
    .await
}

pub(crate) async fn create(
    pool: &PgPool,
    userid: Option<i64>,
    password: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO authentication (userid, password) VALUES ($1, $2)")
        .bind(userid)
        .bind(password)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn update(
    pool: &PgPool,
    userid: i64,
    password: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE authentication SET password = $1 WHERE userid = $2")
        .bind(password)
        .bind(userid)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn delete(pool: &PgPool, userid: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM authentication WHERE userid = $1")
        .bind(userid)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Users whose stored password equals `password`. Empty when the pair does not match.
pub(crate) async fn find_matching_users(
    pool: &PgPool,
    userid: Option<i64>,
    password: Option<&str>,
) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT u.userid, u.username, u.firstname, u.lastname, u.dateofbirth,
                u.email, u.city, u.state, u.country
         FROM authentication a
         JOIN users u ON u.userid = a.userid
         WHERE a.userid = $1 AND a.password = $2",
    )
    .bind(userid)
    .bind(password)
    .fetch_all(pool)
    .await
}
