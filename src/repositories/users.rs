use sqlx::PgPool;
use time::Date;

use crate::db::models::User;

const COLUMNS: &str =
    "userid, username, firstname, lastname, dateofbirth, email, city, state, country";

pub(crate) struct UserFields<'a> {
    pub(crate) username: Option<&'a str>,
    pub(crate) firstname: Option<&'a str>,
    pub(crate) lastname: Option<&'a str>,
    pub(crate) dateofbirth: Option<Date>,
    pub(crate) email: Option<&'a str>,
    pub(crate) city: Option<&'a str>,
    pub(crate) state: Option<&'a str>,
    pub(crate) country: Option<&'a str>,
}

pub(crate) async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users ORDER BY userid"))
        .fetch_all(pool)
        .await
}

pub(crate) async fn list_by_id(pool: &PgPool, userid: i64) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE userid = $1"))
        .bind(userid)
        .fetch_all(pool)
        .await
}

pub(crate) async fn create(
    pool: &PgPool,
    userid: Option<i64>,
    fields: UserFields<'_>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO users (
            userid, username, firstname, lastname, dateofbirth, email, city, state, country
         ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9)",
    )
    .bind(userid)
    .bind(fields.username)
    .bind(fields.firstname)
    .bind(fields.lastname)
    .bind(fields.dateofbirth)
    .bind(fields.email)
    .bind(fields.city)
    .bind(fields.state)
    .bind(fields.country)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn update(
    pool: &PgPool,
    userid: i64,
    fields: UserFields<'_>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE users SET
            username = $1,
            firstname = $2,
            lastname = $3,
            dateofbirth = $4,
            email = $5,
            city = $6,
            state = $7,
            country = $8
         WHERE userid = $9",
    )
    .bind(fields.username)
    .bind(fields.firstname)
    .bind(fields.lastname)
    .bind(fields.dateofbirth)
    .bind(fields.email)
    .bind(fields.city)
    .bind(fields.state)
    .bind(fields.country)
    .bind(userid)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn delete(pool: &PgPool, userid: i64) -> Result<u64, sqlx::Error> {
    let result =
        sqlx::query("DELETE FROM users WHERE userid = $1").bind(userid).execute(pool).await?;
    Ok(result.rows_affected())
}
