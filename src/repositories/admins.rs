use sqlx::PgPool;

use crate::db::models::Admin;
use crate::db::types::AdminFlag;

pub(crate) async fn list(pool: &PgPool) -> Result<Vec<Admin>, sqlx::Error> {
    sqlx::query_as::<_, Admin>("SELECT userid, admin FROM admins ORDER BY userid")
        .fetch_all(pool)
        .await
}

pub(crate) async fn list_by_user(pool: &PgPool, userid: i64) -> Result<Vec<Admin>, sqlx::Error> {
    sqlx::query_as::<_, Admin>("SELECT userid, admin FROM admins WHERE userid = $1")
        .bind(userid)
        .fetch_all(pool)
        .await
}

pub(crate) async fn create(
    pool: &PgPool,
    userid: Option<i64>,
    admin: Option<AdminFlag>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO admins (userid, admin) VALUES ($1, $2)")
        .bind(userid)
        .bind(admin.map(AdminFlag::as_str))
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn update(
    pool: &PgPool,
    userid: i64,
    admin: Option<AdminFlag>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE admins SET admin = $1 WHERE userid = $2")
        .bind(admin.map(AdminFlag::as_str))
        .bind(userid)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn delete(pool: &PgPool, userid: i64) -> Result<u64, sqlx::Error> {
    let result =
        sqlx::query("DELETE FROM admins WHERE userid = $1").bind(userid).execute(pool).await?;
    Ok(result.rows_affected())
}
