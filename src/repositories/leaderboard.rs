use sqlx::PgPool;

use crate::db::models::LeaderboardEntry;

/// Highest score first; ties resolve by user then quiz so the order is stable.
pub(crate) async fn list_ranked(pool: &PgPool) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
    sqlx::query_as::<_, LeaderboardEntry>(
        "SELECT userid, quizid, score FROM leaderboard ORDER BY score DESC, userid, quizid",
    )
    .fetch_all(pool)
    .await
}
