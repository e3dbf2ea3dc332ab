use sqlx::{Any, Executor, Row};

use super::*;

/// Fetches a game called `slug` from the `games` table.
/// Returns `None` if no such game is registered.
pub async fn game_by_slug<'e, E>(executor: E, slug: &str) -> sqlx::Result<Option<GameRecord>>
where
    E: Executor<'e, Database = Any>,
{
    let row = sqlx::query(&format!(
        "SELECT {} FROM games g WHERE g.slug = $1",
        GameRecord::COLUMNS
    ))
    .bind(slug)
    .fetch_optional(executor)
    .await?;

    row.as_ref().map(GameRecord::from_row).transpose()
}

/// Fetches every registered game, ordered by id.
pub async fn game_list<'e, E>(executor: E) -> sqlx::Result<Vec<GameRecord>>
where
    E: Executor<'e, Database = Any>,
{
    let rows = sqlx::query(&format!(
        "SELECT {} FROM games g ORDER BY g.id",
        GameRecord::COLUMNS
    ))
    .fetch_all(executor)
    .await?;

    rows.iter().map(GameRecord::from_row).collect()
}

/// Counts the users that have a score in the game with id `game_id`.
pub async fn count_players<'e, E>(executor: E, game_id: GameId) -> sqlx::Result<i64>
where
    E: Executor<'e, Database = Any>,
{
    let row = sqlx::query("SELECT count(*) FROM users_games WHERE game_id = $1")
        .bind(game_id)
        .fetch_one(executor)
        .await?;

    row.try_get_unchecked::<i64, usize>(0)
}

/// Fetches one page of the scores of the game called `slug`,
/// best score first. Equal scores are ordered by user id.
pub async fn leaderboard_scores<'e, E>(
    executor: E,
    slug: &str,
    limit: i64,
    offset: i64,
) -> sqlx::Result<Vec<ScoreEntry>>
where
    E: Executor<'e, Database = Any>,
{
    let rows = sqlx::query(
        "SELECT ug.user_id, ug.score FROM users_games ug \
         JOIN games g ON ug.game_id = g.id \
         WHERE g.slug = $1 \
         ORDER BY ug.score DESC, ug.user_id \
         LIMIT $2 OFFSET $3",
    )
    .bind(slug)
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await?;

    rows.iter().map(ScoreEntry::from_row).collect()
}
