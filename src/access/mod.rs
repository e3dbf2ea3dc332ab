use crate::{
    database::GameRecord,
    leaderboard::{Leaderboard, Pagination},
};

mod error;
mod sql;

pub use error::*;
#[cfg(test)]
pub use memory::InMemoryGameAccess;
pub use sql::SqlGameAccess;

/// Read access to the games catalog and its leaderboards.
#[rocket::async_trait]
pub trait GameAccess: Send + Sync {
    /// Fetches the game called `slug`.
    async fn game_by_slug(&self, slug: &str) -> AccessResult<GameRecord>;

    /// Counts the players that have a score in the game called `slug`.
    async fn total_players(&self, slug: &str) -> AccessResult<i64>;

    /// Lists every game, ordered by id.
    async fn game_list(&self) -> AccessResult<Vec<GameRecord>>;

    /// Fetches one page of the leaderboard of the game called `slug`.
    async fn leaderboard(&self, slug: &str, pagination: Pagination) -> AccessResult<Leaderboard>;
}
