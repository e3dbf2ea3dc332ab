use std::sync::Arc;

use super::*;
use crate::{
    database::{queries, DatabasePool},
    identity::IdentityClient,
};

/// [`GameAccess`] backed by the games database and the identity service.
pub struct SqlGameAccess {
    database: DatabasePool,
    identity: Arc<dyn IdentityClient>,
}

impl SqlGameAccess {
    pub fn new(database: DatabasePool, identity: Arc<dyn IdentityClient>) -> Self {
        Self { database, identity }
    }
}

#[rocket::async_trait]
impl GameAccess for SqlGameAccess {
    async fn game_by_slug(&self, slug: &str) -> AccessResult<GameRecord> {
        queries::game_by_slug(&self.database, slug)
            .await
            .map_err(|err| AccessError::storage("get game by slug error", err))?
            .ok_or_else(|| AccessError::game_not_found(slug))
    }

    async fn total_players(&self, slug: &str) -> AccessResult<i64> {
        // Dropping the transaction before the commit rolls it back
        let mut transaction = self
            .database
            .begin()
            .await
            .map_err(|err| AccessError::storage("can not open total players transaction", err))?;

        let game = queries::game_by_slug(&mut *transaction, slug)
            .await
            .map_err(|err| AccessError::storage("total players can not get game by slug", err))?
            .ok_or_else(|| AccessError::game_not_found(slug))?;

        let total_players = queries::count_players(&mut *transaction, game.id)
            .await
            .map_err(|err| AccessError::storage("get game total players error", err))?;

        transaction
            .commit()
            .await
            .map_err(|err| AccessError::storage("can not commit total players transaction", err))?;

        Ok(total_players)
    }

    async fn game_list(&self) -> AccessResult<Vec<GameRecord>> {
        queries::game_list(&self.database)
            .await
            .map_err(|err| AccessError::storage("get game list error", err))
    }

    async fn leaderboard(&self, slug: &str, pagination: Pagination) -> AccessResult<Leaderboard> {
        let entries =
            queries::leaderboard_scores(&self.database, slug, pagination.limit, pagination.offset)
                .await
                .map_err(|err| AccessError::storage("get leaderboard error", err))?;

        Leaderboard::enrich(slug, entries, self.identity.as_ref()).await
    }
}
