use sqlx::any::AnyPoolOptions;

use crate::config::Settings;

mod game;
mod optional;
pub mod queries;
mod score;

pub use game::GameRecord;
pub use optional::OptionalRef;
pub use score::{GameScore, ScoreEntry};

pub type DatabasePool = sqlx::AnyPool;
pub type GameId = i64;
pub type UserId = i64;

/// Opens the connection pool described by `settings`.
pub async fn connect(settings: &Settings) -> sqlx::Result<DatabasePool> {
    sqlx::any::install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(settings.database_max_connections)
        .connect(&settings.database_url)
        .await
}
