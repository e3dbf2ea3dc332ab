use std::sync::Arc;

use sqlx::any::AnyPoolOptions;

use crate::{
    database::{DatabasePool, GameId, GameRecord, OptionalRef, ScoreEntry, UserId},
    identity::IdentityProfile,
};


const PONG_LOGO: &str = "2eb4a823-3a6d-4cba-8767-4d4946890f4f";
const PONG_BACKGROUND: &str = "2eb4a823-3a6d-5xyz-8767-4d4946890f4f";
const KEK1_PHOTO: &str = "ea04741c-68d4-4e90-814d-44ffedf7c685";

const CREATE_GAMES: &str = "CREATE TABLE games (
    id INTEGER PRIMARY KEY,
    slug TEXT NOT NULL UNIQUE,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    rules TEXT NOT NULL,
    code_example TEXT NOT NULL,
    bot_code TEXT NOT NULL,
    logo_uuid TEXT,
    background_uuid TEXT
)";

const CREATE_USERS_GAMES: &str = "CREATE TABLE users_games (
    user_id INTEGER NOT NULL,
    game_id INTEGER NOT NULL REFERENCES games (id),
    score INTEGER NOT NULL,
    PRIMARY KEY (user_id, game_id)
)";

fn pong() -> GameRecord {
    GameRecord {
        id: 1,
        slug: "pong".to_owned(),
        title: "Pong".to_owned(),
        description: "Very cool game(net)".to_owned(),
        rules: "Do not cheat, please".to_owned(),
        code_example: "const a = 5;".to_owned(),
        bot_code: "const a = 5;".to_owned(),
        logo_uuid: OptionalRef::present(PONG_LOGO),
        background_uuid: OptionalRef::present(PONG_BACKGROUND),
    }
}

/// A game without a logo or a background.
fn snake() -> GameRecord {
    GameRecord {
        id: 2,
        slug: "snake".to_owned(),
        title: "Snake".to_owned(),
        description: "Eat and grow".to_owned(),
        rules: "Do not bite yourself".to_owned(),
        code_example: "move('up');".to_owned(),
        bot_code: "move('left');".to_owned(),
        logo_uuid: OptionalRef::absent(),
        background_uuid: OptionalRef::absent(),
    }
}

fn profile(id: UserId, username: &str, photo_uuid: &str) -> IdentityProfile {
    IdentityProfile {
        id,
        username: username.to_owned(),
        photo_uuid: OptionalRef::non_empty(photo_uuid),
        active: true,
    }
}

/// `kek` and `kek1`, the second one with a photo.
fn profiles() -> Vec<IdentityProfile> {
    vec![profile(1, "kek", ""), profile(2, "kek1", KEK1_PHOTO)]
}

const NUMBERED_USERS: UserId = 100;

/// Profiles of `player1` to `player{count}`, with ids starting after 100.
fn numbered_profiles(count: UserId) -> Vec<IdentityProfile> {
    (1..=count)
        .map(|n| profile(NUMBERED_USERS + n, &format!("player{}", n), ""))
        .collect()
}

/// Opens an in-memory database.
/// A single connection is kept alive, as every connection gets its own database.
async fn empty_database() -> DatabasePool {
    sqlx::any::install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open an in-memory database")
}

/// Opens an in-memory database with the `games` and `users_games` tables.
async fn spawn_database() -> DatabasePool {
    let database = empty_database().await;
    for statement in [CREATE_GAMES, CREATE_USERS_GAMES] {
        sqlx::query(statement).execute(&database).await.unwrap();
    }
    database
}

async fn insert_game(database: &DatabasePool, game: &GameRecord) {
    sqlx::query(
        "INSERT INTO games (id, slug, title, description, rules, code_example, bot_code, logo_uuid, background_uuid) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
    )
    .bind(game.id)
    .bind(&game.slug)
    .bind(&game.title)
    .bind(&game.description)
    .bind(&game.rules)
    .bind(&game.code_example)
    .bind(&game.bot_code)
    .bind(Option::<String>::from(game.logo_uuid.clone()))
    .bind(Option::<String>::from(game.background_uuid.clone()))
    .execute(database)
    .await
    .unwrap();
}

async fn insert_scores(database: &DatabasePool, game_id: GameId, scores: &[ScoreEntry]) {
    for entry in scores {
        sqlx::query("INSERT INTO users_games (user_id, game_id, score) VALUES ($1, $2, $3)")
            .bind(entry.user_id)
            .bind(game_id)
            .bind(entry.score)
            .execute(database)
            .await
            .unwrap();
    }
}

/// Scores of `player1` to `player{count}`, where `player{n}` scored `n * 10`.
fn numbered_scores(count: UserId) -> Vec<ScoreEntry> {
    (1..=count)
        .map(|n| ScoreEntry::new(NUMBERED_USERS + n, n as i32 * 10))
        .collect()
}
