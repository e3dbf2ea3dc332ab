use std::sync::Arc;

use rocket::{
    http::Status,
    response::{self, Responder},
    serde::{json::Json, Deserialize, Serialize},
    Request, Route, State,
};

use crate::{
    access::{AccessError, GameAccess},
    database::{GameRecord, OptionalRef},
    leaderboard::{Leaderboard, Pagination},
};

pub type RequestResult<T, E = AccessError> = std::result::Result<T, E>;

type Games = State<Arc<dyn GameAccess>>;

/// Carousel entry of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct GameSummary {
    pub slug: String,
    pub title: String,
    pub background_uuid: OptionalRef,
}

/// Everything known about a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct GameFull {
    #[serde(flatten)]
    pub game: GameSummary,
    pub description: String,
    pub rules: String,
    pub code_example: String,
    pub bot_code: String,
    pub logo_uuid: OptionalRef,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct TotalPlayers {
    pub count: i64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorMessage {
    pub message: String,
}

impl From<&GameRecord> for GameSummary {
    fn from(game: &GameRecord) -> Self {
        Self {
            slug: game.slug.clone(),
            title: game.title.clone(),
            background_uuid: game.background_uuid.clone(),
        }
    }
}

impl From<GameRecord> for GameFull {
    fn from(game: GameRecord) -> Self {
        Self {
            game: GameSummary::from(&game),
            description: game.description,
            rules: game.rules,
            code_example: game.code_example,
            bot_code: game.bot_code,
            logo_uuid: game.logo_uuid,
        }
    }
}

impl<'r> Responder<'r, 'static> for AccessError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = if self.is_not_found() {
            log::warn!("{} {}: {}", request.method(), request.uri(), self);
            Status::NotFound
        } else {
            log::error!("{} {}: {}", request.method(), request.uri(), self);
            Status::InternalServerError
        };

        let body = Json(ErrorMessage {
            message: self.to_string(),
        });
        (status, body).respond_to(request)
    }
}

pub fn routes() -> Vec<Route> {
    rocket::routes![game_list, game, leaderboard, total_players]
}

#[rocket::get("/games")]
pub async fn game_list(games: &Games) -> RequestResult<Json<Vec<GameSummary>>> {
    let list = games.game_list().await?;
    Ok(Json(list.iter().map(GameSummary::from).collect()))
}

#[rocket::get("/games/<slug>")]
pub async fn game(slug: &str, games: &Games) -> RequestResult<Json<GameFull>> {
    let game = games.game_by_slug(slug).await?;
    Ok(Json(game.into()))
}

/// Malformed `limit` and `offset` fall back to their defaults.
#[rocket::get("/games/<slug>/leaderboard?<limit>&<offset>")]
pub async fn leaderboard(
    slug: &str,
    limit: Option<&str>,
    offset: Option<&str>,
    games: &Games,
) -> RequestResult<Json<Leaderboard>> {
    let pagination = Pagination::from_query(limit, offset);
    let leaderboard = games.leaderboard(slug, pagination).await?;
    Ok(Json(leaderboard))
}

#[rocket::get("/games/<slug>/leaderboard/count")]
pub async fn total_players(slug: &str, games: &Games) -> RequestResult<Json<TotalPlayers>> {
    let count = games.total_players(slug).await?;
    Ok(Json(TotalPlayers { count }))
}
