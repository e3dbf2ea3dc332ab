use sqlx::{any::AnyRow, Row};

use super::{GameId, OptionalRef};

/// A game from the `games` table.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    pub id: GameId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub rules: String,
    pub code_example: String,
    pub bot_code: String,
    pub logo_uuid: OptionalRef,
    pub background_uuid: OptionalRef,
}

impl GameRecord {
    /// Columns expected by [`GameRecord::from_row`], in order.
    pub(super) const COLUMNS: &'static str = "g.id, g.slug, g.title, g.description, \
        g.rules, g.code_example, g.bot_code, \
        CAST(g.logo_uuid AS TEXT) AS logo_uuid, \
        CAST(g.background_uuid AS TEXT) AS background_uuid";

    pub(super) fn from_row(row: &AnyRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get_unchecked::<GameId, usize>(0)?,
            slug: row.try_get_unchecked::<String, usize>(1)?,
            title: row.try_get_unchecked::<String, usize>(2)?,
            description: row.try_get_unchecked::<String, usize>(3)?,
            rules: row.try_get_unchecked::<String, usize>(4)?,
            code_example: row.try_get_unchecked::<String, usize>(5)?,
            bot_code: row.try_get_unchecked::<String, usize>(6)?,
            logo_uuid: row.try_get_unchecked::<Option<String>, usize>(7)?.into(),
            background_uuid: row.try_get_unchecked::<Option<String>, usize>(8)?.into(),
        })
    }
}
