use sqlx::{any::AnyRow, Row};

use super::UserId;

// Types allowed through the `Any` driver:
// i16
// i32
// i64
// f32
// f64
// bool
// &'r str
// String

pub type GameScore = i32;

/// A user's current score in one game, as stored in `users_games`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScoreEntry {
    pub user_id: UserId,
    pub score: GameScore,
}

impl ScoreEntry {
    pub fn new(user_id: UserId, score: GameScore) -> Self {
        Self { user_id, score }
    }

    pub(super) fn from_row(row: &AnyRow) -> sqlx::Result<Self> {
        let user_id = row.try_get_unchecked::<UserId, usize>(0)?;
        let score = row.try_get_unchecked::<GameScore, usize>(1)?;
        Ok(Self::new(user_id, score))
    }
}
