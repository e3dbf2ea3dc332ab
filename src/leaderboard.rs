use std::collections::HashMap;

use rocket::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    access::{AccessError, AccessResult},
    database::{GameScore, OptionalRef, ScoreEntry, UserId},
    identity::{IdentityClient, IdentityProfile},
};

pub const DEFAULT_LIMIT: i64 = 5;
pub const DEFAULT_OFFSET: i64 = 0;

/// Which slice of the ranking to return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_OFFSET)
    }
}

impl Pagination {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    /// Parses raw query parameters.
    /// Missing, malformed or negative values fall back to the defaults.
    pub fn from_query(limit: Option<&str>, offset: Option<&str>) -> Self {
        fn parse(value: Option<&str>, default: i64) -> i64 {
            value
                .and_then(|value| value.trim().parse::<i64>().ok())
                .filter(|value| *value >= 0)
                .unwrap_or(default)
        }

        Self::new(parse(limit, DEFAULT_LIMIT), parse(offset, DEFAULT_OFFSET))
    }
}

/// One ranked player: their score together with their public profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct LeaderboardRow {
    pub username: String,
    pub photo_uuid: OptionalRef,
    pub id: UserId,
    pub active: bool,
    pub score: GameScore,
}

impl LeaderboardRow {
    pub fn new(entry: ScoreEntry, profile: IdentityProfile) -> Self {
        // An empty photo reference means the user has no photo
        let photo_uuid = Option::<String>::from(profile.photo_uuid)
            .map(OptionalRef::non_empty)
            .unwrap_or_default();
        Self {
            username: profile.username,
            photo_uuid,
            id: entry.user_id,
            active: profile.active,
            score: entry.score,
        }
    }
}

/// Rows ordered from the best score to the worst.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Leaderboard {
    rows: Vec<LeaderboardRow>,
}

impl Leaderboard {
    pub fn new(rows: Vec<LeaderboardRow>) -> Self {
        Self { rows }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeaderboardRow> {
        self.rows.iter()
    }

    /// Joins score entries with the profiles fetched for them.
    ///
    /// Profiles are matched by user id, so their order does not matter.
    /// The result keeps the order of `entries`.
    pub fn assemble(
        entries: Vec<ScoreEntry>,
        profiles: Vec<IdentityProfile>,
    ) -> AccessResult<Self> {
        let mut profiles: HashMap<UserId, IdentityProfile> = profiles
            .into_iter()
            .map(|profile| (profile.id, profile))
            .collect();

        let rows = entries
            .into_iter()
            .map(|entry| match profiles.remove(&entry.user_id) {
                Some(profile) => Ok(LeaderboardRow::new(entry, profile)),
                None => Err(AccessError::Internal(format!(
                    "identity service returned no profile for user {}",
                    entry.user_id
                ))),
            })
            .collect::<AccessResult<Vec<_>>>()?;

        Ok(Self::new(rows))
    }

    /// Turns a page of scores of the game `slug` into a leaderboard,
    /// fetching every profile in a single batch.
    pub async fn enrich(
        slug: &str,
        entries: Vec<ScoreEntry>,
        identity: &dyn IdentityClient,
    ) -> AccessResult<Self> {
        // An unknown game and a page past the last score look the same here
        if entries.is_empty() {
            return Err(AccessError::NotFound(format!(
                "game {} does not exist or has no scores in the requested range",
                slug
            )));
        }

        let ids: Vec<UserId> = entries.iter().map(|entry| entry.user_id).collect();
        let profiles = identity.users_by_ids(&ids).await?;

        Self::assemble(entries, profiles)
    }
}

impl Serialize for Leaderboard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Leaderboard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::new(Vec::deserialize(deserializer)?))
    }
}
