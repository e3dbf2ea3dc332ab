use rocket::serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::database::{OptionalRef, UserId};

#[cfg(test)]
mod fake;
mod http;

#[cfg(test)]
pub use fake::FakeIdentityClient;
pub use http::HttpIdentityClient;

/// Public profile of a user, as known to the identity service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct IdentityProfile {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub photo_uuid: OptionalRef,
    pub active: bool,
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity service is unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("identity service failed: {0}")]
    Service(String),
}

pub type IdentityResult<T> = std::result::Result<T, IdentityError>;

/// Batch access to the identity service.
///
/// A call either returns every requested profile or fails as a whole.
#[rocket::async_trait]
pub trait IdentityClient: Send + Sync {
    async fn users_by_ids(&self, ids: &[UserId]) -> IdentityResult<Vec<IdentityProfile>>;
}
