use thiserror::Error;

use crate::identity::IdentityError;

/// Everything that can go wrong while reading the catalog.
///
/// Callers only need to tell [`AccessError::NotFound`] apart from the rest.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal server error: {0}")]
    Internal(String),
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

impl AccessError {
    pub fn game_not_found(slug: &str) -> Self {
        Self::NotFound(format!("no game with the slug {} exists in the database", slug))
    }

    /// Wraps a storage fault, naming the step that failed.
    pub fn storage(context: &str, error: sqlx::Error) -> Self {
        Self::Internal(format!("{}: {}", context, error))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type AccessResult<T> = std::result::Result<T, AccessError>;
