//! Runtime configuration, read from the environment (and `.env`).

use thiserror::Error;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    Missing(&'static str),
    #[error("{name} environment variable is invalid: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Settings {
    /// Connection string of the games database.
    pub database_url: String,
    /// Upper bound on pooled database connections.
    pub database_max_connections: u32,
    /// Base url of the identity service.
    pub identity_service_url: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = required("DATABASE_URL")?;
        let identity_service_url = required("IDENTITY_SERVICE_URL")?;

        let database_max_connections = match dotenv::var("DATABASE_MAX_CONNECTIONS") {
            Err(_) => DEFAULT_MAX_CONNECTIONS,
            Ok(value) => value.parse::<u32>().map_err(|_| ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                value,
            })?,
        };

        Ok(Settings {
            database_url,
            database_max_connections,
            identity_service_url,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    dotenv::var(name).map_err(|_| ConfigError::Missing(name))
}
