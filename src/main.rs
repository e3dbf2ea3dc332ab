use std::sync::Arc;

use rocket::{launch, Build, Rocket};

use access::{GameAccess, SqlGameAccess};
use config::Settings;
use identity::HttpIdentityClient;
use metrics::Metrics;

mod access;
mod config;
mod database;
mod identity;
mod leaderboard;
mod metrics;
mod routes;
#[cfg(test)]
mod tests;

#[launch]
async fn rocket() -> _ {
    // Read the configuration
    dotenv::dotenv().ok();
    let settings = Settings::from_env().expect("failed to read the configuration");

    // Connect to a database
    let database_pool = database::connect(&settings)
        .await
        .expect("failed to connect to a database");
    log::info!("connected to the games database");

    // Connect to the identity service
    let identity = HttpIdentityClient::new(&settings.identity_service_url);
    log::info!(
        "using the identity service at {}",
        settings.identity_service_url
    );

    let metrics = Metrics::new().expect("failed to register the metrics");

    let games = SqlGameAccess::new(database_pool, Arc::new(identity));
    build(Arc::new(games), metrics)
}

/// Builds the rocket serving `games` and reporting to `metrics`.
pub fn build(games: Arc<dyn GameAccess>, metrics: Metrics) -> Rocket<Build> {
    rocket::build()
        .mount("/v1", routes::routes())
        .mount("/", metrics::routes())
        .manage::<Arc<dyn GameAccess>>(games)
        .manage(metrics.clone())
        .attach(metrics)
}
