//! Service entry-point: loads settings, connects MongoDB, and serves GraphQL.

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use employee_directory::config::AppSettings;
use employee_directory::inbound::graphql::build_schema;
use employee_directory::inbound::http::health::HealthState;
use employee_directory::outbound::persistence::MongoStore;
use employee_directory::server::{ServerConfig, build_mongo_state, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_process().map_err(std::io::Error::other)?;
    let mongo_config = settings.mongo_config().map_err(std::io::Error::other)?;
    let secret = settings.signing_secret().map_err(std::io::Error::other)?;

    let store = MongoStore::connect(&mongo_config)
        .await
        .map_err(std::io::Error::other)?;
    let schema = build_schema(build_mongo_state(&store, &secret));

    let (host, port) = settings.bind_addr();
    let server_config = ServerConfig::new(host, port).with_playground(settings.playground_enabled());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), schema, &server_config)?;
    let outcome = server.await;

    health_state.mark_unhealthy();
    store.shutdown().await;
    info!("shutdown complete");
    outcome
}
