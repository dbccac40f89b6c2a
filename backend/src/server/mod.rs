//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
pub use state_builders::{ServiceAdapters, build_graphql_state, build_mongo_state};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::inbound::graphql::{self, AppSchema};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::middleware::Trace;

/// Shared state handed to every worker's `App`.
#[derive(Clone)]
pub struct AppDependencies {
    /// Probe state shared with the lifecycle in `main`.
    pub health_state: web::Data<HealthState>,
    /// Executable GraphQL schema.
    pub schema: web::Data<AppSchema>,
    /// Mount GraphiQL on `GET /graphql`.
    pub playground: bool,
}

/// Assemble the application: trace middleware, GraphQL, and health probes.
#[must_use]
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        schema,
        playground,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(schema)
        .wrap(Trace)
        .service(graphql::resource(playground))
        .service(ready)
        .service(live)
}

/// Bind the listener and return the server future.
///
/// Readiness is marked once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    schema: AppSchema,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let deps = AppDependencies {
        health_state: health_state.clone(),
        schema: web::Data::new(schema),
        playground: config.playground(),
    };

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(config.bind_addr())?
        .run();

    let (host, port) = config.bind_addr();
    info!(host, port, playground = config.playground(), "server listening");
    health_state.mark_ready();
    Ok(server)
}
