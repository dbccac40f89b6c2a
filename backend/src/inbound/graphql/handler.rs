//! HTTP transport for the GraphQL schema.
//!
//! `POST /graphql` executes operations. `GET /graphql` serves GraphiQL only
//! when the playground is enabled; otherwise the route answers 405.

use actix_web::{HttpResponse, Resource, web};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use super::AppSchema;

/// Path the schema is served on.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Execute one GraphQL request against the shared schema.
pub async fn graphql(schema: web::Data<AppSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// GraphiQL page pointed at [`GRAPHQL_PATH`].
pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Resource mounting the GraphQL routes.
#[must_use]
pub fn resource(playground: bool) -> Resource {
    let resource = web::resource(GRAPHQL_PATH).route(web::post().to(graphql));
    if playground {
        resource.route(web::get().to(graphiql))
    } else {
        resource
    }
}
