//! GraphQL inbound adapter.
//!
//! Resolvers depend only on the driving ports held in [`GraphqlState`], so
//! the schema can be exercised with mocks or in-memory services.

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema, extensions::Tracing};

use crate::domain::ports::{EmployeeDirectory, UserAccounts};

mod error;
pub mod handler;
mod mutation;
mod query;
pub mod types;
mod validation;

pub use error::GqlResult;
pub use handler::{GRAPHQL_PATH, resource};
pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// Executable schema served by the HTTP layer.
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Port implementations available to resolvers through the schema context.
#[derive(Clone)]
pub struct GraphqlState {
    /// Registration, login, and user listing.
    pub accounts: Arc<dyn UserAccounts>,
    /// Employee record management.
    pub employees: Arc<dyn EmployeeDirectory>,
}

impl GraphqlState {
    /// Bundle the two driving ports.
    #[must_use]
    pub fn new(accounts: Arc<dyn UserAccounts>, employees: Arc<dyn EmployeeDirectory>) -> Self {
        Self {
            accounts,
            employees,
        }
    }
}

/// Build the schema with `state` as context data and per-request tracing spans.
#[must_use]
pub fn build_schema(state: GraphqlState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .extension(Tracing)
        .finish()
}

#[cfg(test)]
mod tests;
