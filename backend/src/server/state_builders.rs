//! Builders wiring outbound adapters into the driving ports.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::domain::ports::{CredentialHasher, EmployeeRepository, TokenIssuer, UserRepository};
use crate::domain::{AccountService, EmployeeService};
use crate::inbound::graphql::GraphqlState;
use crate::outbound::persistence::{MongoEmployeeRepository, MongoStore, MongoUserRepository};
use crate::outbound::security::{Argon2Hasher, JwtIssuer, SigningSecret};

/// Driven-port implementations the services are assembled from.
pub struct ServiceAdapters<U, E, H, T> {
    /// User account store.
    pub users: Arc<U>,
    /// Employee record store.
    pub employees: Arc<E>,
    /// Password hashing.
    pub hasher: Arc<H>,
    /// Access-token signing.
    pub tokens: Arc<T>,
    /// Time source for token issue and expiry.
    pub clock: Arc<dyn Clock>,
}

/// Build resolver state from arbitrary adapters.
#[must_use]
pub fn build_graphql_state<U, E, H, T>(adapters: ServiceAdapters<U, E, H, T>) -> GraphqlState
where
    U: UserRepository + 'static,
    E: EmployeeRepository + 'static,
    H: CredentialHasher + 'static,
    T: TokenIssuer + 'static,
{
    let ServiceAdapters {
        users,
        employees,
        hasher,
        tokens,
        clock,
    } = adapters;
    GraphqlState::new(
        Arc::new(AccountService::new(users, hasher, tokens, clock)),
        Arc::new(EmployeeService::new(employees)),
    )
}

/// Production wiring over the MongoDB store and the signing secret.
#[must_use]
pub fn build_mongo_state(store: &MongoStore, secret: &SigningSecret) -> GraphqlState {
    build_graphql_state(ServiceAdapters {
        users: Arc::new(MongoUserRepository::new(store)),
        employees: Arc::new(MongoEmployeeRepository::new(store)),
        hasher: Arc::new(Argon2Hasher::default()),
        tokens: Arc::new(JwtIssuer::new(secret)),
        clock: Arc::new(DefaultClock),
    })
}
