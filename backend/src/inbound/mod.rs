//! Inbound adapters translating external requests into domain port calls.
//!
//! The GraphQL schema lives under [`graphql`]; plain HTTP endpoints that sit
//! outside the schema (health probes) live under [`http`].

pub mod graphql;
pub mod http;
