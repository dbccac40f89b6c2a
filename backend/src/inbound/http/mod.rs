//! Plain HTTP endpoints served alongside the GraphQL route.

pub mod health;
