//! Employee directory service library.
//!
//! A GraphQL API over MongoDB for user accounts and employee records, laid
//! out as domain services behind ports with inbound and outbound adapters.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use domain::TraceId;
pub use middleware::Trace;
