//! Shared helpers for the integration test suites.

pub mod cluster_skip;
pub mod mongo;

pub use cluster_skip::handle_cluster_setup_failure;
