//! MongoDB persistence adapters.
//!
//! Concrete implementations of the user and employee repository ports,
//! backed by the official MongoDB driver.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between BSON documents
//!   and domain types. Business rules stay in the domain services.
//! - **Internal documents**: the serde document structs (`documents.rs`)
//!   never leave this module.
//! - **Explicit lifecycle**: [`MongoStore`] is connected once at startup,
//!   creates the unique email indexes, and is shut down on exit.
//! - **Strongly typed errors**: driver failures map onto the port error
//!   enums; unique-index violations become `Duplicate`.
//!
//! # Example
//!
//! ```no_run
//! use employee_directory::outbound::persistence::{
//!     MongoConfig, MongoEmployeeRepository, MongoStore,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MongoStore::connect(&MongoConfig::new("mongodb://localhost", "directory")).await?;
//! let employees = MongoEmployeeRepository::new(&store);
//! # let _ = employees;
//! store.shutdown().await;
//! # Ok(())
//! # }
//! ```

mod documents;
mod error_mapping;
mod mongo_employee_repository;
mod mongo_user_repository;
mod store;

pub use mongo_employee_repository::MongoEmployeeRepository;
pub use mongo_user_repository::MongoUserRepository;
pub use store::{MongoConfig, MongoStore, StoreError};
