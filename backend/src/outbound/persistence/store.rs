//! MongoDB client lifecycle: connect, index bootstrap, ping, shutdown.
//!
//! `MongoStore` is constructed once at startup and shared by the
//! repositories. Cloning is cheap; the driver client is reference counted.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::{debug, info};

use super::documents::{EmployeeDocument, UserDocument};

pub(super) const USERS_COLLECTION: &str = "users";
pub(super) const EMPLOYEES_COLLECTION: &str = "employees";
const EMAIL_INDEX_NAME: &str = "email_unique";
const APP_NAME: &str = "employee-directory";

/// Errors raised while bringing the store up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The connection string could not be parsed or the client not built.
    #[error("invalid MongoDB configuration: {message}")]
    Configuration {
        /// Driver diagnostic.
        message: String,
    },

    /// The server did not answer the startup ping.
    #[error("MongoDB is unreachable: {message}")]
    Unreachable {
        /// Driver diagnostic.
        message: String,
    },

    /// Creating the unique email indexes failed.
    #[error("failed to create index on {collection}: {message}")]
    Index {
        /// Collection the index belongs to.
        collection: String,
        /// Driver diagnostic.
        message: String,
    },
}

impl StoreError {
    /// Build a [`StoreError::Configuration`].
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Build a [`StoreError::Unreachable`].
    #[must_use]
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable {
            message: message.into(),
        }
    }

    /// Build a [`StoreError::Index`].
    #[must_use]
    pub fn index(collection: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Index {
            collection: collection.into(),
            message: message.into(),
        }
    }
}

/// Connection settings for [`MongoStore`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use employee_directory::outbound::persistence::MongoConfig;
///
/// let config = MongoConfig::new("mongodb://localhost:27017", "directory")
///     .with_server_selection_timeout(Duration::from_secs(2));
/// assert_eq!(config.database(), "directory");
/// ```
#[derive(Clone)]
pub struct MongoConfig {
    uri: String,
    database: String,
    server_selection_timeout: Duration,
}

impl MongoConfig {
    /// Create a configuration with a 10 second server-selection timeout.
    #[must_use]
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            server_selection_timeout: Duration::from_secs(10),
        }
    }

    /// Bound how long operations wait for a reachable server.
    #[must_use]
    pub const fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }

    /// Connection string, which may embed credentials.
    #[must_use]
    pub fn uri(&self) -> &str {
        self.uri.as_str()
    }

    /// Database holding the `users` and `employees` collections.
    #[must_use]
    pub fn database(&self) -> &str {
        self.database.as_str()
    }
}

impl std::fmt::Debug for MongoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoConfig")
            .field("uri", &"<redacted>")
            .field("database", &self.database)
            .field("server_selection_timeout", &self.server_selection_timeout)
            .finish()
    }
}

/// Shared handle on the MongoDB client and the configured database.
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Connect, verify the server answers, and ensure the unique indexes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the URI is invalid, the server cannot be
    /// reached, or index creation fails.
    pub async fn connect(config: &MongoConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(config.uri())
            .await
            .map_err(|err| StoreError::configuration(err.to_string()))?;
        options.app_name = Some(APP_NAME.to_owned());
        options.server_selection_timeout = Some(config.server_selection_timeout);

        let client =
            Client::with_options(options).map_err(|err| StoreError::configuration(err.to_string()))?;
        let database = client.database(config.database());
        let store = Self { client, database };

        store.ping().await?;
        store.ensure_indexes().await?;
        info!(database = config.database(), "connected to MongoDB");
        Ok(store)
    }

    /// Round-trip a `ping` command to the server.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|err| {
                debug!(error = %err, "MongoDB ping failed");
                StoreError::unreachable(err.to_string())
            })
    }

    async fn ensure_indexes(&self) -> Result<(), StoreError> {
        create_email_index(&self.users()).await?;
        create_email_index(&self.employees()).await
    }

    pub(super) fn users(&self) -> Collection<UserDocument> {
        self.database.collection(USERS_COLLECTION)
    }

    pub(super) fn employees(&self) -> Collection<EmployeeDocument> {
        self.database.collection(EMPLOYEES_COLLECTION)
    }

    /// Close pooled connections and end server sessions.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("MongoDB client shut down");
    }
}

async fn create_email_index<T>(collection: &Collection<T>) -> Result<(), StoreError>
where
    T: Send + Sync,
{
    let options = IndexOptions::builder()
        .unique(true)
        .name(EMAIL_INDEX_NAME.to_owned())
        .build();
    let model = IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(options)
        .build();
    collection
        .create_index(model)
        .await
        .map(|_| ())
        .map_err(|err| StoreError::index(collection.name(), err.to_string()))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn config_debug_hides_uri() {
        let config = MongoConfig::new("mongodb://root:hunter2@db:27017", "directory");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("directory"));
    }

    #[rstest]
    fn config_defaults_selection_timeout() {
        let config = MongoConfig::new("mongodb://localhost", "directory");
        assert_eq!(config.server_selection_timeout, Duration::from_secs(10));
    }

    #[rstest]
    #[tokio::test]
    async fn connect_rejects_unparseable_uri() {
        let config = MongoConfig::new("postgres://localhost", "directory");
        let err = MongoStore::connect(&config)
            .await
            .expect_err("non-mongo scheme must fail");
        assert!(matches!(err, StoreError::Configuration { .. }));
    }
}
