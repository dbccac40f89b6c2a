//! Throwaway MongoDB databases for repository suites.

use std::time::Duration;

use employee_directory::outbound::persistence::{MongoConfig, MongoStore};
use mongodb::Client;
use mongodb::bson::Document;

use super::cluster_skip::{handle_cluster_setup_failure, mongo_test_uri};

/// A connected store on a uniquely named database, plus a raw client for
/// seeding documents the repositories would never write.
pub struct TestDatabase {
    pub store: MongoStore,
    client: Client,
    name: String,
}

impl TestDatabase {
    /// Connect to `MONGO_TEST_URI`, or return `None` when the suite should skip.
    pub async fn connect() -> Option<Self> {
        let uri = mongo_test_uri()?;
        let name = format!("directory_it_{}", uuid::Uuid::new_v4().simple());
        let config = MongoConfig::new(uri.as_str(), name.as_str())
            .with_server_selection_timeout(Duration::from_secs(3));
        let store = match MongoStore::connect(&config).await {
            Ok(store) => store,
            Err(err) => return handle_cluster_setup_failure(err),
        };
        let client = match Client::with_uri_str(uri.as_str()).await {
            Ok(client) => client,
            Err(err) => return handle_cluster_setup_failure(err),
        };
        Some(Self {
            store,
            client,
            name,
        })
    }

    /// Insert a raw document, bypassing domain validation.
    pub async fn seed_raw(&self, collection: &str, document: Document) {
        self.client
            .database(&self.name)
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .expect("seed raw document");
    }

    /// Drop the database and close both clients.
    pub async fn teardown(self) {
        self.client
            .database(&self.name)
            .drop()
            .await
            .expect("drop test database");
        self.client.shutdown().await;
        self.store.shutdown().await;
    }
}
