//! MongoDB-backed `UserRepository` adapter.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Email, NewUser, User};

use super::documents::{UserDocument, decode_listing};
use super::error_mapping::{is_duplicate_key, map_mongo_error};
use super::store::MongoStore;

/// User repository over the `users` collection.
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Repository over the store's `users` collection.
    #[must_use]
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.users(),
        }
    }
}

fn map_error(error: &mongodb::error::Error) -> UserPersistenceError {
    map_mongo_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn to_user(document: UserDocument) -> Result<User, UserPersistenceError> {
    document
        .into_domain()
        .map_err(|message| UserPersistenceError::query(format!("invalid stored user: {message}")))
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let documents: Vec<Document> = self
            .collection
            .clone_with_type::<Document>()
            .find(doc! {})
            .await
            .map_err(|err| map_error(&err))?
            .try_collect()
            .await
            .map_err(|err| map_error(&err))?;
        Ok(decode_listing(
            self.collection.name(),
            documents,
            UserDocument::into_domain,
        ))
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError> {
        self.collection
            .find_one(doc! { "email": email.as_ref() })
            .await
            .map_err(|err| map_error(&err))?
            .map(to_user)
            .transpose()
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut document = UserDocument::from_new_user(user);
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|err| {
                if is_duplicate_key(&err) {
                    UserPersistenceError::duplicate(user.email().as_ref())
                } else {
                    map_error(&err)
                }
            })?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| UserPersistenceError::query("insert returned a non-ObjectId _id"))?;
        document.id = Some(id);
        to_user(document)
    }
}
