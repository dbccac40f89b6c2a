//! MongoDB-backed `EmployeeRepository` adapter.
//!
//! Identifiers that are not valid `ObjectId` hex strings cannot match any
//! stored document, so lookups, replacements, and deletes by such an id
//! report the record as absent without a round trip.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc};
use mongodb::options::ReturnDocument;

use crate::domain::ports::{EmployeePersistenceError, EmployeeRepository};
use crate::domain::{Email, Employee, EmployeeDetails, EmployeeId};

use super::documents::{EmployeeDocument, decode_listing, parse_object_id};
use super::error_mapping::{is_duplicate_key, map_mongo_error};
use super::store::MongoStore;

/// Employee repository over the `employees` collection.
#[derive(Clone)]
pub struct MongoEmployeeRepository {
    collection: Collection<EmployeeDocument>,
}

impl MongoEmployeeRepository {
    /// Repository over the store's `employees` collection.
    #[must_use]
    pub fn new(store: &MongoStore) -> Self {
        Self {
            collection: store.employees(),
        }
    }
}

fn map_error(error: &mongodb::error::Error) -> EmployeePersistenceError {
    map_mongo_error(
        error,
        EmployeePersistenceError::query,
        EmployeePersistenceError::connection,
    )
}

fn map_write_error(error: &mongodb::error::Error, email: &Email) -> EmployeePersistenceError {
    if is_duplicate_key(error) {
        EmployeePersistenceError::duplicate(email.as_ref())
    } else {
        map_error(error)
    }
}

fn to_employee(document: EmployeeDocument) -> Result<Employee, EmployeePersistenceError> {
    document.into_domain().map_err(|message| {
        EmployeePersistenceError::query(format!("invalid stored employee: {message}"))
    })
}

#[async_trait]
impl EmployeeRepository for MongoEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, EmployeePersistenceError> {
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
            EmployeeDocument::into_domain,
        ))
    }

    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let Some(oid) = parse_object_id(id.as_ref()) else {
            return Ok(None);
        };
        self.collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|err| map_error(&err))?
            .map(to_employee)
            .transpose()
    }

    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        self.collection
            .find_one(doc! { "email": email.as_ref() })
            .await
            .map_err(|err| map_error(&err))?
            .map(to_employee)
            .transpose()
    }

    async fn insert(
        &self,
        details: &EmployeeDetails,
    ) -> Result<Employee, EmployeePersistenceError> {
        let mut document = EmployeeDocument::from_details(details);
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|err| map_write_error(&err, details.email()))?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            EmployeePersistenceError::query("insert returned a non-ObjectId _id")
        })?;
        document.id = Some(id);
        to_employee(document)
    }

    async fn replace(
        &self,
        id: &EmployeeId,
        details: &EmployeeDetails,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        let Some(oid) = parse_object_id(id.as_ref()) else {
            return Ok(None);
        };
        self.collection
            .find_one_and_replace(doc! { "_id": oid }, EmployeeDocument::from_details(details))
            .return_document(ReturnDocument::After)
            .await
            .map_err(|err| map_write_error(&err, details.email()))?
            .map(to_employee)
            .transpose()
    }

    async fn delete(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeePersistenceError> {
        let Some(oid) = parse_object_id(id.as_ref()) else {
            return Ok(None);
        };
        self.collection
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(|err| map_error(&err))?
            .map(to_employee)
            .transpose()
    }
}
