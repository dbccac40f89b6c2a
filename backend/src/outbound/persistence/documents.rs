//! BSON document shapes for the `users` and `employees` collections.
//!
//! These structs are internal to the persistence layer. Conversions into
//! domain types re-run validation. Single-record lookups surface a malformed
//! document as a query error; listings skip it with a warning so one bad
//! record cannot hide the rest of the collection.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Document};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{
    Email, Employee, EmployeeDetails, EmployeeId, NewUser, PasswordHash, User, UserId, Username,
};

/// Stored user document. `password` holds the PHC hash string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub(crate) id: Option<ObjectId>,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

impl UserDocument {
    pub(crate) fn from_new_user(user: &NewUser) -> Self {
        Self {
            id: None,
            username: user.username().as_ref().to_owned(),
            email: user.email().as_ref().to_owned(),
            password: user.password_hash().as_ref().to_owned(),
        }
    }

    pub(crate) fn into_domain(self) -> Result<User, String> {
        let id = self.id.ok_or("user document has no _id")?;
        let id = UserId::new(id.to_hex()).map_err(|err| err.to_string())?;
        let username = Username::new(&self.username).map_err(|err| err.to_string())?;
        let email = Email::new(&self.email).map_err(|err| err.to_string())?;
        let hash = PasswordHash::new(self.password).map_err(|err| err.to_string())?;
        Ok(User::new(id, NewUser::new(username, email, hash)))
    }
}

/// Stored employee document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct EmployeeDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub(crate) id: Option<ObjectId>,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) gender: String,
    pub(crate) salary: f64,
    pub(crate) email: String,
}

impl EmployeeDocument {
    pub(crate) fn from_details(details: &EmployeeDetails) -> Self {
        Self {
            id: None,
            first_name: details.first_name().to_owned(),
            last_name: details.last_name().to_owned(),
            gender: details.gender().to_owned(),
            salary: details.salary(),
            email: details.email().as_ref().to_owned(),
        }
    }

    pub(crate) fn into_domain(self) -> Result<Employee, String> {
        let id = self.id.ok_or("employee document has no _id")?;
        let id = EmployeeId::new(id.to_hex()).map_err(|err| err.to_string())?;
        let details = EmployeeDetails::try_from_parts(
            &self.first_name,
            &self.last_name,
            &self.gender,
            self.salary,
            &self.email,
        )
        .map_err(|err| err.to_string())?;
        Ok(Employee::new(id, details))
    }
}

/// Decode raw documents from a listing, dropping those that fail to
/// deserialise or validate.
pub(crate) fn decode_listing<D, T, F>(
    collection: &str,
    documents: Vec<Document>,
    convert: F,
) -> Vec<T>
where
    D: DeserializeOwned,
    F: Fn(D) -> Result<T, String>,
{
    documents
        .into_iter()
        .filter_map(|document| {
            let id = document.get_object_id("_id").ok().map(|oid| oid.to_hex());
            let decoded = bson::from_document::<D>(document)
                .map_err(|err| err.to_string())
                .and_then(&convert);
            match decoded {
                Ok(record) => Some(record),
                Err(reason) => {
                    warn!(collection, id = ?id, %reason, "skipping invalid stored document");
                    None
                }
            }
        })
        .collect()
}

/// Interpret a domain identifier as an `ObjectId`.
///
/// `None` means no stored record can carry this identifier.
pub(crate) fn parse_object_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw).ok()
}
