/**
 * User Database Operations
 *
 * MongoDB operations for the `users` collection. Writes build documents
 * with `doc!`; reads come back as typed [`User`] records.
 */

use bson::oid::ObjectId;
use bson::{doc, Bson, Document};
use chrono::Utc;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Collection;

use crate::store::Store;
use crate::users::types::{User, UserRole};

pub const USERS_COLLECTION: &str = "users";

/// Fields an update may never touch
const INVALID_UPDATE_FIELDS: &[&str] = &["_id", "email", "username", "createdAt"];

fn collection(store: &Store) -> Collection<User> {
    store.collection(USERS_COLLECTION)
}

/// Find a user by email
pub async fn find_one_by_email(
    store: &Store,
    email: &str,
) -> Result<Option<User>, mongodb::error::Error> {
    collection(store).find_one(doc! { "email": email }).await
}

/// Find a user by id
pub async fn find_one_by_id(
    store: &Store,
    id: ObjectId,
) -> Result<Option<User>, mongodb::error::Error> {
    collection(store).find_one(doc! { "_id": id }).await
}

/// Insert a new inactive account and return its id
///
/// # Arguments
///
/// * `email` - Account email (uniqueness is checked by the caller)
/// * `password_hash` - bcrypt hash of the chosen password
/// * `name` - Initial username and display name
/// * `verify_token` - One-time email verification token
pub async fn insert_one(
    store: &Store,
    email: &str,
    password_hash: &str,
    name: &str,
    verify_token: &str,
) -> Result<ObjectId, mongodb::error::Error> {
    let id = ObjectId::new();

    let document = doc! {
        "_id": id,
        "email": email,
        "password": password_hash,
        "username": name,
        "displayName": name,
        "avatar": Bson::Null,
        "role": UserRole::Client.as_str(),
        "isActive": false,
        "verifyToken": verify_token,
        "createdAt": Utc::now().timestamp_millis(),
        "updatedAt": Bson::Null,
        "_destroy": false,
    };

    store
        .collection::<Document>(USERS_COLLECTION)
        .insert_one(document)
        .await?;

    Ok(id)
}

/// Apply a `$set` update and return the updated user
///
/// Keys in [`INVALID_UPDATE_FIELDS`] are silently dropped from the
/// update so a crafted request cannot rewrite identity fields.
pub async fn update_one(
    store: &Store,
    user_id: ObjectId,
    update: Document,
) -> Result<Option<User>, mongodb::error::Error> {
    let mut fields = Document::new();
    for (key, value) in update {
        if !INVALID_UPDATE_FIELDS.contains(&key.as_str()) {
            fields.insert(key, value);
        }
    }

    collection(store)
        .find_one_and_update(doc! { "_id": user_id }, doc! { "$set": fields })
        .with_options(
            FindOneAndUpdateOptions::builder()
                .return_document(ReturnDocument::After)
                .build(),
        )
        .await
}
