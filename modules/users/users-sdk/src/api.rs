//! `UsersApi` trait definition.
//!
//! This trait defines the public API for the users module.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::UsersError;
use crate::models::{NewUser, User, UserPatch};

/// Public API trait for the users module.
///
/// Other crates consume it as `Arc<dyn UsersApi>`, typically obtained from the
/// module's `LocalClient`.
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Get a user by id.
    async fn get_user(&self, id: Uuid) -> Result<User, UsersError>;

    /// List all users.
    async fn list_users(&self) -> Result<Vec<User>, UsersError>;

    /// Create a user (POST semantics).
    async fn create_user(&self, new_user: NewUser) -> Result<User, UsersError>;

    /// Partially update a user (PATCH semantics).
    /// Only provided fields are written; a provided `null` clears the field.
    async fn patch_user(&self, id: Uuid, patch: UserPatch) -> Result<User, UsersError>;
}
