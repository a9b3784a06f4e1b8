//! Local client implementing the `UsersApi` trait.

use std::sync::Arc;

use async_trait::async_trait;
use users_sdk::{NewUser, User, UserPatch, UsersApi, UsersError};
use uuid::Uuid;

use crate::domain::service::Service;

/// In-process client for the users module.
///
/// Delegates to the domain service and maps domain errors to [`UsersError`].
pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersApi for LocalClient {
    async fn get_user(&self, id: Uuid) -> Result<User, UsersError> {
        self.service.get_user(id).await.map_err(Into::into)
    }

    async fn list_users(&self) -> Result<Vec<User>, UsersError> {
        self.service.list_users().await.map_err(Into::into)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, UsersError> {
        self.service.create_user(new_user).await.map_err(Into::into)
    }

    async fn patch_user(&self, id: Uuid, patch: UserPatch) -> Result<User, UsersError> {
        self.service.patch_user(id, patch).await.map_err(Into::into)
    }
}
