use async_trait::async_trait;
use users_sdk::models::{NewUser, User, UserPatch};
use uuid::Uuid;

#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;

    async fn list(&self) -> anyhow::Result<Vec<User>>;

    async fn insert(&self, new_user: NewUser) -> anyhow::Result<User>;

    /// Applies `patch` to the stored user as one read-modify-write.
    /// Returns `None` if there is no user with `id`.
    async fn update_with(&self, id: Uuid, patch: UserPatch) -> anyhow::Result<Option<User>>;
}
