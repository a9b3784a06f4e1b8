use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use patch_field::ApplyPatch;
use users_sdk::models::{NewUser, User, UserPatch};
use uuid::Uuid;

use crate::domain::repo::UsersRepository;

/// Process-local user storage.
///
/// Patches are applied under the write lock, so concurrent patches of the same
/// user never interleave field writes.
#[derive(Default)]
pub struct InMemoryUsersRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUsersRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.users.read().get(&id).cloned())
    }

    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let mut users: Vec<User> = self.users.read().values().cloned().collect();
        users.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(users)
    }

    async fn insert(&self, new_user: NewUser) -> anyhow::Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            name: Some(new_user.name),
            email: Some(new_user.email),
        };
        self.users.write().insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_with(&self, id: Uuid, patch: UserPatch) -> anyhow::Result<Option<User>> {
        let mut users = self.users.write();
        let Some(user) = users.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply_to(user);
        Ok(Some(user.clone()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_owned(),
            email: email.to_owned(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let repo = InMemoryUsersRepository::new();

        let created = repo
            .insert(new_user("John Doe", "johndoe@example.com"))
            .await
            .unwrap();
        let found = repo.find_by_id(created.id).await.unwrap();

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_unknown_returns_none() {
        let repo = InMemoryUsersRepository::new();
        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_is_sorted_by_name() {
        let repo = InMemoryUsersRepository::new();
        repo.insert(new_user("Zoe", "zoe@example.com")).await.unwrap();
        repo.insert(new_user("Adam", "adam@example.com")).await.unwrap();

        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();

        assert_eq!(names, vec![Some("Adam".to_owned()), Some("Zoe".to_owned())]);
    }

    #[tokio::test]
    async fn test_update_with_applies_patch_in_place() {
        let repo = InMemoryUsersRepository::new();
        let created = repo
            .insert(new_user("Original Name", "original@example.com"))
            .await
            .unwrap();

        let patch = UserPatch::default().with_email(None);
        let updated = repo.update_with(created.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.name.as_deref(), Some("Original Name"));
        assert_eq!(updated.email, None);
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_with_unknown_id_returns_none() {
        let repo = InMemoryUsersRepository::new();
        let patch = UserPatch::default().with_name(Some("Nobody".to_owned()));

        assert_eq!(repo.update_with(Uuid::new_v4(), patch).await.unwrap(), None);
    }
}
