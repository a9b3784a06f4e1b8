use std::sync::Arc;

use patch_field::{ApplyPatch, PatchField};
use users_sdk::models::{NewUser, User, UserPatch};
use uuid::Uuid;

use super::error::DomainError;
use super::fields::UserFields;
use super::repo::UsersRepository;

pub struct ServiceConfig {
    pub max_field_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_field_length: 255,
        }
    }
}

pub struct Service {
    repo: Arc<dyn UsersRepository>,
    config: ServiceConfig,
}

impl Service {
    #[must_use]
    pub fn new(repo: Arc<dyn UsersRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    /// # Errors
    /// `NotFound` if no user has `id`.
    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    /// # Errors
    /// `Repository` if storage fails.
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.repo.list().await?)
    }

    /// # Errors
    /// `Validation` if the trimmed name is blank, the email is implausible or either
    /// exceeds `max_field_length`.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        let new_user = NewUser {
            name: new_user.name.trim().to_owned(),
            email: new_user.email.trim().to_owned(),
        };
        self.validate_name(PatchField::value(new_user.name.as_str()))?;
        self.validate_email(PatchField::value(new_user.email.as_str()))?;

        let user = self.repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Applies the provided fields of `patch` to the stored user.
    ///
    /// Absent fields are left untouched and provided `null`s clear the field.
    /// Only provided non-null values are validated.
    ///
    /// # Errors
    /// `Validation` before any lookup if a provided value is invalid, then
    /// `NotFound` if no user has `id`.
    pub async fn patch_user(&self, id: Uuid, patch: UserPatch) -> Result<User, DomainError> {
        let patch = UserPatch {
            name: self.validate_name(patch.name.map_value(|name| name.trim().to_owned()))?,
            email: self.validate_email(patch.email.map_value(|email| email.trim().to_owned()))?,
        };

        if patch.is_empty() {
            tracing::debug!(user_id = %id, "Empty patch, returning stored user");
            return self.get_user(id).await;
        }

        tracing::debug!(
            user_id = %id,
            name_provided = patch.name.is_provided(),
            email_provided = patch.email.is_provided(),
            "Applying user patch"
        );

        let user = self
            .repo
            .update_with(id, patch)
            .await?
            .ok_or(DomainError::NotFound { id })?;
        tracing::info!(user_id = %id, "User patched");
        Ok(user)
    }

    fn validate_name<S: AsRef<str>>(
        &self,
        name: PatchField<S>,
    ) -> Result<PatchField<S>, DomainError> {
        name.if_provided_validate_with(
            |name| name.is_none_or(|n| !n.as_ref().is_empty()),
            || {
                tracing::warn!(field = UserFields::NAME, "Rejected blank name");
                DomainError::validation(UserFields::NAME, "must not be blank")
            },
        )
        .and_then(|name| self.validate_length(UserFields::NAME, name))
    }

    fn validate_email<S: AsRef<str>>(
        &self,
        email: PatchField<S>,
    ) -> Result<PatchField<S>, DomainError> {
        email
            .if_provided_validate_with(
                |email| email.is_none_or(|e| is_plausible_email(e.as_ref())),
                || {
                    tracing::warn!(field = UserFields::EMAIL, "Rejected malformed email");
                    DomainError::validation(UserFields::EMAIL, "must be a valid email address")
                },
            )
            .and_then(|email| self.validate_length(UserFields::EMAIL, email))
    }

    fn validate_length<S: AsRef<str>>(
        &self,
        field: &str,
        value: PatchField<S>,
    ) -> Result<PatchField<S>, DomainError> {
        let max = self.config.max_field_length;
        value.if_provided_validate_with(
            |value| value.is_none_or(|v| v.as_ref().len() <= max),
            || {
                tracing::warn!(field, max, "Rejected over-long field");
                DomainError::validation(field, format!("exceeds maximum length of {max}"))
            },
        )
    }
}

fn is_plausible_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
}
