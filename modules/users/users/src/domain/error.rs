use users_sdk::errors::UsersError;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("User not found: {id}")]
    NotFound { id: Uuid },

    #[error("Validation error on field '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Repository error: {0}")]
    Repository(#[from] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<DomainError> for UsersError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { id } => Self::not_found(id),
            DomainError::Validation { field, message } => {
                Self::validation(format!("{field}: {message}"))
            }
            DomainError::Repository(_) => Self::internal(),
        }
    }
}
