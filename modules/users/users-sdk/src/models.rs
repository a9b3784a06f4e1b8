//! Public models for the users module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the users module and its consumers.

use patch_field::{ApplyPatch, PatchField};
use uuid::Uuid;

/// User entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Data for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Partial update data for a user.
///
/// Each field is tri-state: absent fields leave the stored value untouched,
/// provided `null`s clear it, provided values replace it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPatch {
    pub name: PatchField<String>,
    pub email: PatchField<String>,
}

impl UserPatch {
    #[must_use]
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = PatchField::of(name);
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = PatchField::of(email);
        self
    }
}

impl ApplyPatch<User> for UserPatch {
    fn apply_to(self, user: &mut User) {
        self.name.if_provided(|name| user.name = name);
        self.email.if_provided(|email| user.email = email);
    }

    fn is_empty(&self) -> bool {
        self.name.is_not_provided() && self.email.is_not_provided()
    }
}
