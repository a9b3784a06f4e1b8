use patch_field::PatchField;
use serde::{Deserialize, Serialize};
use users_sdk::models::{NewUser, User, UserPatch};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct UserDto {
    #[schema(value_type = String)]
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
        }
    }
}

/// PATCH body: omit a key to keep the stored value, send `null` to clear it.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct PatchUserRequest {
    #[serde(default, skip_serializing_if = "PatchField::is_not_provided")]
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_not_provided")]
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,
}

impl From<PatchUserRequest> for UserPatch {
    fn from(req: PatchUserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
        }
    }
}
