use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Extension, Path};
use axum::http::Uri;
use uuid::Uuid;

use crate::domain::service::Service;

use super::dto::{CreateUserRequest, PatchUserRequest, UserDto};
use super::error::{ApiResult, Problem, domain_error_to_problem};

#[utoipa::path(
    get,
    path = "/users/v1/users",
    tag = "Users",
    operation_id = "users.list_users",
    responses(
        (status = 200, description = "Users listed", body = [UserDto]),
        (status = 500, description = "Internal error", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn list_users(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
) -> ApiResult<Json<Vec<UserDto>>> {
    let users = svc
        .list_users()
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/users/v1/users/{id}",
    tag = "Users",
    operation_id = "users.get_user",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User retrieved", body = UserDto),
        (status = 404, description = "User not found", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn get_user(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<UserDto>> {
    let Path(id) = id.map_err(|r| Problem::from(r).with_instance(uri.path()))?;
    let user = svc
        .get_user(id)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    post,
    path = "/users/v1/users",
    tag = "Users",
    operation_id = "users.create_user",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserDto),
        (status = 400, description = "Malformed body", body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "Validation failed", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn create_user(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    req: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let Json(req) = req.map_err(|r| Problem::from(r).with_instance(uri.path()))?;
    let user = svc
        .create_user(req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(user.into()))
}

/// Partially update a user.
///
/// Keys missing from the body keep their stored value; keys sent as `null`
/// are cleared.
#[utoipa::path(
    patch,
    path = "/users/v1/users/{id}",
    tag = "Users",
    operation_id = "users.patch_user",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = PatchUserRequest,
    responses(
        (status = 200, description = "User patched", body = UserDto),
        (status = 400, description = "Malformed body", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "User not found", body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "Validation failed", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn patch_user(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    id: Result<Path<Uuid>, PathRejection>,
    req: Result<Json<PatchUserRequest>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let Path(id) = id.map_err(|r| Problem::from(r).with_instance(uri.path()))?;
    let Json(req) = req.map_err(|r| Problem::from(r).with_instance(uri.path()))?;
    let user = svc
        .patch_user(id, req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(user.into()))
}
