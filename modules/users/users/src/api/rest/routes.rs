use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Json, Router};
use utoipa::OpenApi;

use crate::api::rest::{dto, error, handlers};
use crate::domain::service::Service;

#[derive(OpenApi)]
#[openapi(
    info(title = "Users API", description = "Create, read and partially update users"),
    paths(
        handlers::list_users,
        handlers::get_user,
        handlers::create_user,
        handlers::patch_user,
    ),
    components(schemas(
        dto::UserDto,
        dto::CreateUserRequest,
        dto::PatchUserRequest,
        error::Problem,
    )),
    tags((name = "Users", description = "User management"))
)]
pub struct UsersApiDoc;

pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        // GET /users/v1/users - List users
        // POST /users/v1/users - Create a user
        .route(
            "/users/v1/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        // GET /users/v1/users/{id} - Get a user
        // PATCH /users/v1/users/{id} - Partially update a user
        .route(
            "/users/v1/users/{id}",
            get(handlers::get_user).patch(handlers::patch_user),
        )
        .route(
            "/users/v1/openapi.json",
            get(|| async { Json(UsersApiDoc::openapi()) }),
        )
        .layer(Extension(service))
}
