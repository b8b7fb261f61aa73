//! HTTP handlers for Users API
//!
//! Two routers share one service:
//! - [`router`]: the `/users` collection
//! - [`admin_check_router`]: the per-caller admin check, mounted under `/user`

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, patch},
};
use axum_helpers::{
    Identity, JsonBody, ObjectIdPath,
    errors::responses::{
        BadRequestObjectIdResponse, BadRequestResponse, ForbiddenResponse,
        InternalServerErrorResponse, UnauthorizedResponse,
    },
};
use database::mongodb::{DeleteAck, InsertAck, UpdateAck};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{AdminStatus, CreateUserOutcome, NewUser, User, UserAlreadyExists};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the `/users` collection
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, set_admin, delete_user),
    components(
        schemas(User, NewUser, CreateUserOutcome, UserAlreadyExists, InsertAck, UpdateAck, DeleteAck),
        responses(
            BadRequestObjectIdResponse,
            BadRequestResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Users", description = "User accounts and roles")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for the admin check
#[derive(OpenApi)]
#[openapi(
    paths(check_admin),
    components(
        schemas(AdminStatus),
        responses(UnauthorizedResponse, ForbiddenResponse, InternalServerErrorResponse)
    )
)]
pub struct AdminCheckApiDoc;

/// Create the users collection router
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", delete(delete_user))
        .route("/admin/{id}", patch(set_admin))
        .with_state(shared_service)
}

/// Create the admin check router
pub fn admin_check_router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/admin/{email}", get(check_admin))
        .with_state(shared_service)
}

/// List every user
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Register a user; a taken email yields a soft `user already exists` response
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 200, description = "Inserted, or already present", body = CreateUserOutcome),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    JsonBody(input): JsonBody<NewUser>,
) -> UserResult<Json<CreateUserOutcome>> {
    match service.create_user(input).await {
        Ok(ack) => Ok(Json(CreateUserOutcome::Created(ack))),
        Err(UserError::AlreadyExists(email)) => {
            tracing::info!(%email, "User already exists");
            Ok(Json(CreateUserOutcome::AlreadyExists(
                UserAlreadyExists::default(),
            )))
        }
        Err(e) => Err(e),
    }
}

/// Grant the admin role (admin capability required)
#[utoipa::path(
    patch,
    path = "/admin/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (24-char hex)")
    ),
    responses(
        (status = 200, description = "Update acknowledgment", body = UpdateAck),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn set_admin<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    identity: Identity,
    ObjectIdPath(id): ObjectIdPath,
) -> UserResult<Json<UpdateAck>> {
    let ack = service.set_admin(&identity, id).await?;
    Ok(Json(ack))
}

/// Delete a user (admin capability required)
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID (24-char hex)")
    ),
    responses(
        (status = 200, description = "Delete acknowledgment", body = DeleteAck),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    identity: Identity,
    ObjectIdPath(id): ObjectIdPath,
) -> UserResult<Json<DeleteAck>> {
    let ack = service.delete_user(&identity, id).await?;
    Ok(Json(ack))
}

/// Whether the caller is an admin; callers may only ask about their own email
#[utoipa::path(
    get,
    path = "/admin/{email}",
    tag = "Users",
    params(
        ("email" = String, Path, description = "The caller's own email")
    ),
    responses(
        (status = 200, description = "Admin status", body = AdminStatus),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
async fn check_admin<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    identity: Identity,
    Path(email): Path<String>,
) -> UserResult<Json<AdminStatus>> {
    let admin = service.is_admin(&identity, &email).await?;
    Ok(Json(AdminStatus { admin }))
}
