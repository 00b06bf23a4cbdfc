use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    error::AppError,
    extract::ValidatedJson,
    state::AppState,
    users::{
        dto::{CreateUserRequest, DeletedUserResponse, UpdateUserRequest},
        repo_types::PublicUser,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "The user has been successfully created.", body = PublicUser),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 409, description = "Email already exists", body = ErrorBody),
    )
)]
#[instrument(skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<PublicUser>), AppError> {
    let user = state.users.create(body).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses((status = 200, description = "Return all users", body = [PublicUser]))
)]
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicUser>>, AppError> {
    Ok(Json(state.users.find_all().await?))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "The ID of the user to retrieve")),
    responses(
        (status = 200, description = "Return the user", body = PublicUser),
        (status = 404, description = "User not found", body = ErrorBody),
    )
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PublicUser>, AppError> {
    Ok(Json(state.users.find_one(&id).await?))
}

/// Update a user
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "The ID of the user to update")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "The user has been successfully updated.", body = PublicUser),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 409, description = "Email already exists", body = ErrorBody),
    )
)]
#[instrument(skip(state, body))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<PublicUser>, AppError> {
    Ok(Json(state.users.update(&id, body).await?))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "The ID of the user to delete")),
    responses(
        (status = 200, description = "The user has been successfully deleted.", body = DeletedUserResponse),
        (status = 404, description = "User not found", body = ErrorBody),
    )
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedUserResponse>, AppError> {
    Ok(Json(state.users.remove(&id).await?))
}
