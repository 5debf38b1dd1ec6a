use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto, ValidationErrorDto},
        user::{UserDto, UserForm},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateUserParams, Role, UpdateUserParams, User},
        service::user::UserService,
        state::AppState,
        util::form::MultipartForm,
    },
};

/// Tag for grouping user management endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// Case-insensitive substring of the name or email
    pub search: Option<String>,
    /// Only accounts with this role (`admin` or `user`)
    pub role: Option<String>,
}

impl UserQuery {
    fn search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    fn role(&self) -> Result<Option<Role>, AppError> {
        match self.role.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            None => Ok(None),
            Some(role) => Role::parse(role)
                .map(Some)
                .ok_or_else(|| AppError::invalid("role", "The selected role is invalid.")),
        }
    }
}

/// List user accounts.
///
/// # Access Control
/// - `Admin` - Only admins can list accounts
///
/// # Returns
/// - `200 OK` - One page of accounts ordered by name
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in or not an admin
/// - `422 Unprocessable Entity` - Unknown role filter
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    params(PaginationParams, UserQuery),
    responses(
        (status = 200, description = "One page of users", body = PaginatedDto<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Unknown role", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParams>,
    Query(query): Query<UserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db, &state.storage)
        .get_paginated(query.search(), query.role()?, pagination.page_request())
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto(User::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/admin/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The account", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db, &state.storage)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Create an account with an explicit role.
///
/// Takes `name`, `email`, `password`, `role` and an optional `image` as multipart form data.
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = USER_TAG,
    request_body(content = UserForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Malformed multipart body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::from_multipart(multipart).await?;
    let params = CreateUserParams::from_form(form)?;

    let user = UserService::new(&state.db, &state.storage)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Update an account.
///
/// Every field is optional. A non-empty `password` replaces the stored hash.
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body(content = UserForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Malformed multipart body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::from_multipart(multipart).await?;
    let params = UpdateUserParams::from_form(form)?;

    let user = UserService::new(&state.db, &state.storage)
        .update(id, params)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete an account together with its answers and progress.
///
/// Admins cannot delete their own account.
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 422, description = "Tried to delete own account", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db, &state.storage)
        .delete(admin.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
