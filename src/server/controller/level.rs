use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto, ValidationErrorDto},
        level::{LevelDto, LevelForm},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::level::{LevelParams, LevelSummary},
        service::level::LevelService,
        state::AppState,
        util::form::MultipartForm,
    },
};

/// Tag for grouping quiz level endpoints in OpenAPI documentation
pub static LEVEL_TAG: &str = "level";

/// List quiz levels in play order.
///
/// Public. Use `/api/user/levels` for lock state and progress of the signed-in player.
#[utoipa::path(
    get,
    path = "/api/levels",
    tag = LEVEL_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of levels", body = PaginatedDto<LevelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_levels(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let levels = LevelService::new(&state.db, &state.storage)
        .get_paginated(pagination.page_request())
        .await?;

    Ok((StatusCode::OK, Json(levels.into_dto(LevelSummary::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/levels/{id}",
    tag = LEVEL_TAG,
    params(("id" = i32, Path, description = "Level ID")),
    responses(
        (status = 200, description = "The level with its question count", body = LevelDto),
        (status = 404, description = "Level not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_level(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let level = LevelService::new(&state.db, &state.storage)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(level.into_dto())))
}

/// Create a quiz level. Admin only.
#[utoipa::path(
    post,
    path = "/api/levels",
    tag = LEVEL_TAG,
    request_body(content = LevelForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Level created", body = LevelDto),
        (status = 400, description = "Malformed multipart body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_level(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::from_multipart(multipart).await?;
    let params = LevelParams::from_form(form, true)?;

    let level = LevelService::new(&state.db, &state.storage)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(level.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/levels/{id}",
    tag = LEVEL_TAG,
    params(("id" = i32, Path, description = "Level ID")),
    request_body(content = LevelForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Level updated", body = LevelDto),
        (status = 400, description = "Malformed multipart body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Level not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_level(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::from_multipart(multipart).await?;
    let params = LevelParams::from_form(form, false)?;

    let level = LevelService::new(&state.db, &state.storage)
        .update(id, params)
        .await?;

    Ok((StatusCode::OK, Json(level.into_dto())))
}

/// Delete a level with its questions, answers, progress and images.
#[utoipa::path(
    delete,
    path = "/api/levels/{id}",
    tag = LEVEL_TAG,
    params(("id" = i32, Path, description = "Level ID")),
    responses(
        (status = 204, description = "Level deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Level not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_level(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    LevelService::new(&state.db, &state.storage)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
