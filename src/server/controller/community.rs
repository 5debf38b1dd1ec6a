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
        community::{CommunityDto, CommunityForm},
    },
    server::{
        controller::{PaginationParams, SearchParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::community::{Community, CommunityParams},
        service::community::CommunityService,
        state::AppState,
        util::form::MultipartForm,
    },
};

/// Tag for grouping community endpoints in OpenAPI documentation
pub static COMMUNITY_TAG: &str = "community";

/// List deaf communities by name.
#[utoipa::path(
    get,
    path = "/api/communities",
    tag = COMMUNITY_TAG,
    params(PaginationParams, SearchParams),
    responses(
        (status = 200, description = "One page of communities", body = PaginatedDto<CommunityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_communities(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(search): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let community = CommunityService::new(&state.db, &state.storage)
        .get_paginated(search.term(), pagination.page_request())
        .await?;

    Ok((StatusCode::OK, Json(community.into_dto(Community::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/communities/{id}",
    tag = COMMUNITY_TAG,
    params(("id" = i32, Path, description = "Community ID")),
    responses(
        (status = 200, description = "The community", body = CommunityDto),
        (status = 404, description = "Community not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_community(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let community = CommunityService::new(&state.db, &state.storage)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(community.into_dto())))
}

/// Add a community.
///
/// # Access Control
/// - `Admin` - Only admins can manage communities
///
/// # Returns
/// - `201 Created` - Article created
/// - `400 Bad Request` - Missing name or description, or malformed body
/// - `422 Unprocessable Entity` - Invalid field values
#[utoipa::path(
    post,
    path = "/api/communities",
    tag = COMMUNITY_TAG,
    request_body(content = CommunityForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Community created", body = CommunityDto),
        (status = 400, description = "Missing name or description", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_community(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::from_multipart(multipart).await?;
    let params = CommunityParams::from_form(form, true)?;

    let community = CommunityService::new(&state.db, &state.storage)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(community.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/communities/{id}",
    tag = COMMUNITY_TAG,
    params(("id" = i32, Path, description = "Community ID")),
    request_body(content = CommunityForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Community updated", body = CommunityDto),
        (status = 400, description = "Malformed multipart body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Community not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_community(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::from_multipart(multipart).await?;
    let params = CommunityParams::from_form(form, false)?;

    let community = CommunityService::new(&state.db, &state.storage)
        .update(id, params)
        .await?;

    Ok((StatusCode::OK, Json(community.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/communities/{id}",
    tag = COMMUNITY_TAG,
    params(("id" = i32, Path, description = "Community ID")),
    responses(
        (status = 204, description = "Community deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Community not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_community(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CommunityService::new(&state.db, &state.storage)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
