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
        news::{NewsDto, NewsForm},
    },
    server::{
        controller::{PaginationParams, SearchParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::news::{News, NewsParams},
        service::news::NewsService,
        state::AppState,
        util::form::MultipartForm,
    },
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

/// List news articles, newest first.
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    params(PaginationParams, SearchParams),
    responses(
        (status = 200, description = "One page of news", body = PaginatedDto<NewsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news_list(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(search): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let news = NewsService::new(&state.db, &state.storage)
        .get_paginated(search.term(), pagination.page_request())
        .await?;

    Ok((StatusCode::OK, Json(news.into_dto(News::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News ID")),
    responses(
        (status = 200, description = "The article", body = NewsDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let news = NewsService::new(&state.db, &state.storage)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(news.into_dto())))
}

/// Publish a news article.
///
/// # Access Control
/// - `Admin` - Only admins can publish news
///
/// # Returns
/// - `201 Created` - Article created
/// - `400 Bad Request` - Missing title or content, or malformed body
/// - `422 Unprocessable Entity` - Invalid field values
#[utoipa::path(
    post,
    path = "/api/news",
    tag = NEWS_TAG,
    request_body(content = NewsForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "News created", body = NewsDto),
        (status = 400, description = "Missing title or content", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_news(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::from_multipart(multipart).await?;
    let params = NewsParams::from_form(form, true)?;

    let news = NewsService::new(&state.db, &state.storage)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(news.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News ID")),
    request_body(content = NewsForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "News updated", body = NewsDto),
        (status = 400, description = "Malformed multipart body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_news(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::from_multipart(multipart).await?;
    let params = NewsParams::from_form(form, false)?;

    let news = NewsService::new(&state.db, &state.storage)
        .update(id, params)
        .await?;

    Ok((StatusCode::OK, Json(news.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "News ID")),
    responses(
        (status = 204, description = "News deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_news(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    NewsService::new(&state.db, &state.storage)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
