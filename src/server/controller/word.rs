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
        word::{WordDto, WordForm},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::word::{CreateWordParams, UpdateWordParams, Word, WordFilter},
        service::word::WordService,
        state::AppState,
        util::form::MultipartForm,
    },
};

/// Tag for grouping dictionary word endpoints in OpenAPI documentation
pub static WORD_TAG: &str = "word";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WordQuery {
    /// Substring to look for anywhere in the word
    pub search: Option<String>,
    /// Only words starting with this letter
    pub letter: Option<String>,
}

impl WordQuery {
    fn into_filter(self) -> WordFilter {
        WordFilter {
            search: self
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            letter: self.letter.and_then(|l| l.trim().chars().next()),
        }
    }
}

/// List dictionary words.
///
/// Public. Words are ordered alphabetically and can be narrowed down by search text
/// and by first letter.
#[utoipa::path(
    get,
    path = "/api/words",
    tag = WORD_TAG,
    params(PaginationParams, WordQuery),
    responses(
        (status = 200, description = "One page of words", body = PaginatedDto<WordDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_words(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(query): Query<WordQuery>,
) -> Result<impl IntoResponse, AppError> {
    let words = WordService::new(&state.db, &state.storage)
        .get_paginated(&query.into_filter(), pagination.page_request())
        .await?;

    Ok((StatusCode::OK, Json(words.into_dto(Word::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/words/{id}",
    tag = WORD_TAG,
    params(("id" = i32, Path, description = "Word ID")),
    responses(
        (status = 200, description = "The word", body = WordDto),
        (status = 404, description = "Word not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_word(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let word = WordService::new(&state.db, &state.storage)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(word.into_dto())))
}

/// Create a dictionary word with its sign image. Admin only.
#[utoipa::path(
    post,
    path = "/api/words",
    tag = WORD_TAG,
    request_body(content = WordForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Word created", body = WordDto),
        (status = 400, description = "Malformed multipart body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_word(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::from_multipart(multipart).await?;
    let params = CreateWordParams::from_form(form)?;

    let word = WordService::new(&state.db, &state.storage)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(word.into_dto())))
}

/// Update a dictionary word. Admin only.
///
/// A blank `description` clears it.
#[utoipa::path(
    put,
    path = "/api/words/{id}",
    tag = WORD_TAG,
    params(("id" = i32, Path, description = "Word ID")),
    request_body(content = WordForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Word updated", body = WordDto),
        (status = 400, description = "Malformed multipart body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Word not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_word(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::from_multipart(multipart).await?;
    let params = UpdateWordParams::from_form(form)?;

    let word = WordService::new(&state.db, &state.storage)
        .update(id, params)
        .await?;

    Ok((StatusCode::OK, Json(word.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/words/{id}",
    tag = WORD_TAG,
    params(("id" = i32, Path, description = "Word ID")),
    responses(
        (status = 204, description = "Word deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Word not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_word(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    WordService::new(&state.db, &state.storage)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
