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
        letter::{LetterDto, LetterForm},
    },
    server::{
        controller::{PaginationParams, SearchParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::letter::{CreateLetterParams, Letter, UpdateLetterParams},
        service::letter::LetterService,
        state::AppState,
        util::form::MultipartForm,
    },
};

/// Tag for grouping dictionary letter endpoints in OpenAPI documentation
pub static LETTER_TAG: &str = "letter";

/// List dictionary letters.
///
/// Public. Letters are ordered alphabetically.
///
/// # Returns
/// - `200 OK` - One page of letters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/letters",
    tag = LETTER_TAG,
    params(PaginationParams, SearchParams),
    responses(
        (status = 200, description = "One page of letters", body = PaginatedDto<LetterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_letters(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(search): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let letters = LetterService::new(&state.db, &state.storage)
        .get_paginated(search.term(), pagination.page_request())
        .await?;

    Ok((StatusCode::OK, Json(letters.into_dto(Letter::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/letters/{id}",
    tag = LETTER_TAG,
    params(("id" = i32, Path, description = "Letter ID")),
    responses(
        (status = 200, description = "The letter", body = LetterDto),
        (status = 404, description = "Letter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_letter(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let letter = LetterService::new(&state.db, &state.storage)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(letter.into_dto())))
}

/// Create a dictionary letter.
///
/// Takes the `letter` and a required `image` as multipart form data. The letter is
/// upper-cased and must be a single alphabetic character not stored yet.
///
/// # Access Control
/// - `Admin` - Only admins can manage the dictionary
///
/// # Returns
/// - `201 Created` - Letter created
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in or not an admin
/// - `422 Unprocessable Entity` - Invalid letter or image, or letter already stored
#[utoipa::path(
    post,
    path = "/api/letters",
    tag = LETTER_TAG,
    request_body(content = LetterForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Letter created", body = LetterDto),
        (status = 400, description = "Malformed multipart body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_letter(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::from_multipart(multipart).await?;
    let params = CreateLetterParams::from_form(form)?;

    let letter = LetterService::new(&state.db, &state.storage)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(letter.into_dto())))
}

/// Update a dictionary letter.
///
/// Both `letter` and `image` are optional; a new image replaces and deletes the old one.
#[utoipa::path(
    put,
    path = "/api/letters/{id}",
    tag = LETTER_TAG,
    params(("id" = i32, Path, description = "Letter ID")),
    request_body(content = LetterForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Letter updated", body = LetterDto),
        (status = 400, description = "Malformed multipart body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Letter not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_letter(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::from_multipart(multipart).await?;
    let params = UpdateLetterParams::from_form(form)?;

    let letter = LetterService::new(&state.db, &state.storage)
        .update(id, params)
        .await?;

    Ok((StatusCode::OK, Json(letter.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/letters/{id}",
    tag = LETTER_TAG,
    params(("id" = i32, Path, description = "Letter ID")),
    responses(
        (status = 204, description = "Letter deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Letter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_letter(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    LetterService::new(&state.db, &state.storage)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
