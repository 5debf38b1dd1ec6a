use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto, ValidationErrorDto},
        contact::{ContactDto, ContactPayloadDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::contact::{Contact, ContactParams},
        service::contact::ContactService,
        state::AppState,
    },
};

/// Tag for grouping contact channel endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

/// List the organisation's contact channels.
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = CONTACT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of contacts", body = PaginatedDto<ContactDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contacts(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let contacts = ContactService::new(&state.db)
        .get_paginated(pagination.page_request())
        .await?;

    Ok((StatusCode::OK, Json(contacts.into_dto(Contact::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "The contact", body = ContactDto),
        (status = 404, description = "Contact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let contact = ContactService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(contact.into_dto())))
}

/// Add a contact channel.
///
/// # Access Control
/// - `Admin` - Only admins can manage contact channels
///
/// # Returns
/// - `201 Created` - Contact created
/// - `422 Unprocessable Entity` - Missing platform or value, or invalid url
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = CONTACT_TAG,
    request_body = ContactPayloadDto,
    responses(
        (status = 201, description = "Contact created", body = ContactDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_contact(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ContactPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = ContactParams::from_dto(payload)?;
    let contact = ContactService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(contact.into_dto())))
}

/// Replace a contact channel.
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Contact ID")),
    request_body = ContactPayloadDto,
    responses(
        (status = 200, description = "Contact updated", body = ContactDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Contact not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_contact(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ContactPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = ContactParams::from_dto(payload)?;
    let contact = ContactService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(contact.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 204, description = "Contact deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Contact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ContactService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
