use axum::{
    extract::{Path, Query, State},
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
        message::{CreateMessageDto, MessageDto, UpdateMessageDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::message::{CreateMessageParams, Message},
        service::message::MessageService,
        state::AppState,
    },
};

/// Tag for grouping contact form message endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MessageQuery {
    /// Only list messages that were not read yet
    #[serde(default)]
    pub unread: bool,
}

/// Send a message through the contact form.
///
/// Open to everyone. When the sender is logged in their account is attached to the
/// message.
///
/// # Returns
/// - `201 Created` - Message stored
/// - `422 Unprocessable Entity` - Missing fields or invalid email
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    request_body = CreateMessageDto,
    responses(
        (status = 201, description = "Message sent", body = MessageDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let sender = AuthGuard::new(&state.db, &session).optional().await?;

    let params = CreateMessageParams::from_dto(payload, sender.map(|user| user.id))?;
    let message = MessageService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// List received messages, newest first. Admin only.
#[utoipa::path(
    get,
    path = "/api/admin/messages",
    tag = MESSAGE_TAG,
    params(PaginationParams, MessageQuery),
    responses(
        (status = 200, description = "One page of messages", body = PaginatedDto<MessageDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParams>,
    Query(query): Query<MessageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let messages = MessageService::new(&state.db)
        .get_paginated(query.unread, pagination.page_request())
        .await?;

    Ok((StatusCode::OK, Json(messages.into_dto(Message::into_dto))))
}

/// Open a message, marking it as read. Admin only.
#[utoipa::path(
    get,
    path = "/api/admin/messages/{id}",
    tag = MESSAGE_TAG,
    params(("id" = i32, Path, description = "Message ID")),
    responses(
        (status = 200, description = "The message", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let message = MessageService::new(&state.db).open(id).await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/messages/{id}",
    tag = MESSAGE_TAG,
    params(("id" = i32, Path, description = "Message ID")),
    request_body = UpdateMessageDto,
    responses(
        (status = 200, description = "Read flag updated", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let message = MessageService::new(&state.db)
        .set_read(id, payload.is_read)
        .await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/messages/{id}",
    tag = MESSAGE_TAG,
    params(("id" = i32, Path, description = "Message ID")),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MessageService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
