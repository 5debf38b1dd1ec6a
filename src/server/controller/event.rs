use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto, ValidationErrorDto},
        event::{EventDto, EventForm},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::event::{Event, EventFilter, EventParams},
        service::event::EventService,
        state::AppState,
        util::form::MultipartForm,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventQuery {
    /// Case-insensitive substring of the title or location
    pub search: Option<String>,
    /// Only list events that have not taken place yet
    #[serde(default)]
    pub upcoming: bool,
}

impl EventQuery {
    fn into_filter(self) -> EventFilter {
        EventFilter {
            search: self
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            from: self.upcoming.then(Utc::now),
        }
    }
}

/// List events ordered by date.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(PaginationParams, EventQuery),
    responses(
        (status = 200, description = "One page of events", body = PaginatedDto<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(query): Query<EventQuery>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db, &state.storage)
        .get_paginated(&query.into_filter(), pagination.page_request())
        .await?;

    Ok((StatusCode::OK, Json(events.into_dto(Event::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "The event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db, &state.storage)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Create an event. Admin only.
///
/// `event_date` accepts RFC 3339, `YYYY-MM-DD HH:MM` (UTC) or a plain `YYYY-MM-DD` date.
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body(content = EventForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Malformed multipart body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::from_multipart(multipart).await?;
    let params = EventParams::from_form(form, true)?;

    let event = EventService::new(&state.db, &state.storage)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body(content = EventForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Malformed multipart body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::from_multipart(multipart).await?;
    let params = EventParams::from_form(form, false)?;

    let event = EventService::new(&state.db, &state.storage)
        .update(id, params)
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    EventService::new(&state.db, &state.storage)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
