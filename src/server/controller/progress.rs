use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, level::UserLevelDto, progress::ProgressDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{level::UserLevel, progress::UserProgress},
        service::quiz::QuizService,
        state::AppState,
    },
};

/// Tag for grouping player progress endpoints in OpenAPI documentation
pub static PROGRESS_TAG: &str = "progress";

/// Get the current user's progress on a level.
///
/// Returns a zeroed `in_progress` record when the level was never played.
#[utoipa::path(
    get,
    path = "/api/levels/{level_id}/progress",
    tag = PROGRESS_TAG,
    params(("level_id" = i32, Path, description = "Level ID")),
    responses(
        (status = 200, description = "Progress on the level", body = ProgressDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Level not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_level_progress(
    State(state): State<AppState>,
    session: Session,
    Path(level_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let progress = QuizService::new(&state.db)
        .get_progress(user.id, level_id)
        .await?;

    Ok((StatusCode::OK, Json(progress.into_dto())))
}

/// Reset the current user's answers and progress on a level so it can be replayed.
#[utoipa::path(
    delete,
    path = "/api/levels/{level_id}/progress",
    tag = PROGRESS_TAG,
    params(("level_id" = i32, Path, description = "Level ID")),
    responses(
        (status = 204, description = "Progress reset"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Level not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_level_progress(
    State(state): State<AppState>,
    session: Session,
    Path(level_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    QuizService::new(&state.db)
        .reset_progress(user.id, level_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List every level with the current user's lock state, status and score.
///
/// # Returns
/// - `200 OK` - Levels in play order
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/user/levels",
    tag = PROGRESS_TAG,
    responses(
        (status = 200, description = "Levels with lock state", body = Vec<UserLevelDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_levels(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let levels: Vec<UserLevelDto> = QuizService::new(&state.db)
        .levels_for_user(&user)
        .await?
        .into_iter()
        .map(UserLevel::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(levels)))
}

#[utoipa::path(
    get,
    path = "/api/user/progress",
    tag = PROGRESS_TAG,
    responses(
        (status = 200, description = "Progress on every played level", body = Vec<ProgressDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_progress(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let progress: Vec<ProgressDto> = QuizService::new(&state.db)
        .list_progress(user.id)
        .await?
        .into_iter()
        .map(UserProgress::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(progress)))
}
