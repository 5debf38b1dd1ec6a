use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{admin::StatsDto, api::ErrorDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::admin::AdminService,
        state::AppState,
    },
};

/// Tag for grouping admin dashboard endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Get record counts for the admin dashboard.
///
/// # Access Control
/// - `Admin` - Only admins can view dashboard statistics
///
/// # Returns
/// - `200 OK` - Counts of every resource and of unread messages
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in or not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = StatsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let stats = AdminService::new(&state.db).stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
