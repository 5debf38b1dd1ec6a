use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        question::{AnswerResultDto, QuestionDto, QuestionForm, SubmitAnswerDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::question::{CreateQuestionParams, UpdateQuestionParams},
        service::{question::QuestionService, quiz::QuizService},
        state::AppState,
        util::form::MultipartForm,
    },
};

/// Tag for grouping quiz question endpoints in OpenAPI documentation
pub static QUESTION_TAG: &str = "question";

/// List the questions of a level.
///
/// Players only see questions of levels they have unlocked, and never see the correct
/// option. Admins see every level with answers revealed.
///
/// # Access Control
/// - `User` - Any logged in user, subject to level gating
///
/// # Returns
/// - `200 OK` - Questions ordered by id
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Previous level not completed yet
/// - `404 Not Found` - Level does not exist
#[utoipa::path(
    get,
    path = "/api/levels/{level_id}/questions",
    tag = QUESTION_TAG,
    params(("level_id" = i32, Path, description = "Level ID")),
    responses(
        (status = 200, description = "Questions of the level", body = Vec<QuestionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Level locked", body = ErrorDto),
        (status = 404, description = "Level not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_questions(
    State(state): State<AppState>,
    session: Session,
    Path(level_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let questions = QuestionService::new(&state.db, &state.storage)
        .get_by_level(level_id)
        .await?;
    QuizService::new(&state.db)
        .ensure_unlocked(&user, level_id)
        .await?;

    let reveal = user.is_admin();
    let questions: Vec<QuestionDto> = questions
        .into_iter()
        .map(|question| question.into_dto(reveal))
        .collect();

    Ok((StatusCode::OK, Json(questions)))
}

#[utoipa::path(
    get,
    path = "/api/levels/{level_id}/questions/{id}",
    tag = QUESTION_TAG,
    params(
        ("level_id" = i32, Path, description = "Level ID"),
        ("id" = i32, Path, description = "Question ordinal within the level")
    ),
    responses(
        (status = 200, description = "The question", body = QuestionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Level locked", body = ErrorDto),
        (status = 404, description = "Level or question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_question(
    State(state): State<AppState>,
    session: Session,
    Path((level_id, id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let question = QuestionService::new(&state.db, &state.storage)
        .get(level_id, id)
        .await?;
    QuizService::new(&state.db)
        .ensure_unlocked(&user, level_id)
        .await?;

    Ok((StatusCode::OK, Json(question.into_dto(user.is_admin()))))
}

/// Add a question to a level. Admin only.
///
/// `options` may be repeated or sent once as a JSON array; `correct_option` must be one
/// of them. Without an explicit `id` the next free ordinal of the level is used.
#[utoipa::path(
    post,
    path = "/api/levels/{level_id}/questions",
    tag = QUESTION_TAG,
    params(("level_id" = i32, Path, description = "Level ID")),
    request_body(content = QuestionForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Question created", body = QuestionDto),
        (status = 400, description = "Malformed multipart body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Level not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_question(
    State(state): State<AppState>,
    session: Session,
    Path(level_id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::from_multipart(multipart).await?;
    let params = CreateQuestionParams::from_form(form)?;

    let question = QuestionService::new(&state.db, &state.storage)
        .create(level_id, params)
        .await?;

    Ok((StatusCode::CREATED, Json(question.into_dto(true))))
}

#[utoipa::path(
    put,
    path = "/api/levels/{level_id}/questions/{id}",
    tag = QUESTION_TAG,
    params(
        ("level_id" = i32, Path, description = "Level ID"),
        ("id" = i32, Path, description = "Question ordinal within the level")
    ),
    request_body(content = QuestionForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Question updated", body = QuestionDto),
        (status = 400, description = "Malformed multipart body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Level or question not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_question(
    State(state): State<AppState>,
    session: Session,
    Path((level_id, id)): Path<(i32, i32)>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let form = MultipartForm::from_multipart(multipart).await?;
    let params = UpdateQuestionParams::from_form(form)?;

    let question = QuestionService::new(&state.db, &state.storage)
        .update(level_id, id, params)
        .await?;

    Ok((StatusCode::OK, Json(question.into_dto(true))))
}

/// Delete a question along with every answer given to it.
#[utoipa::path(
    delete,
    path = "/api/levels/{level_id}/questions/{id}",
    tag = QUESTION_TAG,
    params(
        ("level_id" = i32, Path, description = "Level ID"),
        ("id" = i32, Path, description = "Question ordinal within the level")
    ),
    responses(
        (status = 204, description = "Question deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Level or question not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_question(
    State(state): State<AppState>,
    session: Session,
    Path((level_id, id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    QuestionService::new(&state.db, &state.storage)
        .delete(level_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Answer a question.
///
/// Stores the answer, replacing an earlier one for the same question, and returns
/// whether it was correct together with the recomputed level progress.
///
/// # Returns
/// - `200 OK` - Answer recorded
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Previous level not completed yet
/// - `404 Not Found` - Level or question does not exist
/// - `422 Unprocessable Entity` - Answer is not one of the options
#[utoipa::path(
    post,
    path = "/api/levels/{level_id}/questions/{id}/answer",
    tag = QUESTION_TAG,
    params(
        ("level_id" = i32, Path, description = "Level ID"),
        ("id" = i32, Path, description = "Question ordinal within the level")
    ),
    request_body = SubmitAnswerDto,
    responses(
        (status = 200, description = "Answer recorded", body = AnswerResultDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Level locked", body = ErrorDto),
        (status = 404, description = "Level or question not found", body = ErrorDto),
        (status = 422, description = "Answer is not an option", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_answer(
    State(state): State<AppState>,
    session: Session,
    Path((level_id, id)): Path<(i32, i32)>,
    Json(payload): Json<SubmitAnswerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let result = QuizService::new(&state.db)
        .submit_answer(&user, level_id, id, &payload.answer)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}
