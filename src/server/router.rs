//! API route table and OpenAPI document.

use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        admin::StatsDto,
        api::{ErrorDto, ValidationErrorDto},
        auth::{ChangePasswordDto, LoginDto, ProfileForm, RegisterDto},
        community::{CommunityDto, CommunityForm},
        contact::{ContactDto, ContactPayloadDto},
        event::{EventDto, EventForm},
        letter::{LetterDto, LetterForm},
        level::{LevelDto, LevelForm, UserLevelDto},
        message::{CreateMessageDto, MessageDto, UpdateMessageDto},
        news::{NewsDto, NewsForm},
        progress::ProgressDto,
        question::{AnswerResultDto, QuestionDto, QuestionForm, SubmitAnswerDto},
        user::{UserDto, UserForm},
        word::{WordDto, WordForm},
    },
    server::{
        controller::{
            admin, auth, community, contact, event, letter, level, message, news, progress,
            question, user, word,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Isyarat API",
        description = "Sign language dictionary, learning content and quiz backend"
    ),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_user,
        auth::update_profile,
        auth::change_password,
        letter::get_letters,
        letter::get_letter,
        letter::create_letter,
        letter::update_letter,
        letter::delete_letter,
        word::get_words,
        word::get_word,
        word::create_word,
        word::update_word,
        word::delete_word,
        news::get_news_list,
        news::get_news,
        news::create_news,
        news::update_news,
        news::delete_news,
        event::get_events,
        event::get_event,
        event::create_event,
        event::update_event,
        event::delete_event,
        community::get_communities,
        community::get_community,
        community::create_community,
        community::update_community,
        community::delete_community,
        level::get_levels,
        level::get_level,
        level::create_level,
        level::update_level,
        level::delete_level,
        question::get_questions,
        question::get_question,
        question::create_question,
        question::update_question,
        question::delete_question,
        question::submit_answer,
        progress::get_level_progress,
        progress::reset_level_progress,
        progress::get_user_levels,
        progress::get_user_progress,
        contact::get_contacts,
        contact::get_contact,
        contact::create_contact,
        contact::update_contact,
        contact::delete_contact,
        message::send_message,
        message::get_messages,
        message::get_message,
        message::update_message,
        message::delete_message,
        user::get_users,
        user::get_user_by_id,
        user::create_user,
        user::update_user,
        user::delete_user,
        admin::get_stats,
    ),
    components(schemas(
        ErrorDto,
        ValidationErrorDto,
        RegisterDto,
        LoginDto,
        ChangePasswordDto,
        ProfileForm,
        UserDto,
        UserForm,
        LetterDto,
        LetterForm,
        WordDto,
        WordForm,
        NewsDto,
        NewsForm,
        EventDto,
        EventForm,
        CommunityDto,
        CommunityForm,
        LevelDto,
        LevelForm,
        UserLevelDto,
        QuestionDto,
        QuestionForm,
        SubmitAnswerDto,
        AnswerResultDto,
        ProgressDto,
        ContactDto,
        ContactPayloadDto,
        MessageDto,
        CreateMessageDto,
        UpdateMessageDto,
        StatsDto,
    )),
    tags(
        (name = auth::AUTH_TAG, description = "Registration, login and profile"),
        (name = letter::LETTER_TAG, description = "Dictionary letters"),
        (name = word::WORD_TAG, description = "Dictionary words"),
        (name = news::NEWS_TAG, description = "News articles"),
        (name = event::EVENT_TAG, description = "Events"),
        (name = community::COMMUNITY_TAG, description = "Deaf communities"),
        (name = level::LEVEL_TAG, description = "Quiz levels"),
        (name = question::QUESTION_TAG, description = "Quiz questions and answers"),
        (name = progress::PROGRESS_TAG, description = "Player progress"),
        (name = contact::CONTACT_TAG, description = "Contact channels"),
        (name = message::MESSAGE_TAG, description = "Contact form messages"),
        (name = user::USER_TAG, description = "User management"),
        (name = admin::ADMIN_TAG, description = "Admin dashboard"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user).put(auth::update_profile))
        .route("/api/auth/password", put(auth::change_password))
        .route(
            "/api/letters",
            get(letter::get_letters).post(letter::create_letter),
        )
        .route(
            "/api/letters/{id}",
            get(letter::get_letter)
                .put(letter::update_letter)
                .delete(letter::delete_letter),
        )
        .route("/api/words", get(word::get_words).post(word::create_word))
        .route(
            "/api/words/{id}",
            get(word::get_word)
                .put(word::update_word)
                .delete(word::delete_word),
        )
        .route("/api/news", get(news::get_news_list).post(news::create_news))
        .route(
            "/api/news/{id}",
            get(news::get_news)
                .put(news::update_news)
                .delete(news::delete_news),
        )
        .route("/api/events", get(event::get_events).post(event::create_event))
        .route(
            "/api/events/{id}",
            get(event::get_event)
                .put(event::update_event)
                .delete(event::delete_event),
        )
        .route(
            "/api/communities",
            get(community::get_communities).post(community::create_community),
        )
        .route(
            "/api/communities/{id}",
            get(community::get_community)
                .put(community::update_community)
                .delete(community::delete_community),
        )
        .route("/api/levels", get(level::get_levels).post(level::create_level))
        .route(
            "/api/levels/{id}",
            get(level::get_level)
                .put(level::update_level)
                .delete(level::delete_level),
        )
        .route(
            "/api/levels/{level_id}/questions",
            get(question::get_questions).post(question::create_question),
        )
        .route(
            "/api/levels/{level_id}/questions/{id}",
            get(question::get_question)
                .put(question::update_question)
                .delete(question::delete_question),
        )
        .route(
            "/api/levels/{level_id}/questions/{id}/answer",
            post(question::submit_answer),
        )
        .route(
            "/api/levels/{level_id}/progress",
            get(progress::get_level_progress).delete(progress::reset_level_progress),
        )
        .route("/api/user/levels", get(progress::get_user_levels))
        .route("/api/user/progress", get(progress::get_user_progress))
        .route(
            "/api/contacts",
            get(contact::get_contacts).post(contact::create_contact),
        )
        .route(
            "/api/contacts/{id}",
            get(contact::get_contact)
                .put(contact::update_contact)
                .delete(contact::delete_contact),
        )
        .route("/api/messages", post(message::send_message))
        .route("/api/admin/messages", get(message::get_messages))
        .route(
            "/api/admin/messages/{id}",
            get(message::get_message)
                .put(message::update_message)
                .delete(message::delete_message),
        )
        .route("/api/admin/users", get(user::get_users).post(user::create_user))
        .route(
            "/api/admin/users/{id}",
            get(user::get_user_by_id)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/api/admin/stats", get(admin::get_stats))
}
