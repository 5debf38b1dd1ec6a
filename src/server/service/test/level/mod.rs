use crate::server::{
    error::AppError,
    model::{question::CreateQuestionParams, user::User},
    service::{level::LevelService, question::QuestionService, quiz::QuizService},
    util::storage::ImageStorage,
};
use test_utils::{builder::TestBuilder, factory};

use super::{png, stored_path};
