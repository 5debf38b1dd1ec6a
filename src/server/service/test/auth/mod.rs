use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{ChangePasswordParams, RegisterParams, Role},
    service::auth::AuthService,
    util::storage::ImageStorage,
};
use test_utils::{builder::TestBuilder, factory};

mod change_password;
mod login;
mod register;

fn register_params(email: &str) -> RegisterParams {
    RegisterParams {
        name: "Budi".to_string(),
        email: email.to_string(),
        password: "rahasia123".to_string(),
    }
}
