//! User domain models and parameters.
//!
//! Users authenticate with email and password and carry one of two roles. Parameter
//! types cover self registration, profile updates and admin managed accounts.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::{
    model::{
        auth::{ChangePasswordDto, RegisterDto},
        user::UserDto,
    },
    server::{
        error::validation::ValidationErrors,
        util::{
            form::{ImageUpload, MultipartForm},
            parse::is_valid_email,
        },
    },
};

pub const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_NAME_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// Unknown role strings are treated as the unprivileged `user` role.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: Role::parse(&entity.role).unwrap_or(Role::User),
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.to_string(),
            image_url: self.image_url,
            created_at: self.created_at,
        }
    }
}

/// A user together with their stored password hash, used only for credential checks.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            password_hash: entity.password.clone(),
            user: User::from_entity(entity),
        }
    }
}

/// Fields written when inserting a user row.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub image_url: Option<String>,
}

/// Changes applied to a user row; `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
    pub image_url: Option<String>,
}

fn validate_name(name: Option<String>, required: bool, errors: &mut ValidationErrors) -> Option<String> {
    match name.filter(|n| !n.is_empty()) {
        Some(name) if name.chars().count() > MAX_NAME_LENGTH => {
            errors.add("name", "The name may not be greater than 255 characters.");
            None
        }
        Some(name) => Some(name),
        None => {
            if required {
                errors.add("name", "The name field is required.");
            }
            None
        }
    }
}

fn validate_email(email: Option<String>, required: bool, errors: &mut ValidationErrors) -> Option<String> {
    match email.map(|e| e.to_lowercase()).filter(|e| !e.is_empty()) {
        Some(email) if !is_valid_email(&email) => {
            errors.add("email", "The email must be a valid email address.");
            None
        }
        Some(email) => Some(email),
        None => {
            if required {
                errors.add("email", "The email field is required.");
            }
            None
        }
    }
}

fn validate_password(
    field: &str,
    password: Option<String>,
    required: bool,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match password.filter(|p| !p.is_empty()) {
        Some(password) if password.chars().count() < MIN_PASSWORD_LENGTH => {
            errors.add(field, format!("The {field} must be at least 8 characters."));
            None
        }
        Some(password) => Some(password),
        None => {
            if required {
                errors.add(field, format!("The {field} field is required."));
            }
            None
        }
    }
}

/// Self registration input.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = validate_name(Some(dto.name.trim().to_string()), true, &mut errors);
        let email = validate_email(Some(dto.email.trim().to_string()), true, &mut errors);
        let password = validate_password("password", Some(dto.password), true, &mut errors);

        match (name, email, password) {
            (Some(name), Some(email), Some(password)) if errors.is_empty() => Ok(Self {
                name,
                email,
                password,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChangePasswordParams {
    pub current_password: String,
    pub new_password: String,
}

impl ChangePasswordParams {
    pub fn from_dto(dto: ChangePasswordDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if dto.current_password.is_empty() {
            errors.add("current_password", "The current password field is required.");
        }
        let new_password = validate_password("new_password", Some(dto.new_password), true, &mut errors);

        match new_password {
            Some(new_password) if errors.is_empty() => Ok(Self {
                current_password: dto.current_password,
                new_password,
            }),
            _ => Err(errors),
        }
    }
}

/// Profile changes a user makes to their own account.
#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<ImageUpload>,
}

impl UpdateProfileParams {
    pub fn from_form(mut form: MultipartForm) -> Result<Self, ValidationErrors> {
        let mut errors = form.take_errors();

        let name = validate_name(form.text("name"), false, &mut errors);
        let email = validate_email(form.text("email"), false, &mut errors);

        errors.into_result(Self {
            name,
            email,
            image: form.take_image(),
        })
    }
}

/// Account created by an administrator.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub image: Option<ImageUpload>,
}

fn validate_role(role: Option<String>, errors: &mut ValidationErrors) -> Option<Role> {
    let role = role.filter(|r| !r.is_empty())?;

    match Role::parse(&role.to_lowercase()) {
        Some(role) => Some(role),
        None => {
            errors.add("role", "The selected role is invalid.");
            None
        }
    }
}

impl CreateUserParams {
    pub fn from_form(mut form: MultipartForm) -> Result<Self, ValidationErrors> {
        let mut errors = form.take_errors();

        let name = validate_name(form.text("name"), true, &mut errors);
        let email = validate_email(form.text("email"), true, &mut errors);
        let password = validate_password("password", form.text("password"), true, &mut errors);
        let role = validate_role(form.text("role"), &mut errors).unwrap_or(Role::User);

        match (name, email, password) {
            (Some(name), Some(email), Some(password)) if errors.is_empty() => Ok(Self {
                name,
                email,
                password,
                role,
                image: form.take_image(),
            }),
            _ => Err(errors),
        }
    }
}

/// Admin changes to an existing account. Absent fields keep their value.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub image: Option<ImageUpload>,
}

impl UpdateUserParams {
    pub fn from_form(mut form: MultipartForm) -> Result<Self, ValidationErrors> {
        let mut errors = form.take_errors();

        let name = validate_name(form.text("name"), false, &mut errors);
        let email = validate_email(form.text("email"), false, &mut errors);
        let password = validate_password("password", form.text("password"), false, &mut errors);
        let role = validate_role(form.text("role"), &mut errors);

        errors.into_result(Self {
            name,
            email,
            password,
            role,
            image: form.take_image(),
        })
    }
}
