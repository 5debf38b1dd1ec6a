use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{
        ChangePasswordParams, NewUser, RegisterParams, Role, UpdateProfileParams, User,
        UserChanges,
    },
    util::{
        password::{hash_password, verify_password},
        storage::ImageStorage,
    },
};

/// Storage folder for profile pictures.
pub const USER_IMAGE_FOLDER: &str = "users";

/// Email/password authentication and self-service account management.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a ImageStorage,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a ImageStorage) -> Self {
        Self { db, storage }
    }

    /// Creates a `user` role account.
    ///
    /// # Returns
    /// - `Ok(User)` - The new account
    /// - `Err(AppError::Validation)` - Email already registered
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_taken(&params.email, None).await? {
            return Err(AppError::invalid("email", "The email has already been taken."));
        }

        let user = user_repo
            .create(NewUser {
                name: params.name,
                email: params.email,
                password_hash: hash_password(&params.password)?,
                role: Role::User,
                image_url: None,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials_by_email(email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &credentials.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(credentials.user)
    }

    /// Replaces a user's password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::Validation)` - Current password is wrong
    /// - `Err(AuthError::UserNotInDatabase)` - User was deleted meanwhile
    pub async fn change_password(
        &self,
        user_id: i32,
        params: ChangePasswordParams,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !verify_password(&params.current_password, &credentials.password_hash)? {
            return Err(AppError::invalid(
                "current_password",
                "The current password is incorrect.",
            ));
        }

        user_repo
            .update(
                user_id,
                UserChanges {
                    password_hash: Some(hash_password(&params.new_password)?),
                    ..Default::default()
                },
            )
            .await?;

        Ok(())
    }

    /// Updates the logged in user's name, email and profile picture.
    ///
    /// A replaced profile picture is deleted from storage.
    pub async fn update_profile(
        &self,
        user: &User,
        params: UpdateProfileParams,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(email) = &params.email {
            if user_repo.email_taken(email, Some(user.id)).await? {
                return Err(AppError::invalid("email", "The email has already been taken."));
            }
        }

        let image_url = match &params.image {
            Some(image) => Some(self.storage.store(USER_IMAGE_FOLDER, image).await?),
            None => None,
        };

        let result = user_repo
            .update(
                user.id,
                UserChanges {
                    name: params.name,
                    email: params.email,
                    image_url: image_url.clone(),
                    ..Default::default()
                },
            )
            .await
            .map_err(AppError::from)
            .and_then(|updated| {
                updated.ok_or_else(|| AuthError::UserNotInDatabase(user.id).into())
            });
        let updated = self
            .storage
            .discard_on_error(image_url.as_deref(), result)
            .await?;

        if image_url.is_some() {
            self.storage
                .delete_replaced(user.image_url.as_deref(), updated.image_url.as_deref())
                .await?;
        }

        Ok(updated)
    }
}
