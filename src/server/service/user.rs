use sea_orm::DatabaseConnection;

use crate::server::{
    config::AdminSeed,
    data::user::UserRepository,
    error::AppError,
    model::{
        pagination::{PageRequest, Paginated},
        user::{CreateUserParams, NewUser, Role, UpdateUserParams, User, UserChanges},
    },
    service::auth::USER_IMAGE_FOLDER,
    util::{password::hash_password, storage::ImageStorage},
};

/// Account administration.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a ImageStorage,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a ImageStorage) -> Self {
        Self { db, storage }
    }

    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        role: Option<Role>,
        request: PageRequest,
    ) -> Result<Paginated<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_paginated(search, role, request)
            .await?;

        Ok(Paginated::new(users, total, request))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_taken(&params.email, None).await? {
            return Err(AppError::invalid("email", "The email has already been taken."));
        }

        let password_hash = hash_password(&params.password)?;
        let image_url = match &params.image {
            Some(image) => Some(self.storage.store(USER_IMAGE_FOLDER, image).await?),
            None => None,
        };

        let result = user_repo
            .create(NewUser {
                name: params.name,
                email: params.email,
                password_hash,
                role: params.role,
                image_url: image_url.clone(),
            })
            .await;

        self.storage
            .discard_on_error(image_url.as_deref(), result)
            .await
    }

    /// Applies admin changes to an account; a new password is re-hashed.
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let existing = self.get_by_id(id).await?;

        if let Some(email) = &params.email {
            if user_repo.email_taken(email, Some(id)).await? {
                return Err(AppError::invalid("email", "The email has already been taken."));
            }
        }

        let password_hash = match &params.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };
        let image_url = match &params.image {
            Some(image) => Some(self.storage.store(USER_IMAGE_FOLDER, image).await?),
            None => None,
        };

        let result = user_repo
            .update(
                id,
                UserChanges {
                    name: params.name,
                    email: params.email,
                    password_hash,
                    role: params.role,
                    image_url: image_url.clone(),
                },
            )
            .await
            .map_err(AppError::from)
            .and_then(|updated| {
                updated.ok_or_else(|| AppError::NotFound("User not found".to_string()))
            });
        let updated = self
            .storage
            .discard_on_error(image_url.as_deref(), result)
            .await?;

        if image_url.is_some() {
            self.storage
                .delete_replaced(existing.image_url.as_deref(), updated.image_url.as_deref())
                .await?;
        }

        Ok(updated)
    }

    /// Deletes an account and its profile picture.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::Validation)` - The admin tried to delete their own account
    /// - `Err(AppError::NotFound)` - No such account
    pub async fn delete(&self, acting_user_id: i32, id: i32) -> Result<(), AppError> {
        if acting_user_id == id {
            return Err(AppError::invalid("user", "You cannot delete your own account."));
        }

        let user = self.get_by_id(id).await?;
        UserRepository::new(self.db).delete(id).await?;

        if let Some(image_url) = &user.image_url {
            self.storage.delete(image_url).await?;
        }

        Ok(())
    }

    /// Creates the configured administrator when no admin account exists yet.
    ///
    /// An existing non-admin account with the same email is promoted instead.
    ///
    /// # Returns
    /// - `Ok(true)` - An admin account was created or promoted
    /// - `Ok(false)` - An admin already existed
    pub async fn ensure_admin(&self, seed: &AdminSeed) -> Result<bool, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.admin_exists().await? {
            return Ok(false);
        }

        let password_hash = hash_password(&seed.password)?;

        match user_repo.find_credentials_by_email(&seed.email).await? {
            Some(existing) => {
                user_repo
                    .update(
                        existing.user.id,
                        UserChanges {
                            role: Some(Role::Admin),
                            password_hash: Some(password_hash),
                            ..Default::default()
                        },
                    )
                    .await?;
            }
            None => {
                user_repo
                    .create(NewUser {
                        name: seed.name.clone(),
                        email: seed.email.to_lowercase(),
                        password_hash,
                        role: Role::Admin,
                        image_url: None,
                    })
                    .await?;
            }
        }

        Ok(true)
    }
}
