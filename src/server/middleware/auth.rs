use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Role, User},
};

pub enum Permission {
    Admin,
}

/// Resolves the session's user and checks their permissions.
///
/// Controllers construct a guard per request and call `require` for protected
/// endpoints or `optional` when the user only changes what is returned.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged in user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with all required permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists (401)
    /// - `Err(AuthError::AccessDenied)` - A permission is missing (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != Role::Admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted to access an admin endpoint without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Returns the logged in user, or `None` for anonymous requests.
    ///
    /// A session pointing at a deleted user is treated as anonymous.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        Ok(UserRepository::new(self.db).find_by_id(user_id).await?)
    }
}
