use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    service::user::UserService,
    util::storage::ImageStorage,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in a `tower_sessions` table next to the application tables and expire
/// after 7 days without activity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Creates the upload directory and returns the storage handle writing into it.
pub async fn setup_storage(config: &Config) -> Result<ImageStorage, AppError> {
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    Ok(ImageStorage::new(config.upload_dir.clone()))
}

/// Builds the CORS layer for the configured frontend origins.
///
/// Credentials are allowed so the session cookie is sent by browsers. Without configured
/// origins only same-origin requests are accepted.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            origin.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                value: origin.clone(),
            })
        })
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true))
}

/// Makes sure an administrator can log in.
///
/// With `ADMIN_EMAIL` and `ADMIN_PASSWORD` configured the account is created, or promoted,
/// when no admin exists yet. Without them a warning is logged when the database has no
/// admin at all.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    storage: &ImageStorage,
    config: &Config,
) -> Result<(), AppError> {
    match &config.admin {
        Some(seed) => {
            if UserService::new(db, storage).ensure_admin(seed).await? {
                tracing::info!("Created administrator account {}", seed.email);
            }
        }
        None => {
            if !UserRepository::new(db).admin_exists().await? {
                tracing::warn!(
                    "No administrator account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one"
                );
            }
        }
    }

    Ok(())
}
