use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::admin_user::AdminUserRepository,
    error::{internal::InternalError, AppError},
    service::legacy::LegacyImportService,
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

/// Creates the session layer backed by the application's SQLite database.
///
/// Sessions expire after 7 days of inactivity. The session table is created on
/// first start.
///
/// # Arguments
/// - `db` - Database connection whose pool also stores sessions
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the API router
/// - `Err(AppError::SqlxErr)` - Failed to migrate the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();
    let session_store = SqliteStore::new(pool);

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7))))
}

/// Builds the outbound HTTP client.
///
/// Redirects are disabled so responses from the identity and prayer-time services
/// are never followed to another host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialise
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(15))
        .build()?;

    Ok(client)
}

/// Imports the legacy JSON export when `LEGACY_IMPORT_FILE` is set.
///
/// Documents already imported are skipped by the import service, so restarting with
/// the variable still set is harmless.
pub async fn import_legacy_data(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(path) = config.legacy_import_file.as_deref() else {
        return Ok(());
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| InternalError::LegacyImport {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

    let report = LegacyImportService::new(db, config.utc_offset)
        .import_json(&raw)
        .await?;

    tracing::info!(
        "Legacy import from {}: {} members, {} donations, {} announcements, {} admin users, {} skipped",
        path,
        report.members,
        report.donations,
        report.announcements,
        report.admin_users,
        report.skipped
    );

    Ok(())
}

/// Warns when no active admin profile exists.
///
/// Sign-in requires a row in `admin_user` keyed by the identity provider uid, so
/// without one nobody can reach the dashboard.
pub async fn check_for_admin(db: &DatabaseConnection) -> Result<(), AppError> {
    let active_admins = AdminUserRepository::new(db).count_active().await?;

    if active_admins == 0 {
        tracing::warn!(
            "No active admin profiles found. Add a row to admin_user with the identity \
             provider uid, or import one with LEGACY_IMPORT_FILE."
        );
    }

    Ok(())
}
