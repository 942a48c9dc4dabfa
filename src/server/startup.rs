use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing_subscriber::{fmt, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::{seed::SeedService, user::UserService},
};

const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG`, falling back to `info` when unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before any request is
/// served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds tags and ingredients from `DATA_DIR`, if configured.
pub async fn seed_reference_data(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    let Some(data_dir) = &config.data_dir else {
        return Ok(());
    };

    let report = SeedService::new(db).seed_from_dir(data_dir).await?;

    tracing::info!(
        "Seeded {} tags and {} ingredients from {}",
        report.tags,
        report.ingredients,
        data_dir.display()
    );

    Ok(())
}

/// Grants admin rights to the `ADMIN_EMAIL` user, if configured.
///
/// The user must already be registered; otherwise a warning is logged and startup
/// continues.
pub async fn promote_admin(db: &sea_orm::DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(email) = &config.admin_email else {
        return Ok(());
    };

    if UserService::new(db).promote_admin(email).await? {
        tracing::info!("Granted admin rights to {}", email);
    } else {
        tracing::warn!(
            "ADMIN_EMAIL is set to {} but no user with that email is registered",
            email
        );
    }

    Ok(())
}

/// Builds the CORS layer from the configured origins.
///
/// An empty list allows any origin.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_allowed_origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: format!("'{}' is not a valid origin", origin),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

/// Resolves once Ctrl+C or SIGTERM is received.
///
/// A signal that cannot be listened for is logged and never fires, leaving the other
/// one in charge.
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }

        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
