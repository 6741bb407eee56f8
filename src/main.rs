//! CarePortal service entry point
//!
//! Reads configuration from TOML file (~/.config/careportal/config.toml),
//! wires the auth service to the configured credential source and
//! session store, restores any persisted session, and serves the API.

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use careportal::auth::{AuthService, CredentialSource, SessionStore, Verifier};
use careportal::config::CredentialSourceKind;
use careportal::infrastructure::database::migrator::Migrator;
use careportal::infrastructure::{DbCredentials, FileSessionStore, MemoryCredentials};
use careportal::{create_router, default_config_path, init_database, AppConfig, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("CAREPORTAL_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting CarePortal service...");

    // ── Credential source ──────────────────────────────────────
    let credentials: Arc<dyn CredentialSource> = match app_cfg.credentials.source {
        CredentialSourceKind::Memory => {
            info!("Using compiled-in demo credential set");
            Arc::new(MemoryCredentials::with_demo_accounts())
        }
        CredentialSourceKind::Database => {
            let db_config = DatabaseConfig {
                url: app_cfg.database.url.clone(),
            };
            let db = match init_database(&db_config).await {
                Ok(db) => db,
                Err(e) => {
                    error!("Failed to connect to database: {}", e);
                    return Err(e.into());
                }
            };

            info!("Running database migrations...");
            if let Err(e) = Migrator::up(&db, None).await {
                error!("Failed to run migrations: {}", e);
                return Err(e.into());
            }
            info!("Migrations completed");

            seed_demo_accounts(&db).await;
            Arc::new(DbCredentials::new(db))
        }
    };

    // ── Session store ──────────────────────────────────────────
    let session_path = app_cfg
        .session
        .file
        .clone()
        .unwrap_or_else(FileSessionStore::default_path);
    info!("Session file: {}", session_path.display());
    let session_store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(session_path));

    // ── Auth service ───────────────────────────────────────────
    let auth = Arc::new(AuthService::new(
        Verifier::new(credentials),
        session_store,
        app_cfg.session.on_malformed,
    ));

    // Restore before serving anything, so guards never observe an
    // unsettled session state.
    if let Err(e) = auth.restore().await {
        error!("Failed to restore persisted session: {}", e);
        return Err(e.into());
    }

    // ── Serve ──────────────────────────────────────────────────
    let router = create_router(auth);
    careportal::server::serve(router, &app_cfg.server.address()).await?;

    info!("CarePortal shutdown complete");
    Ok(())
}

/// Seed the demo accounts when the accounts table is empty, mirroring
/// the compiled-in credential set.
async fn seed_demo_accounts(db: &sea_orm::DatabaseConnection) {
    use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

    use careportal::infrastructure::credentials::demo_accounts;
    use careportal::infrastructure::database::entities::account;

    let count = account::Entity::find().count(db).await.unwrap_or(0);
    if count > 0 {
        return;
    }

    info!("Seeding demo accounts...");
    for record in demo_accounts() {
        let row = account::ActiveModel {
            id: Set(record.id),
            name: Set(record.name),
            email: Set(record.email.clone()),
            password: Set(record.password),
            role: Set(record.role.to_string()),
        };
        match row.insert(db).await {
            Ok(_) => info!("Seeded account: {}", record.email),
            Err(e) => error!("Failed to seed account {}: {}", record.email, e),
        }
    }
}
