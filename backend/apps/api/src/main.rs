//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use accounts::application::bootstrap::{BootstrapAdminUseCase, BootstrapConfig};
use accounts::application::config::{AccountsConfig, PasswordPolicy, TokenConfig};
use accounts::application::token::TokenService;
use accounts::{PgAccountsRepository, accounts_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use community::{PgCommunityRepository, community_router};
use jobs::{FsDocumentStore, PgJobsRepository, StorageConfig, jobs_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,accounts=info,jobs=info,community=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Accounts configuration. Production has NO credential or secret
    // defaults: startup fails loudly when the environment is incomplete.
    let (accounts_config, bootstrap_config) = if cfg!(debug_assertions) {
        (AccountsConfig::development(), BootstrapConfig::development())
    } else {
        let secret_b64 =
            env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set in production");
        let secret = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;

        let token_ttl = env::var("TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(TokenConfig::DEFAULT_TTL);

        let password_policy = env::var("PASSWORD_MIN_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(|min_length| PasswordPolicy {
                min_length,
                ..Default::default()
            })
            .unwrap_or_default();

        let admin_email =
            env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set in production");
        let admin_password =
            env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set in production");

        (
            AccountsConfig::new(TokenConfig::new(secret, token_ttl), password_policy),
            BootstrapConfig::new(admin_email, admin_password),
        )
    };

    let accounts_config = Arc::new(accounts_config);
    let tokens = Arc::new(TokenService::new(&accounts_config.token));

    let accounts_repo = PgAccountsRepository::new(pool.clone());
    let jobs_repo = PgJobsRepository::new(pool.clone());
    let community_repo = PgCommunityRepository::new(pool.clone());

    // Startup bootstrap: seed the admin account (idempotent).
    // A failure here is a refusal to start, not a warning: running
    // without the admin account is a misconfiguration.
    let bootstrap = BootstrapAdminUseCase::new(
        Arc::new(accounts_repo.clone()),
        Arc::new(accounts_repo.clone()),
        accounts_config.clone(),
    );
    bootstrap
        .execute(&bootstrap_config)
        .await
        .map_err(|e| anyhow::anyhow!("Admin bootstrap failed: {e}"))?;

    // Document storage
    let storage_config = env::var("STORAGE_ROOT")
        .map(StorageConfig::new)
        .unwrap_or_else(|_| StorageConfig::development());
    let documents = FsDocumentStore::new(storage_config);

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let api = accounts_router(accounts_repo.clone(), tokens.clone(), accounts_config)
        .merge(jobs_router(
            jobs_repo,
            accounts_repo.clone(),
            documents,
            tokens,
        ))
        .merge(community_router(community_repo, accounts_repo));

    let app = Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
