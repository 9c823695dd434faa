use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aqar_api::bootstrap;
use aqar_api::config::{ServerConfig, StorageConfig};
use aqar_api::router::build_app_router;
use aqar_api::state::AppState;
use aqar_api::storage::{ImageStore, LocalImageStore, S3ImageStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aqar_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = aqar_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    aqar_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    aqar_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    if let Some(admin) = bootstrap::ensure_admin(&pool, &config.admin)
        .await
        .expect("Failed to create the administrator account")
    {
        tracing::info!(username = %admin.username, "Administrator account created");
    }

    // --- Image storage ---
    let images: Arc<dyn ImageStore> = match &config.storage {
        StorageConfig::Local { upload_dir } => {
            tokio::fs::create_dir_all(upload_dir)
                .await
                .expect("Failed to create upload directory");
            tracing::info!(dir = %upload_dir.display(), "Storing images on local disk");
            Arc::new(LocalImageStore::new(upload_dir.clone()))
        }
        StorageConfig::S3 { bucket, region } => {
            tracing::info!(%bucket, %region, "Storing images in S3");
            Arc::new(S3ImageStore::from_env(bucket.clone(), region.clone()).await)
        }
    };

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        images,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Resolve on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
