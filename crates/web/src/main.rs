use std::sync::Arc;

use anyhow::Context;
use storage::RosterStore;
use storage::store::FsBackend;
use tokio::net::TcpListener;

use web::build_router;
use web::config::Config;
use web::middleware::auth::AdminSecret;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting check-in API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let store = match &config.blob_dir {
        Some(blob_dir) => {
            tracing::info!(
                "Using blob directory {} with fallback {}",
                blob_dir,
                config.data_dir
            );
            RosterStore::with_fallback(
                Arc::new(FsBackend::new(blob_dir)),
                Arc::new(FsBackend::new(&config.data_dir)),
            )
        }
        None => {
            tracing::info!("Using data directory {}", config.data_dir);
            RosterStore::new(Arc::new(FsBackend::new(&config.data_dir)))
        }
    };

    let roster = store
        .read_all()
        .await
        .context("Failed to read the stored roster")?;
    tracing::info!("Roster loaded: {} registrant(s)", roster.len());

    let admin = AdminSecret::new(config.admin_secret.clone(), config.is_production());
    let app = build_router(store, admin);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui",
        bind_address
    );

    let listener = TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
