//! SeniorEase booking backend.
//!
//! HTTP API over a SQLite store for three resources: doctors (with
//! credential uploads), appointments (one active booking per doctor,
//! archived on removal), and trip bookings.

pub mod api;
pub mod appointments;
pub mod config;
pub mod db;
pub mod models;
pub mod uploads;

use tracing_subscriber::EnvFilter;

use crate::api::ApiContext;
use crate::db::Store;

/// Initialize logging, load configuration, open the store, and serve
/// until shutdown. A store or listener that cannot come up is fatal.
pub async fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = config::Config::load();
    tracing::info!(
        port = config.port,
        database = %config.database_path.display(),
        uploads = %config.uploads_dir.display(),
        "Configuration loaded"
    );

    let store = match Store::open(&config.database_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(
                "Cannot open store at {}: {e}",
                config.database_path.display()
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = std::fs::create_dir_all(&config.uploads_dir) {
        tracing::error!(
            "Cannot create uploads directory {}: {e}",
            config.uploads_dir.display()
        );
        std::process::exit(1);
    }

    let ctx = ApiContext::new(store, config.uploads_dir);
    if let Err(e) = api::serve(ctx, config.port).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
