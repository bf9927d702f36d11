//! Server initialization for the prebuilds dashboard.

use std::sync::LazyLock;
use tokio::sync::OnceCell;

use db::DbError;

use crate::ServerConfig;

static INITIALIZED: LazyLock<OnceCell<()>> = LazyLock::new(OnceCell::new);

/// Initialize the dashboard backend once per process.
///
/// Server functions call this before touching the database, so the first
/// request pays for startup.
pub async fn ensure_initialized() -> Result<(), DbError> {
    INITIALIZED
        .get_or_try_init(|| init_dashboard(ServerConfig::from_env()))
        .await
        .map(|_| ())
}

/// Connect the database and seed demo data when configured to.
pub async fn init_dashboard(config: ServerConfig) -> Result<(), DbError> {
    tracing::info!("Initializing prebuilds dashboard...");

    db::init(config.db).await?;

    if config.seed_demo {
        crate::seed_demo_data().await?;
    }

    tracing::info!("Prebuilds dashboard initialized");
    Ok(())
}
