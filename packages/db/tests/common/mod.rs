use std::sync::LazyLock;

use tokio::sync::{Mutex, MutexGuard};

use db::{DbConfig, DbError};

static TEST_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Connect to the shared in-memory store and clear it.
///
/// Hold the returned guard for the whole test; tests share one connection.
pub async fn setup_db() -> Result<MutexGuard<'static, ()>, DbError> {
    let guard = TEST_LOCK.lock().await;
    db::init(DbConfig::memory()).await?;
    reset_db().await?;
    Ok(guard)
}

/// Delete every stored configuration and prebuild.
pub async fn reset_db() -> Result<(), DbError> {
    db::get_db()?
        .query("DELETE prebuild; DELETE configuration;")
        .await?;
    Ok(())
}
