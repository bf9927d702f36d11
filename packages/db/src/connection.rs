//! Process-wide SurrealDB connection, opened once on first init.

use std::sync::LazyLock;
use surrealdb::Surreal;
use surrealdb::engine::any::{Any, connect};
use surrealdb::opt::auth::Root;
use thiserror::Error;
use tokio::sync::OnceCell;

static DB: LazyLock<OnceCell<Surreal<Any>>> = LazyLock::new(OnceCell::new);

/// Connection handle shared by all repositories.
pub type Database = Surreal<Any>;

/// Where and how to connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Engine URL: `mem://`, `file://path`, `rocksdb://path`, `ws://host`...
    pub endpoint: String,
    pub namespace: String,
    pub database: String,
    /// Root username and password, for remote engines.
    pub credentials: Option<(String, String)>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            endpoint: "mem://".to_string(),
            namespace: "prebuilds".to_string(),
            database: "main".to_string(),
            credentials: None,
        }
    }
}

impl DbConfig {
    /// In-memory store, used by tests and local development.
    pub fn memory() -> Self {
        Self::default()
    }

    /// Any engine URL SurrealDB understands.
    pub fn endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// File-backed store.
    pub fn file(path: impl Into<String>) -> Self {
        Self::endpoint(format!("file://{}", path.into()))
    }

    /// RocksDB store (requires the `rocksdb` feature).
    pub fn rocksdb(path: impl Into<String>) -> Self {
        Self::endpoint(format!("rocksdb://{}", path.into()))
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }
}

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database not initialized - call init_db first")]
    NotInitialized,
    #[error("Connection error: {0}")]
    Connection(#[from] surrealdb::Error),
    #[error("Query error: {0}")]
    Query(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Open the global connection.
///
/// Later calls return the existing connection and ignore `config`.
pub async fn init_db(config: DbConfig) -> Result<&'static Database, DbError> {
    DB.get_or_try_init(|| async {
        tracing::info!(endpoint = %config.endpoint, "Connecting to database");

        let db = connect(&config.endpoint).await?;

        if let Some((username, password)) = &config.credentials {
            db.signin(Root { username, password }).await?;
        }

        db.use_ns(&config.namespace).use_db(&config.database).await?;

        tracing::info!(
            namespace = %config.namespace,
            database = %config.database,
            "Connected to database"
        );

        Ok(db)
    })
    .await
}

/// Get the database connection.
///
/// Fails with [`DbError::NotInitialized`] until [`init_db`] has completed.
pub fn get_db() -> Result<&'static Database, DbError> {
    DB.get().ok_or(DbError::NotInitialized)
}
