//! Database schema definitions using SurrealQL.

use crate::{DbError, get_db};

/// Initialize the database schema.
///
/// Every statement is `IF NOT EXISTS`, so this is safe to run on each start.
pub async fn init_schema() -> Result<(), DbError> {
    let db = get_db()?;

    tracing::info!("Initializing database schema...");

    db.query(CONFIGURATION_SCHEMA).await?.check()?;
    db.query(PREBUILD_SCHEMA).await?.check()?;

    tracing::info!("Database schema initialized");

    Ok(())
}

/// Configuration table: one row per repository.
const CONFIGURATION_SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS configuration SCHEMAFULL;

DEFINE FIELD IF NOT EXISTS name ON configuration TYPE string;
DEFINE FIELD IF NOT EXISTS clone_url ON configuration TYPE string DEFAULT "";
DEFINE FIELD IF NOT EXISTS created_at ON configuration TYPE datetime DEFAULT time::now();

DEFINE INDEX IF NOT EXISTS configuration_name ON configuration FIELDS name UNIQUE;
"#;

/// Prebuild table. Status and commit are nested optional objects, so the
/// table stays schemaless and only indexed fields are declared.
const PREBUILD_SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS prebuild SCHEMALESS;

DEFINE FIELD IF NOT EXISTS configuration_id ON prebuild TYPE string;
DEFINE FIELD IF NOT EXISTS ref ON prebuild TYPE string DEFAULT "";

DEFINE INDEX IF NOT EXISTS prebuild_configuration ON prebuild FIELDS configuration_id;
DEFINE INDEX IF NOT EXISTS prebuild_started ON prebuild FIELDS status.start_time;
"#;
