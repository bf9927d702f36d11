//! Configuration repository for CRUD operations.

use chrono::{DateTime, Utc};
use prebuild_core::{Configuration, ConfigurationId};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::record_key;
use crate::{DbError, get_db};

/// Repository for configuration persistence operations.
pub struct ConfigurationRepository;

/// Internal record type for SurrealDB reads.
#[derive(Debug, Deserialize)]
struct ConfigurationRecord {
    id: Option<Thing>,
    name: String,
    #[serde(default)]
    clone_url: String,
    created_at: DateTime<Utc>,
}

impl ConfigurationRecord {
    fn into_configuration(self, id: ConfigurationId) -> Configuration {
        Configuration {
            id,
            name: self.name,
            clone_url: self.clone_url,
            created_at: self.created_at,
        }
    }

    /// Convert using the key stored in the record itself.
    fn into_keyed(self) -> Option<Configuration> {
        let key = record_key(self.id.as_ref())?;
        match ConfigurationId::parse(&key) {
            Ok(id) => Some(self.into_configuration(id)),
            Err(e) => {
                tracing::warn!(key, error = %e, "Skipping configuration with invalid id");
                None
            }
        }
    }
}

/// Write model; `created_at` is left to the schema default.
#[derive(Debug, Clone, Serialize)]
struct ConfigurationCreate {
    name: String,
    clone_url: String,
}

impl ConfigurationRepository {
    /// Create a new configuration. Names are unique.
    pub async fn create(configuration: &Configuration) -> Result<Configuration, DbError> {
        let db = get_db()?;

        let create_data = ConfigurationCreate {
            name: configuration.name.clone(),
            clone_url: configuration.clone_url.clone(),
        };

        let record: Option<ConfigurationRecord> = db
            .create(("configuration", configuration.id.to_string()))
            .content(create_data)
            .await?;

        record
            .map(|r| r.into_configuration(configuration.id.clone()))
            .ok_or_else(|| DbError::Query("Failed to create configuration".into()))
    }

    /// Get a configuration by ID.
    pub async fn get(id: &ConfigurationId) -> Result<Configuration, DbError> {
        Self::find(id)
            .await?
            .ok_or_else(|| DbError::NotFound(format!("Configuration not found: {}", id)))
    }

    /// Get a configuration by ID, `None` if it does not exist.
    pub async fn find(id: &ConfigurationId) -> Result<Option<Configuration>, DbError> {
        let db = get_db()?;

        let record: Option<ConfigurationRecord> =
            db.select(("configuration", id.to_string())).await?;

        Ok(record.map(|r| r.into_configuration(id.clone())))
    }

    /// List all configurations ordered by name.
    pub async fn list() -> Result<Vec<Configuration>, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("SELECT * FROM configuration ORDER BY name ASC")
            .await?;

        let records: Vec<ConfigurationRecord> = result.take(0)?;

        Ok(records
            .into_iter()
            .filter_map(ConfigurationRecord::into_keyed)
            .collect())
    }

    /// Delete a configuration. Its prebuilds are left in place.
    pub async fn delete(id: &ConfigurationId) -> Result<(), DbError> {
        let db = get_db()?;

        let _: Option<ConfigurationRecord> = db.delete(("configuration", id.to_string())).await?;

        Ok(())
    }

    /// Count stored configurations.
    pub async fn count() -> Result<usize, DbError> {
        let db = get_db()?;

        let mut result = db
            .query("SELECT count() FROM configuration GROUP ALL")
            .await?;

        #[derive(Deserialize)]
        struct CountResult {
            count: i64,
        }

        let counts: Vec<CountResult> = result.take(0)?;

        Ok(counts
            .first()
            .map(|c| usize::try_from(c.count).unwrap_or_default())
            .unwrap_or_default())
    }
}
