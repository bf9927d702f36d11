//! Prebuild repository for CRUD operations.

use prebuild_core::{Commit, ConfigurationId, Prebuild, PrebuildId, PrebuildStatus};
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::record_key;
use crate::{DbError, get_db};

/// Repository for prebuild persistence operations.
pub struct PrebuildRepository;

/// Stored prebuild fields, without the record id.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PrebuildBody {
    configuration_id: ConfigurationId,
    #[serde(rename = "ref", default)]
    ref_name: String,
    #[serde(default)]
    status: Option<PrebuildStatus>,
    #[serde(default)]
    commit: Option<Commit>,
}

impl PrebuildBody {
    fn from_prebuild(prebuild: &Prebuild) -> Self {
        Self {
            configuration_id: prebuild.configuration_id.clone(),
            ref_name: prebuild.ref_name.clone(),
            status: prebuild.status.clone(),
            commit: prebuild.commit.clone(),
        }
    }

    fn into_prebuild(self, id: PrebuildId) -> Prebuild {
        Prebuild {
            id,
            configuration_id: self.configuration_id,
            ref_name: self.ref_name,
            status: self.status,
            commit: self.commit,
        }
    }
}

/// Internal record type for SurrealDB reads.
#[derive(Debug, Deserialize)]
struct PrebuildRecord {
    id: Option<Thing>,
    #[serde(flatten)]
    body: PrebuildBody,
}

impl PrebuildRecord {
    fn into_keyed(self) -> Option<Prebuild> {
        let key = record_key(self.id.as_ref())?;
        match PrebuildId::parse(&key) {
            Ok(id) => Some(self.body.into_prebuild(id)),
            Err(e) => {
                tracing::warn!(key, error = %e, "Skipping prebuild with invalid id");
                None
            }
        }
    }
}

/// Filter options for listing prebuilds.
#[derive(Debug, Default, Clone)]
pub struct PrebuildFilter {
    pub configuration_id: Option<ConfigurationId>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl PrebuildRepository {
    /// Create a new prebuild in the database.
    pub async fn create(prebuild: &Prebuild) -> Result<Prebuild, DbError> {
        let db = get_db()?;

        let record: Option<PrebuildRecord> = db
            .create(("prebuild", prebuild.id.to_string()))
            .content(PrebuildBody::from_prebuild(prebuild))
            .await?;

        record
            .map(|r| r.body.into_prebuild(prebuild.id.clone()))
            .ok_or_else(|| DbError::Query("Failed to create prebuild".into()))
    }

    /// Get a prebuild by ID.
    pub async fn get(id: &PrebuildId) -> Result<Prebuild, DbError> {
        let db = get_db()?;

        let record: Option<PrebuildRecord> = db.select(("prebuild", id.to_string())).await?;

        record
            .map(|r| r.body.into_prebuild(id.clone()))
            .ok_or_else(|| DbError::NotFound(format!("Prebuild not found: {}", id)))
    }

    /// List prebuilds, most recently triggered first.
    pub async fn list(filter: PrebuildFilter) -> Result<Vec<Prebuild>, DbError> {
        let db = get_db()?;

        let mut conditions = Vec::new();
        let mut bindings: Vec<(&'static str, serde_json::Value)> = Vec::new();

        if let Some(configuration_id) = &filter.configuration_id {
            conditions.push("configuration_id = $configuration_id");
            bindings.push((
                "configuration_id",
                serde_json::json!(configuration_id.to_string()),
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit_clause = filter
            .limit
            .map(|l| format!("LIMIT {}", l))
            .unwrap_or_default();

        let offset_clause = filter
            .offset
            .map(|o| format!("START {}", o))
            .unwrap_or_default();

        let query = format!(
            "SELECT * FROM prebuild {} ORDER BY status.start_time DESC {} {}",
            where_clause, limit_clause, offset_clause
        );

        let mut request = db.query(&query);

        for (name, value) in bindings {
            request = request.bind((name, value));
        }

        let mut response = request.await?;
        let records: Vec<PrebuildRecord> = response.take(0)?;

        Ok(records
            .into_iter()
            .filter_map(PrebuildRecord::into_keyed)
            .collect())
    }

    /// Delete a prebuild.
    pub async fn delete(id: &PrebuildId) -> Result<(), DbError> {
        let db = get_db()?;

        let _: Option<PrebuildRecord> = db.delete(("prebuild", id.to_string())).await?;

        Ok(())
    }
}
