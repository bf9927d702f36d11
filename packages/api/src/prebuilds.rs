//! Prebuild server functions.

use dioxus::prelude::*;
use prebuild_core::Prebuild;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PREBUILD_LIMIT: usize = 50;

/// List prebuilds, most recently triggered first, optionally for one
/// configuration.
#[post("/api/prebuilds/list")]
pub async fn list_prebuilds(
    configuration_id: Option<String>,
    limit: Option<usize>,
) -> Result<Vec<Prebuild>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::{PrebuildFilter, PrebuildRepository};
        use prebuild_core::ConfigurationId;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let configuration_id = configuration_id
            .as_deref()
            .map(ConfigurationId::parse)
            .transpose()
            .map_err(|e| ServerFnError::new(format!("Invalid configuration ID: {}", e)))?;

        let filter = PrebuildFilter {
            configuration_id,
            limit: Some(limit.unwrap_or(DEFAULT_PREBUILD_LIMIT)),
            ..Default::default()
        };

        PrebuildRepository::list(filter)
            .await
            .map_err(|e| ServerFnError::new(format!("Database error: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Get a prebuild by ID.
#[get("/api/prebuilds/:id")]
pub async fn get_prebuild(id: String) -> Result<Option<Prebuild>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::DbError;
        use db::repositories::PrebuildRepository;
        use prebuild_core::PrebuildId;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let prebuild_id = PrebuildId::parse(&id)
            .map_err(|e| ServerFnError::new(format!("Invalid prebuild ID: {}", e)))?;

        match PrebuildRepository::get(&prebuild_id).await {
            Ok(prebuild) => Ok(Some(prebuild)),
            Err(DbError::NotFound(_)) => Ok(None),
            Err(e) => Err(ServerFnError::new(format!("Database error: {}", e))),
        }
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
