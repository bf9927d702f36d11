//! Configuration lookup server functions.

use dioxus::prelude::*;
use prebuild_core::Configuration;

/// Get a configuration by ID.
///
/// An unknown or malformed ID yields `Ok(None)`; only infrastructure
/// failures are errors.
#[get("/api/configurations/:id")]
pub async fn get_configuration(id: String) -> Result<Option<Configuration>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::ConfigurationRepository;
        use prebuild_core::ConfigurationId;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let Ok(configuration_id) = ConfigurationId::parse(&id) else {
            tracing::debug!(id, "Rejecting malformed configuration id");
            return Ok(None);
        };

        ConfigurationRepository::find(&configuration_id)
            .await
            .map_err(|e| ServerFnError::new(format!("Database error: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// List all configurations.
#[get("/api/configurations")]
pub async fn list_configurations() -> Result<Vec<Configuration>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use db::repositories::ConfigurationRepository;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        ConfigurationRepository::list()
            .await
            .map_err(|e| ServerFnError::new(format!("Database error: {}", e)))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
