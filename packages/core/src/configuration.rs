//! Configuration domain types: the repository a prebuild belongs to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{self, IdError};

/// Identifier of a configuration (owning repository).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigurationId(String);

impl ConfigurationId {
    /// Create a new unique configuration ID.
    pub fn new() -> Self {
        Self(id::generate())
    }

    /// Parse a configuration ID from a string.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        Ok(Self(id::validate(s)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Route of the repository page for this configuration.
    pub fn repository_path(&self) -> String {
        format!("/repositories/{}", self.0)
    }
}

impl Default for ConfigurationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConfigurationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persisted description of a repository that prebuilds run for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub id: ConfigurationId,
    /// Display name, usually `owner/repo`.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub clone_url: String,
    pub created_at: DateTime<Utc>,
}

impl Configuration {
    /// Create a new configuration with a fresh ID.
    pub fn new(name: impl Into<String>, clone_url: impl Into<String>) -> Self {
        Self {
            id: ConfigurationId::new(),
            name: name.into(),
            clone_url: clone_url.into(),
            created_at: Utc::now(),
        }
    }

    /// Replace the generated ID.
    pub fn with_id(mut self, id: ConfigurationId) -> Self {
        self.id = id;
        self
    }
}

/// Result of resolving a prebuild's owning configuration for display.
///
/// Only `Resolved` carries data, and only when both the name and the id are
/// usable, so a half-populated response can never produce a broken link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationLookup {
    /// The lookup has not produced a response yet.
    Loading,
    /// The lookup errored, found nothing, or returned an unusable record.
    Failed,
    /// The configuration exists and can be linked to.
    Resolved { id: ConfigurationId, name: String },
}

impl ConfigurationLookup {
    /// Classify a lookup response.
    pub fn from_response<E>(response: Result<Option<Configuration>, E>) -> Self {
        match response {
            Ok(Some(configuration)) => Self::from_configuration(configuration),
            Ok(None) | Err(_) => Self::Failed,
        }
    }

    fn from_configuration(configuration: Configuration) -> Self {
        if configuration.name.is_empty() || configuration.id.is_empty() {
            return Self::Failed;
        }
        Self::Resolved {
            id: configuration.id,
            name: configuration.name,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}
