//! Server configuration read from the environment.

use db::DbConfig;

/// Engine URL, e.g. `mem://`, `rocksdb://./data/prebuilds`, `ws://db:8000`.
const ENV_DB_ENDPOINT: &str = "PREBUILDS_DB_ENDPOINT";
const ENV_DB_NAMESPACE: &str = "PREBUILDS_DB_NAMESPACE";
const ENV_DB_DATABASE: &str = "PREBUILDS_DB_DATABASE";
const ENV_DB_USER: &str = "PREBUILDS_DB_USER";
const ENV_DB_PASSWORD: &str = "PREBUILDS_DB_PASSWORD";
/// Seed demo repositories and prebuilds into an empty store.
const ENV_SEED_DEMO: &str = "PREBUILDS_SEED_DEMO";

/// Settings the server needs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub db: DbConfig,
    pub seed_demo: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            db: DbConfig::memory(),
            seed_demo: true,
        }
    }
}

impl ServerConfig {
    /// Read settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENV_DB_ENDPOINT).filter(|v| !v.is_empty()) {
            config.db = DbConfig::endpoint(endpoint);
        }
        if let Some(namespace) = lookup(ENV_DB_NAMESPACE).filter(|v| !v.is_empty()) {
            config.db = config.db.with_namespace(namespace);
        }
        if let Some(database) = lookup(ENV_DB_DATABASE).filter(|v| !v.is_empty()) {
            config.db = config.db.with_database(database);
        }
        if let (Some(user), Some(password)) = (lookup(ENV_DB_USER), lookup(ENV_DB_PASSWORD)) {
            config.db = config.db.with_credentials(user, password);
        }
        if let Some(seed) = lookup(ENV_SEED_DEMO) {
            match parse_flag(&seed) {
                Some(flag) => config.seed_demo = flag,
                None => tracing::warn!(value = %seed, "Unrecognized {ENV_SEED_DEMO}, keeping default"),
            }
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_to_seeded_memory_store() {
        assert_eq!(config_from(&[]), ServerConfig::default());
        assert_eq!(ServerConfig::default().db.endpoint, "mem://");
    }

    #[test]
    fn reads_database_settings() {
        let config = config_from(&[
            (ENV_DB_ENDPOINT, "rocksdb://./data"),
            (ENV_DB_NAMESPACE, "dash"),
            (ENV_DB_DATABASE, "prod"),
            (ENV_DB_USER, "root"),
            (ENV_DB_PASSWORD, "secret"),
        ]);
        assert_eq!(config.db.endpoint, "rocksdb://./data");
        assert_eq!(config.db.namespace, "dash");
        assert_eq!(config.db.database, "prod");
        assert_eq!(
            config.db.credentials,
            Some(("root".to_string(), "secret".to_string()))
        );
    }

    #[test]
    fn seed_flag_accepts_common_spellings() {
        assert!(!config_from(&[(ENV_SEED_DEMO, "false")]).seed_demo);
        assert!(!config_from(&[(ENV_SEED_DEMO, "0")]).seed_demo);
        assert!(config_from(&[(ENV_SEED_DEMO, "YES")]).seed_demo);
        assert!(config_from(&[(ENV_SEED_DEMO, "maybe")]).seed_demo);
    }

    #[test]
    fn credentials_need_both_parts() {
        let config = config_from(&[(ENV_DB_USER, "root")]);
        assert!(config.db.credentials.is_none());
    }
}
