//! Shared, keyed cache of configuration lookups.
//!
//! Every row of a prebuild list needs the name of its repository, and most
//! rows share a handful of repositories. The cache fetches each configuration
//! once and lets all rows subscribe to the same entry.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use prebuild_core::{ConfigurationId, ConfigurationLookup};

/// Resolves one configuration id into a lookup state.
pub type ConfigurationFetch =
    fn(ConfigurationId) -> Pin<Box<dyn Future<Output = ConfigurationLookup>>>;

/// Fetch through the `get_configuration` server function.
fn fetch_from_api(id: ConfigurationId) -> Pin<Box<dyn Future<Output = ConfigurationLookup>>> {
    Box::pin(async move {
        let response = api::get_configuration(id.to_string()).await;
        if let Err(e) = &response {
            tracing::warn!(%id, error = %e, "Configuration lookup failed");
        }
        ConfigurationLookup::from_response(response)
    })
}

/// Configuration lookups keyed by id, provided once at the app root.
#[derive(Clone, Copy)]
pub struct ConfigurationCache {
    entries: Signal<HashMap<ConfigurationId, ConfigurationLookup>>,
    fetch: ConfigurationFetch,
}

impl ConfigurationCache {
    /// Create an empty cache backed by the server API, owned by the current
    /// scope.
    ///
    /// Call from `use_context_provider` in the root component.
    pub fn new() -> Self {
        Self::with_fetch(fetch_from_api)
    }

    /// Create an empty cache that resolves ids with `fetch`.
    pub fn with_fetch(fetch: ConfigurationFetch) -> Self {
        Self {
            entries: Signal::new(HashMap::new()),
            fetch,
        }
    }

    /// Current state for `id`; unknown keys read as loading.
    ///
    /// Subscribes the calling component to cache updates.
    pub fn get(&self, id: &ConfigurationId) -> ConfigurationLookup {
        self.entries
            .read()
            .get(id)
            .cloned()
            .unwrap_or(ConfigurationLookup::Loading)
    }

    /// Store a lookup result directly.
    pub fn insert(&self, id: ConfigurationId, lookup: ConfigurationLookup) {
        let mut entries = self.entries;
        entries.write().insert(id, lookup);
    }

    /// Fetch `id` unless it is already resolved or in flight.
    ///
    /// Failed entries are fetched again.
    pub fn request(&self, id: ConfigurationId) {
        let cached = self.entries.peek().get(&id).cloned();
        if matches!(
            cached,
            Some(ConfigurationLookup::Loading | ConfigurationLookup::Resolved { .. })
        ) {
            return;
        }

        self.insert(id.clone(), ConfigurationLookup::Loading);

        let cache = *self;
        // Root scope: the entry must settle even if the requesting row unmounts.
        spawn_forever(async move {
            tracing::debug!(%id, "Fetching configuration");
            let lookup = (cache.fetch)(id.clone()).await;
            cache.insert(id, lookup);
        });
    }
}

impl Default for ConfigurationCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up a configuration through the app-wide [`ConfigurationCache`].
///
/// Returns `Loading` until the first response arrives. Re-requests when `id`
/// changes.
pub fn use_configuration(id: ConfigurationId) -> ConfigurationLookup {
    let cache = use_context::<ConfigurationCache>();

    use_effect(use_reactive((&id,), move |(id,)| cache.request(id)));

    cache.get(&id)
}
