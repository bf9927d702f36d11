//! Repository implementations for database operations.

mod configuration_repo;
mod prebuild_repo;

pub use configuration_repo::ConfigurationRepository;
pub use prebuild_repo::{PrebuildFilter, PrebuildRepository};

use surrealdb::sql::Thing;

/// Raw key of a record id, e.g. `cfg-1` for `configuration:⟨cfg-1⟩`.
fn record_key(id: Option<&Thing>) -> Option<String> {
    id.map(|thing| thing.id.to_raw())
}
