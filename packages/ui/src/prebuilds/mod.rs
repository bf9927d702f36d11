//! Prebuild list components for the dashboard.

mod configuration_cache;
mod configuration_field;
mod pages;
mod prebuild_list;
mod prebuild_row;
mod status_icon;

pub use configuration_cache::{ConfigurationCache, ConfigurationFetch, use_configuration};
pub use configuration_field::ConfigurationField;
pub use pages::{PrebuildsPage, RepositoryPage};
pub use prebuild_list::PrebuildList;
pub use prebuild_row::{PrebuildListItem, PrebuildRow, PrebuildRowProps};
pub use status_icon::PrebuildStatusIcon;
