//! Server API functions for the prebuilds dashboard.
//!
//! This crate contains all shared fullstack server functions for:
//! - Configuration lookup (single and list)
//! - Prebuild listing and lookup

mod configurations;
mod prebuilds;

#[cfg(feature = "server")]
mod config;

#[cfg(feature = "server")]
mod init;

#[cfg(feature = "server")]
mod seed;

// Re-export all server functions
pub use configurations::*;
pub use prebuilds::*;

#[cfg(feature = "server")]
pub use config::ServerConfig;

#[cfg(feature = "server")]
pub use init::*;

#[cfg(feature = "server")]
pub use seed::seed_demo_data;

// Re-export core types for convenience
pub use prebuild_core::{Configuration, ConfigurationId, Prebuild, PrebuildId};
