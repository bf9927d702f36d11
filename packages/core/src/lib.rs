//! Core domain types for the prebuilds dashboard.
//!
//! This crate contains shared types used across all packages:
//! - Prebuild, its status and the commit that triggered it
//! - Configuration (the repository a prebuild belongs to) and its lookup state
//! - Display helpers for dates, commit messages and status badges

mod configuration;
mod display;
mod id;
mod prebuild;

pub use configuration::{Configuration, ConfigurationId, ConfigurationLookup};
pub use display::{
    PrebuildDisplay, StatusIcon, TriggeredTime, format_date, format_local, short_commit_message,
};
pub use id::IdError;
pub use prebuild::{Author, Commit, Prebuild, PrebuildId, PrebuildPhase, PrebuildStatus};
