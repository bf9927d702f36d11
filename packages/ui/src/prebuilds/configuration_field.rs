//! Repository name cell for a prebuild row.

use dioxus::prelude::*;
use prebuild_core::ConfigurationLookup;

/// Text shown when the owning repository cannot be resolved.
pub const UNKNOWN_REPOSITORY: &str = "Unknown repository";

/// Renders a configuration lookup: a spinner while loading, a fallback label
/// when it failed, otherwise the repository name linking to its page.
#[component]
pub fn ConfigurationField(lookup: ConfigurationLookup) -> Element {
    match lookup {
        ConfigurationLookup::Loading => rsx! {
            span {
                class: "loading-state",
                role: "status",
                aria_label: "Loading",
                span { class: "spinner spinner-16" }
            }
        },
        ConfigurationLookup::Failed => rsx! {
            span { class: "configuration-unknown", {UNKNOWN_REPOSITORY} }
        },
        ConfigurationLookup::Resolved { id, name } => rsx! {
            Link { to: id.repository_path(), class: "configuration-link", "{name}" }
        },
    }
}
