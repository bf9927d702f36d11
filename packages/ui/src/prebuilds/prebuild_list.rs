//! Prebuild list component for displaying prebuilds in a table.

use dioxus::prelude::*;
use prebuild_core::Prebuild;

use super::PrebuildListItem;

/// Props for PrebuildList component.
#[derive(Props, Clone, PartialEq)]
pub struct PrebuildListProps {
    /// Prebuilds to display, already ordered.
    pub prebuilds: Vec<Prebuild>,
    /// Whether loading.
    #[props(default = false)]
    pub loading: bool,
}

/// Table of prebuilds, one [`PrebuildListItem`] per row.
#[component]
pub fn PrebuildList(props: PrebuildListProps) -> Element {
    rsx! {
        div { class: "prebuild-list",
            if props.loading {
                div { class: "loading", "Loading prebuilds..." }
            } else if props.prebuilds.is_empty() {
                div { class: "empty-state",
                    p { "No prebuilds found" }
                    p { class: "hint", "Prebuilds appear here once a commit triggers one" }
                }
            } else {
                div { class: "table-container",
                    table { class: "data-table prebuild-table",
                        thead {
                            tr {
                                th { "Repository" }
                                th { class: "hide-sm", "Commit" }
                                th { class: "hide-sm", "Triggered" }
                                th { "Status" }
                                th { span { class: "sr-only", "Actions" } }
                            }
                        }
                        tbody {
                            for prebuild in props.prebuilds.iter() {
                                PrebuildListItem {
                                    key: "{prebuild.id}",
                                    prebuild: prebuild.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
