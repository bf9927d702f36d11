//! Prebuild row component for displaying a single prebuild in a table.

use chrono::{DateTime, Local};
use dioxus::prelude::*;
use prebuild_core::{
    ConfigurationLookup, Prebuild, PrebuildDisplay, TriggeredTime, short_commit_message,
};

use super::{ConfigurationField, PrebuildStatusIcon, use_configuration};

/// Props for PrebuildRow component.
#[derive(Props, Clone, PartialEq)]
pub struct PrebuildRowProps {
    /// The prebuild to display.
    pub prebuild: Prebuild,
    /// State of the owning repository lookup.
    pub configuration: ConfigurationLookup,
    /// Reference point for the relative trigger time.
    pub now: DateTime<Local>,
}

/// Table row summarizing one prebuild.
///
/// Pure over its props: repository and ref, commit, trigger time, status and
/// a (disabled) link to the prebuild's details. Any missing optional field
/// leaves its cell empty.
#[component]
pub fn PrebuildRow(props: PrebuildRowProps) -> Element {
    let prebuild = &props.prebuild;
    let display = PrebuildDisplay::classify(prebuild);
    let triggered = prebuild
        .start_time()
        .map(|start| TriggeredTime::new(start, &props.now));
    let commit = prebuild
        .commit_author()
        .map(|(commit, author)| (short_commit_message(&commit.message), author.clone()));
    let details_path = prebuild.id.details_path();

    rsx! {
        tr { class: "prebuild-row",
            td { class: "prebuild-repository",
                div { class: "flex flex-col gap-1 w-52",
                    span { class: "text-sm text-primary font-semibold break-words",
                        ConfigurationField { lookup: props.configuration.clone() }
                    }
                    span { class: "text-xs text-muted break-words", "{prebuild.ref_name}" }
                }
            }

            td { class: "prebuild-commit hide-sm",
                if let Some((message, author)) = &commit {
                    div { class: "flex flex-col gap-1",
                        span { class: "text-sm text-secondary", "{message}" }
                        div { class: "flex gap-1 items-center",
                            img {
                                class: "w-5 h-5 rounded-full",
                                src: "{author.avatar_url}",
                                alt: "",
                            }
                            span { class: "text-xs break-all text-secondary", "{author.name}" }
                        }
                    }
                }
            }

            td { class: "prebuild-triggered hide-sm",
                if let Some(triggered) = &triggered {
                    span { class: "text-sm break-all text-secondary",
                        time {
                            datetime: "{triggered.datetime}",
                            title: "{triggered.title}",
                            "{triggered.label}"
                        }
                    }
                }
            }

            td { class: "prebuild-status",
                div { class: "flex flex-row gap-1.5 items-center capitalize",
                    PrebuildStatusIcon {
                        icon: display.icon,
                        class: "w-5 h-5 {display.color_class}",
                    }
                    span { class: "text-sm text-secondary", {display.label} }
                }
            }

            td { class: "prebuild-actions",
                // Details page is not available yet.
                a {
                    class: "btn btn-secondary btn-disabled",
                    href: "{details_path}",
                    aria_disabled: "true",
                    tabindex: "-1",
                    onclick: move |e: MouseEvent| e.prevent_default(),
                    "View"
                }
            }
        }
    }
}

/// Props for PrebuildListItem component.
#[derive(Props, Clone, PartialEq)]
pub struct PrebuildListItemProps {
    /// The prebuild to display.
    pub prebuild: Prebuild,
}

/// [`PrebuildRow`] wired to the configuration cache and the local clock.
#[component]
pub fn PrebuildListItem(props: PrebuildListItemProps) -> Element {
    let configuration = use_configuration(props.prebuild.configuration_id.clone());
    let now = Local::now();

    rsx! {
        PrebuildRow { prebuild: props.prebuild, configuration, now }
    }
}
