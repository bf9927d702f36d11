//! Repository page - one configuration and its prebuilds.

use dioxus::prelude::*;
use prebuild_core::ConfigurationLookup;

use crate::prebuilds::{ConfigurationField, PrebuildList};

/// Props for RepositoryPage.
#[derive(Props, Clone, PartialEq)]
pub struct RepositoryPageProps {
    /// Configuration id from the route.
    pub id: String,
}

/// Repository page component.
#[component]
pub fn RepositoryPage(props: RepositoryPageProps) -> Element {
    let configuration = use_resource(use_reactive((&props.id,), |(id,)| async move {
        ConfigurationLookup::from_response(api::get_configuration(id).await)
    }));

    let prebuilds = use_resource(use_reactive((&props.id,), |(id,)| async move {
        api::list_prebuilds(Some(id), None).await
    }));

    let lookup = configuration
        .read()
        .clone()
        .unwrap_or(ConfigurationLookup::Loading);

    let prebuild_state = prebuilds
        .read()
        .as_ref()
        .map(|result| result.as_ref().map(Clone::clone).map_err(|e| e.to_string()));

    rsx! {
        div { class: "page-container",
            nav { class: "breadcrumb",
                Link { to: "/prebuilds", class: "breadcrumb-link", "Prebuilds" }
                span { class: "breadcrumb-separator", "/" }
                span { class: "breadcrumb-current", "Repository" }
            }

            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title",
                        ConfigurationField { lookup: lookup.clone() }
                    }
                    p { class: "page-description repository-id", "{props.id}" }
                }
            }

            if !lookup.is_failed() {
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Prebuilds" }
                    }
                    {
                        match prebuild_state {
                            None => rsx! {
                                PrebuildList { prebuilds: Vec::new(), loading: true }
                            },
                            Some(Err(err)) => rsx! {
                                div { class: "error-banner",
                                    span { "Failed to load prebuilds: {err}" }
                                }
                            },
                            Some(Ok(list)) => rsx! {
                                PrebuildList { prebuilds: list }
                            },
                        }
                    }
                }
            }
        }
    }
}
