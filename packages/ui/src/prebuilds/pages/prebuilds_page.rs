//! Prebuilds page - lists recent prebuilds across all repositories.

use dioxus::prelude::*;

use crate::prebuilds::PrebuildList;

/// Refresh interval in milliseconds (10 seconds).
const REFRESH_INTERVAL_MS: u32 = 10_000;

/// Prebuilds page component.
#[component]
pub fn PrebuildsPage() -> Element {
    let mut prebuilds = use_resource(|| async move { api::list_prebuilds(None, None).await });

    // Reload while any listed prebuild is still queued or building
    let _refresh = use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        loop {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::TimeoutFuture::new(REFRESH_INTERVAL_MS).await;

            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_millis(REFRESH_INTERVAL_MS as u64))
                .await;

            let in_progress = prebuilds
                .peek()
                .as_ref()
                .and_then(|result| result.as_ref().ok())
                .is_some_and(|list| list.iter().any(|p| p.is_in_progress()));

            if in_progress {
                prebuilds.restart();
            }
        }
    });

    let state = prebuilds
        .read()
        .as_ref()
        .map(|result| result.as_ref().map(Clone::clone).map_err(|e| e.to_string()));
    let auto_refreshing = matches!(&state, Some(Ok(list)) if list.iter().any(|p| p.is_in_progress()));

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Prebuilds" }
                    p { class: "page-description", "Recent prebuilds across all repositories" }
                    if auto_refreshing {
                        span { class: "auto-refresh-indicator", "Auto-refreshing" }
                    }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| prebuilds.restart(),
                        "Refresh"
                    }
                }
            }

            div { class: "card",
                {
                    match state {
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
