// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use ui::Navbar;
use ui::prebuilds::{ConfigurationCache, PrebuildsPage, RepositoryPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DashboardLayout)]
        #[route("/")]
        Home {},
        #[route("/prebuilds")]
        Prebuilds {},
        #[route("/repositories/:id")]
        Repository { id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ConfigurationCache::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Shared page chrome: navbar above the routed page.
#[component]
fn DashboardLayout() -> Element {
    rsx! {
        Navbar {
            Link {
                to: Route::Prebuilds {},
                class: "nav-link",
                active_class: "active",
                "Prebuilds"
            }
        }

        main { class: "dashboard-main",
            Outlet::<Route> {}
        }
    }
}

/// Redirect / to /prebuilds.
#[component]
fn Home() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::Prebuilds {});
    });
    rsx! {}
}

/// Prebuilds list page.
#[component]
fn Prebuilds() -> Element {
    rsx! {
        PrebuildsPage {}
    }
}

/// Repository page.
#[component]
fn Repository(id: String) -> Element {
    rsx! {
        RepositoryPage { id }
    }
}
