use dioxus::prelude::*;

/// Top navigation bar; platform crates pass their own route links as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header { id: "navbar", class: "navbar",
            span { class: "navbar-brand", "Prebuilds" }
            nav { class: "navbar-links", {children} }
        }
    }
}
