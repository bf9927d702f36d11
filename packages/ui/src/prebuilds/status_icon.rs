use dioxus::prelude::*;
use prebuild_core::StatusIcon;

/// Icon for a prebuild status; color comes from `class`.
#[component]
pub fn PrebuildStatusIcon(icon: StatusIcon, #[props(into, default)] class: String) -> Element {
    let glyph = match icon {
        StatusIcon::Pending => "◷",
        StatusIcon::Running => "◔",
        StatusIcon::Done => "✓",
        StatusIcon::Failed => "✕",
    };

    rsx! {
        span {
            class: "status-icon status-icon-{icon.as_str()} {class}",
            aria_hidden: "true",
            {glyph}
        }
    }
}
