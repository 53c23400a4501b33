use dioxus::prelude::*;

/// Pill in the card corner; renders nothing for an empty label.
#[component]
pub fn StatusBadge(label: String) -> Element {
    if label.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "status-badge",
            span { class: "status-dot" }
            span { class: "status-text", "{label}" }
        }
    }
}
