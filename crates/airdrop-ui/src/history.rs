use airdrop_core::HistoryEvent;
use dioxus::prelude::*;

/// Vesting history rows in the order given. Renders nothing when empty.
#[component]
pub fn History(events: Vec<HistoryEvent>) -> Element {
    if events.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "history",
            h3 { class: "history-title", "Your Vesting History" }
            ul { class: "history-list",
                for (idx, event) in events.iter().enumerate() {
                    li {
                        key: "{idx}",
                        class: "history-row",
                        span { class: "history-label", "{event.label}" }
                        span { class: "history-value", "{event.value}" }
                    }
                }
            }
        }
    }
}
