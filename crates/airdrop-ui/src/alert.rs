use airdrop_core::{AlertSeverity, UiAlert};
use dioxus::prelude::*;

/// Severity-coloured alert. Renders nothing when the message is empty.
#[component]
pub fn AlertBanner(alert: UiAlert) -> Element {
    if !alert.is_visible() {
        return rsx! {};
    }

    let severity = alert.severity.css_value();
    let icon = match alert.severity {
        AlertSeverity::Success => "✓",
        AlertSeverity::Info => "i",
        AlertSeverity::Warning => "!",
        AlertSeverity::Error => "✕",
    };

    rsx! {
        div {
            class: "alert alert-{severity}",
            role: "alert",
            span { class: "alert-icon", "{icon}" }
            span { class: "alert-message", "{alert.message}" }
        }
    }
}
