//! Schedule overlay listing every airdrop window.

use airdrop_core::{format_standard_date, AirdropSchedule, AirdropWindow};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

/// Full window schedule with each window's status at `now`.
#[component]
pub fn ScheduleOverlay(mut is_open: Signal<bool>, windows: Vec<AirdropWindow>, now: DateTime<Utc>) -> Element {
    if !is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "schedule-overlay",
            onclick: move |_| is_open.set(false),

            div {
                class: "schedule-dialog",
                role: "dialog",
                "aria-labelledby": "schedule-title",
                onclick: move |e| e.stop_propagation(),

                div { class: "schedule-header",
                    h2 { id: "schedule-title", class: "schedule-title", "Airdrop Schedule" }
                    button {
                        class: "schedule-close",
                        onclick: move |_| is_open.set(false),
                        "×"
                    }
                }

                if windows.is_empty() {
                    p { class: "schedule-empty", "No airdrop windows scheduled" }
                }

                ol { class: "schedule-list",
                    for window in windows.iter() {
                        ScheduleRow {
                            key: "{window.airdrop_window_id}",
                            window: window.clone(),
                            now,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ScheduleRow(window: AirdropWindow, now: DateTime<Utc>) -> Element {
    let status = AirdropSchedule::status_at(&window, now);
    let name = window.display_name();
    let status_class = format!("schedule-status status-{}", status.as_str().to_lowercase());
    let rows = [
        ("Registration opens", window.airdrop_window_registration_start_period),
        ("Registration closes", window.airdrop_window_registration_end_period),
        ("Claim opens", window.airdrop_window_claim_start_period),
        ("Claim closes", window.airdrop_window_claim_end_period),
    ];

    rsx! {
        li { class: "schedule-row",
            div { class: "schedule-row-header",
                span { class: "schedule-name", "{name}" }
                span { class: "{status_class}", "{status}" }
            }
            dl { class: "schedule-dates",
                for (label, date) in rows {
                    dt { "{label}" }
                    dd { "{format_standard_date(date)}" }
                }
            }
        }
    }
}
