//! Root application component for the airdrop portal.

use std::rc::Rc;

use airdrop_ui::{AirdropRegistration, AsyncAction, ThemeSwitcher, ThemedRoot};
use dioxus::prelude::*;
use tokio::time::{sleep, Duration};

use crate::backend::PortalBackend;
use crate::clock;
use crate::state::{PortalAction, PortalState};

use super::ScheduleOverlay;

/// Shared handle to the backend, provided as context by the launcher.
pub type SharedBackend = Rc<dyn PortalBackend>;

/// Root application component.
///
/// Owns the 1 s refresh tick and wires the screen's actions to the backend.
#[component]
pub fn App(state: Signal<PortalState>) -> Element {
    let mut now = use_signal(clock::now);
    let mut schedule_open = use_signal(|| false);
    let backend = use_context::<SharedBackend>();

    use_future(move || async move {
        while !clock::is_shutdown_requested() {
            sleep(Duration::from_secs(1)).await;
            now.set(clock::now());
        }
    });

    let on_register = use_hook(|| {
        let backend = backend.clone();
        AsyncAction::new(move || {
            let backend = backend.clone();
            let mut state = state;
            async move {
                let at = clock::now();
                let Some(active) = state.read().active(at) else {
                    return Ok(());
                };
                tracing::debug!(window_id = active.window.airdrop_window_id, "registering");
                let result = backend.register(&active.window, at).await;
                state.write().apply_result(PortalAction::Register, result)
            }
        })
    });

    let on_claim = use_hook(|| {
        let backend = backend.clone();
        AsyncAction::new(move || {
            let backend = backend.clone();
            let mut state = state;
            async move {
                let (active, amount) = {
                    let current = state.read();
                    (current.active(clock::now()), current.rewards)
                };
                let Some(active) = active else {
                    return Ok(());
                };
                tracing::debug!(window_id = active.window.airdrop_window_id, amount, "claiming");
                let result = backend.claim(&active.window, amount).await;
                state.write().apply_result(PortalAction::Claim, result)
            }
        })
    });

    let on_auto_stake = use_hook(|| {
        let backend = backend.clone();
        AsyncAction::new(move || {
            let backend = backend.clone();
            let mut state = state;
            async move {
                let (active, stake_info) = {
                    let current = state.read();
                    (current.active(clock::now()), current.stake_info.clone())
                };
                let Some(active) = active else {
                    return Ok(());
                };
                tracing::debug!(window_id = active.window.airdrop_window_id, "auto-staking");
                let result = backend.auto_stake(&active.window, &stake_info).await;
                state.write().apply_result(PortalAction::AutoStake, result)
            }
        })
    });

    let current = now();
    let portal = state.read();
    let active = portal.active(current);
    let registered = active
        .as_ref()
        .is_some_and(|a| portal.is_registered(a.window.airdrop_window_id));
    let window_name = active.as_ref().map(|a| a.window.display_name());

    rsx! {
        ThemedRoot {
            div {
                class: "portal",

                Header { window_name, registered }

                main {
                    class: "portal-main",

                    match active {
                        Some(active) => rsx! {
                            AirdropRegistration {
                                current_window_id: active.position,
                                total_windows: active.total,
                                airdrop_window_total_tokens: active.window.airdrop_window_total_tokens,
                                end_date: active.end_date,
                                on_register: on_register.clone(),
                                on_view_schedule: move |_| schedule_open.set(true),
                                history: portal.history.clone(),
                                on_claim: on_claim.clone(),
                                on_auto_stake: on_auto_stake.clone(),
                                stake_info: portal.stake_info.clone(),
                                airdrop_window_status: Some(active.status),
                                ui_alert: portal.alert.clone(),
                                active_window: Some(active.window),
                                airdrop_window_rewards: portal.rewards,
                                now: Some(current),
                            }
                        },
                        None => rsx! {
                            div { class: "portal-empty", "No airdrop windows scheduled" }
                        },
                    }
                }

                ScheduleOverlay {
                    is_open: schedule_open,
                    windows: portal.schedule.windows().to_vec(),
                    now: current,
                }
            }
        }
    }
}

/// Header with title, active window and registration indicator.
#[component]
fn Header(window_name: Option<String>, registered: bool) -> Element {
    let frozen = clock::is_frozen();

    rsx! {
        header {
            class: "header",

            div {
                class: "header-left",
                h1 {
                    class: "header-title",
                    "Airdrop Portal"
                }
                if let Some(name) = window_name {
                    span {
                        class: "header-window",
                        "{name}"
                    }
                }
            }

            div {
                class: "header-right",

                div {
                    class: if registered { "status-indicator status-active" } else { "status-indicator status-inactive" },
                    span {
                        class: "status-dot",
                    }
                    span {
                        class: "status-text",
                        if registered { "Registered" } else { "Not registered" }
                    }
                }

                if frozen {
                    div {
                        class: "status-indicator status-frozen",
                        span {
                            class: "status-text",
                            "Clock frozen"
                        }
                    }
                }

                ThemeSwitcher {}
            }
        }
    }
}

/// Shown while the snapshot is being read.
#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        ThemedRoot {
            div { class: "portal-loading",
                div { class: "spinner" }
                p { "Loading airdrop schedule…" }
            }
        }
    }
}

/// Shown when the snapshot could not be loaded.
#[component]
pub fn LoadErrorScreen(message: String) -> Element {
    rsx! {
        ThemedRoot {
            div { class: "portal-error",
                h2 { "Unable to load the airdrop schedule" }
                p { class: "portal-error-message", "{message}" }
            }
        }
    }
}
