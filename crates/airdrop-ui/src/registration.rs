//! The airdrop registration / claim screen.

use airdrop_core::{
    auto_stake, format_standard_date, run_with_loader, ActionSurface, AirdropWindow,
    HistoryEvent, RegistrationView, StakeInfo, StakeModal, UiAlert, WindowStatus,
};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::action::AsyncAction;
use crate::alert::AlertBanner;
use crate::countdown::FlipCountdown;
use crate::history::History;
use crate::loading_button::{ButtonVariant, LoadingButton};
use crate::stake_modal::StakeModalOverlay;
use crate::status_badge::StatusBadge;

/// Registration and claim screen for the active airdrop window.
///
/// Renders nothing without an `active_window`. `now` pins the clock used
/// for the window checks; when absent the wall clock is read once per
/// render. `on_view_rules` and `airdrop_window_total_tokens` are accepted
/// for callers that pass them but are not rendered.
#[component]
pub fn AirdropRegistration(
    current_window_id: u32,
    total_windows: u32,
    airdrop_window_total_tokens: Option<u64>,
    end_date: DateTime<Utc>,
    on_register: AsyncAction,
    on_view_schedule: EventHandler<()>,
    on_view_rules: Option<EventHandler<()>>,
    history: Vec<HistoryEvent>,
    on_claim: AsyncAction,
    on_auto_stake: AsyncAction,
    stake_info: StakeInfo,
    airdrop_window_status: Option<WindowStatus>,
    ui_alert: UiAlert,
    active_window: Option<AirdropWindow>,
    airdrop_window_rewards: u64,
    now: Option<DateTime<Utc>>,
) -> Element {
    let mut registration_loader = use_signal(|| false);
    let mut claim_loader = use_signal(|| false);
    let mut stake_modal = use_signal(StakeModal::default);

    let Some(view) = RegistrationView::derive(
        active_window.as_ref(),
        airdrop_window_status,
        airdrop_window_rewards,
        &stake_info,
        now.unwrap_or_else(Utc::now),
    ) else {
        return rsx! {};
    };

    let headline = view.headline(current_window_id, total_windows);
    let formatted_date = format_standard_date(end_date);

    let handle_registration_click = {
        let on_register = on_register.clone();
        move |_: MouseEvent| {
            let on_register = on_register.clone();
            tracing::debug!("register clicked");
            spawn(async move {
                let result = run_with_loader(move |v| registration_loader.set(v), move || on_register.call()).await;
                if let Err(e) = result {
                    tracing::warn!(error = %e, "registration action failed");
                }
            });
        }
    };

    let handle_claim_click = {
        let on_claim = on_claim.clone();
        move |_: MouseEvent| {
            let on_claim = on_claim.clone();
            tracing::debug!("claim clicked");
            spawn(async move {
                let result = run_with_loader(move |v| claim_loader.set(v), move || on_claim.call()).await;
                if let Err(e) = result {
                    tracing::warn!(error = %e, "claim action failed");
                }
            });
        }
    };

    let handle_stake_confirm = {
        let on_auto_stake = on_auto_stake.clone();
        move |_: ()| {
            let on_auto_stake = on_auto_stake.clone();
            tracing::debug!("auto-stake confirmed");
            spawn(async move {
                let result = auto_stake(
                    move || stake_modal.write().close(),
                    move |v| claim_loader.set(v),
                    move || on_auto_stake.call(),
                )
                .await;
                if let Err(e) = result {
                    tracing::warn!(error = %e, "auto-stake action failed");
                }
            });
        }
    };

    rsx! {
        StakeModalOverlay {
            modal: stake_modal,
            stake_info: stake_info.clone(),
            on_confirm: handle_stake_confirm,
        }

        div { class: "airdrop-registration",
            div { class: "gradient-card",
                StatusBadge { label: view.badge.to_string() }

                div { class: "registration-headline",
                    h2 { class: "headline-title", "{headline}" }
                    h2 { class: "headline-date", "{formatted_date}" }
                }

                FlipCountdown { end_date, now }

                if let Some(rewards) = &view.rewards_text {
                    div { class: "claim-rewards",
                        p { class: "claim-rewards-caption", "Tokens available to claim" }
                        h1 { class: "claim-rewards-amount", "{rewards}" }
                    }
                    div { class: "claim-note",
                        span { class: "claim-note-icon", "i" }
                        p {
                            "You can start claiming your tokens now. "
                            "It is possible to claim all tokens in the last window "
                            "which will save you gas fees."
                        }
                    }
                }

                div { class: "alert-slot",
                    AlertBanner { alert: ui_alert }
                }

                div { class: "registration-actions",
                    match view.actions {
                        ActionSurface::Claim { stake_enabled } => rsx! {
                            div { class: "action-row",
                                LoadingButton {
                                    label: "Stake".to_string(),
                                    loading: claim_loader(),
                                    disabled: !stake_enabled,
                                    variant: ButtonVariant::Secondary,
                                    wide: true,
                                    onclick: move |_| stake_modal.write().toggle(),
                                }
                                LoadingButton {
                                    label: "Claim to Wallet".to_string(),
                                    loading: claim_loader(),
                                    wide: true,
                                    onclick: handle_claim_click,
                                }
                            }
                        },
                        ActionSurface::Schedule { show_register } => rsx! {
                            div { class: "action-slot",
                                if show_register {
                                    LoadingButton {
                                        label: "Register Now".to_string(),
                                        loading: registration_loader(),
                                        variant: ButtonVariant::Secondary,
                                        onclick: handle_registration_click,
                                    }
                                }
                            }
                            div { class: "action-slot",
                                button {
                                    class: "btn btn-secondary btn-narrow",
                                    onclick: move |_| on_view_schedule.call(()),
                                    "View Schedule"
                                }
                            }
                        },
                    }
                }

                History { events: history }
            }
        }
    }
}
