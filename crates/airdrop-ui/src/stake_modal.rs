//! Stake-selection modal.
//!
//! Follows the overlay pattern: backdrop click closes, clicks inside the
//! dialog stop propagation.

use airdrop_core::{StakeInfo, StakeModal};
use dioxus::prelude::*;

const SINGULARITYNET_URL: &str = "https://singularitynet.io/";

/// Lets the user confirm routing their reward into the stake pool.
///
/// Cancel and backdrop clicks flip the modal shut. Confirm only fires
/// `on_confirm`; the caller's dispatcher is responsible for closing.
#[component]
pub fn StakeModalOverlay(
    mut modal: Signal<StakeModal>,
    stake_info: StakeInfo,
    on_confirm: EventHandler<()>,
) -> Element {
    if !modal().is_open() {
        return rsx! {};
    }

    let stakable = stake_info.stakable_display();
    let claimable = stake_info.claimable_display();

    rsx! {
        div {
            class: "stake-modal-overlay",
            onclick: move |_| modal.write().toggle(),

            div {
                class: "stake-modal",
                role: "dialog",
                "aria-labelledby": "stake-modal-title",
                "aria-describedby": "stake-modal-description",
                onclick: move |e| e.stop_propagation(),

                h2 { id: "stake-modal-title", class: "stake-modal-title", "Select Your Stake Type" }
                p {
                    id: "stake-modal-description",
                    class: "stake-modal-description",
                    "Please select the SingularityDAO stake pool for your airdrop reward."
                }

                div { class: "stake-modal-row",
                    span { class: "stake-modal-label", "Token to be Staked" }
                    span { class: "stake-modal-amount", "{stakable}" }
                }
                div { class: "stake-modal-row",
                    span { class: "stake-modal-label", "Tokens to be Claimed into Wallet" }
                    span { class: "stake-modal-amount", "{claimable}" }
                }

                div { class: "stake-modal-footer",
                    a {
                        class: "stake-modal-link",
                        href: SINGULARITYNET_URL,
                        target: "_blank",
                        rel: "noreferrer",
                        "Visit SingularityNET"
                    }
                    button {
                        class: "btn btn-outlined",
                        onclick: move |_| modal.write().toggle(),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_confirm.call(()),
                        "Stake"
                    }
                }
            }
        }
    }
}
