//! Derived state for the registration screen.
//!
//! Everything the screen computes on a render lives here so it can be
//! tested without a renderer. The component feeds in its props and a
//! sampled `now` and reads back what to show.

use chrono::{DateTime, Utc};

use crate::stake::StakeInfo;
use crate::units::format_reward;
use crate::window::{AirdropWindow, WindowStatus};

/// Which mutually exclusive set of buttons the screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSurface {
    /// Stake and Claim-to-Wallet.
    Claim { stake_enabled: bool },
    /// View-Schedule, plus Register-Now during registration.
    Schedule { show_register: bool },
}

impl ActionSurface {
    pub fn resolve(status: Option<WindowStatus>, claim_active: bool, stake_info: &StakeInfo) -> Self {
        match status {
            Some(WindowStatus::Claim) if claim_active => ActionSurface::Claim {
                stake_enabled: stake_info.is_stakable,
            },
            other => ActionSurface::Schedule {
                show_register: other == Some(WindowStatus::Registration),
            },
        }
    }

    pub fn is_claim(&self) -> bool {
        matches!(self, ActionSurface::Claim { .. })
    }
}

/// Per-render view model of the registration screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationView {
    pub registration_active: bool,
    pub claim_active: bool,
    /// Status badge text; empty outside both active periods.
    pub badge: &'static str,
    /// Phase noun from the active window's own status.
    pub phase_label: &'static str,
    /// Phase verb from the active window's own status.
    pub phase_action: &'static str,
    pub actions: ActionSurface,
    /// Reward text, present only on the claim surface.
    pub rewards_text: Option<String>,
}

impl RegistrationView {
    /// Derives the view, or `None` when there is no active window.
    ///
    /// Labels follow `window.airdrop_window_status`; the badge and the
    /// action surface follow the separately supplied `status`.
    pub fn derive(
        window: Option<&AirdropWindow>,
        status: Option<WindowStatus>,
        rewards: u64,
        stake_info: &StakeInfo,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        let window = window?;

        let claim_active = window.is_claim_active(now);
        let registration_active = window.is_registration_active(now);

        let badge = match status {
            Some(status) if registration_active || claim_active => status.badge_label(),
            _ => "",
        };

        let actions = ActionSurface::resolve(status, claim_active, stake_info);
        let rewards_text = actions.is_claim().then(|| format_reward(rewards));

        Some(Self {
            registration_active,
            claim_active,
            badge,
            phase_label: window.airdrop_window_status.phase_label(),
            phase_action: window.airdrop_window_status.phase_action(),
            actions,
            rewards_text,
        })
    }

    pub fn headline(&self, current_window_id: u32, total_windows: u32) -> String {
        headline(self.phase_label, self.phase_action, current_window_id, total_windows)
    }
}

/// Builds `Vesting {noun} window {current} / {total} {verb}:`.
pub fn headline(phase_label: &str, phase_action: &str, current: u32, total: u32) -> String {
    format!("Vesting {phase_label} window {current} / {total} {phase_action}:")
}
