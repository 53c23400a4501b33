//! Durable state behind the registration screen.

use std::collections::BTreeSet;

use airdrop_core::{
    format_reward, format_standard_date, format_token_amount, ActionError, AirdropSchedule, AirdropWindow,
    HistoryEvent, PortalError, StakeInfo, UiAlert, WindowStatus,
};
use chrono::{DateTime, Utc};

use crate::backend::ActionOutcome;
use crate::snapshot::PortalSnapshot;

/// Which screen action an outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalAction {
    Register,
    Claim,
    AutoStake,
}

impl PortalAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortalAction::Register => "register",
            PortalAction::Claim => "claim",
            PortalAction::AutoStake => "auto-stake",
        }
    }
}

/// The active window as the screen sees it at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveWindow {
    pub window: AirdropWindow,
    pub status: WindowStatus,
    /// 1-based position in the schedule.
    pub position: u32,
    pub total: u32,
    /// Instant the countdown runs towards.
    pub end_date: DateTime<Utc>,
}

/// Portal state: schedule, balances, history and the current alert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortalState {
    pub schedule: AirdropSchedule,
    pub stake_info: StakeInfo,
    /// Raw claimable reward for the active window.
    pub rewards: u64,
    pub history: Vec<HistoryEvent>,
    pub registered_windows: BTreeSet<u32>,
    pub alert: UiAlert,
}

impl PortalState {
    pub fn from_snapshot(snapshot: PortalSnapshot) -> Result<Self, PortalError> {
        let schedule = AirdropSchedule::new(snapshot.windows)?;
        Ok(Self {
            schedule,
            stake_info: snapshot.stake_info,
            rewards: snapshot.rewards,
            history: snapshot.history,
            registered_windows: snapshot.registered_windows.into_iter().collect(),
            alert: snapshot.ui_alert,
        })
    }

    /// Resolves the active window, its status and countdown target at `now`.
    pub fn active(&self, now: DateTime<Utc>) -> Option<ActiveWindow> {
        let window = self.schedule.resolve(now)?;
        let status = window.airdrop_window_status;
        let position = self.schedule.position(&window)?;
        Some(ActiveWindow {
            end_date: AirdropSchedule::countdown_target(&window, status),
            total: self.schedule.total_windows(),
            status,
            position,
            window,
        })
    }

    pub fn is_registered(&self, window_id: u32) -> bool {
        self.registered_windows.contains(&window_id)
    }

    /// Folds an action result into the state and hands it back unchanged.
    ///
    /// Success appends a history row and a success alert; failure replaces
    /// the alert with the error message.
    pub fn apply_result(
        &mut self,
        action: PortalAction,
        result: Result<ActionOutcome, ActionError>,
    ) -> Result<(), ActionError> {
        match result {
            Ok(outcome) => {
                self.apply_outcome(outcome);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(action = action.as_str(), error = %err, "action failed");
                self.alert = UiAlert::from(&err);
                Err(err)
            }
        }
    }

    fn apply_outcome(&mut self, outcome: ActionOutcome) {
        match outcome {
            ActionOutcome::Registered { window_id, at } => {
                self.registered_windows.insert(window_id);
                self.history.push(HistoryEvent::new(
                    format!("Window {window_id} registration"),
                    format!("Registered {}", format_standard_date(at)),
                ));
                self.alert = UiAlert::success(format!("Registered for window {window_id}"));
            }
            ActionOutcome::Claimed { window_id, amount } => {
                self.clear_balances();
                self.history.push(HistoryEvent::new(
                    format!("Window {window_id} claim"),
                    format_reward(amount),
                ));
                self.alert = UiAlert::success(format!("Claimed {} to your wallet", format_reward(amount)));
            }
            ActionOutcome::Staked {
                window_id,
                staked,
                token,
                to_wallet,
            } => {
                self.clear_balances();
                let staked = format!("{} {token}", format_token_amount(staked));
                self.history.push(HistoryEvent::new(
                    format!("Window {window_id} stake"),
                    format!("{staked} staked, {} to wallet", format_reward(to_wallet)),
                ));
                self.alert = UiAlert::success(format!("Staked {staked}"));
            }
        }
        tracing::info!(history = self.history.len(), "action applied");
    }

    fn clear_balances(&mut self) {
        self.rewards = 0;
        self.stake_info.stakable_tokens = 0;
        self.stake_info.claimable_tokens_to_wallet = 0;
    }
}
