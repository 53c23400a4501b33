//! Airdrop windows and their status tags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date::check_date_is_between;
use crate::error::PortalError;

/// Phase tag of an airdrop window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WindowStatus {
    Upcoming,
    Registration,
    Idle,
    Claim,
}

impl WindowStatus {
    /// Noun naming the sub-period the headline talks about.
    pub fn phase_label(&self) -> &'static str {
        match self {
            WindowStatus::Upcoming | WindowStatus::Registration => "registration",
            WindowStatus::Idle | WindowStatus::Claim => "claim",
        }
    }

    /// Verb describing what happens at the countdown target.
    pub fn phase_action(&self) -> &'static str {
        match self {
            WindowStatus::Upcoming | WindowStatus::Idle => "opens",
            WindowStatus::Registration => "closes",
            WindowStatus::Claim => "claim",
        }
    }

    /// Badge text for this status. Empty when the status has no badge.
    pub fn badge_label(&self) -> &'static str {
        match self {
            WindowStatus::Claim => "Vesting Open",
            WindowStatus::Registration => "Registration Open",
            WindowStatus::Upcoming | WindowStatus::Idle => "",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WindowStatus::Upcoming => "UPCOMING",
            WindowStatus::Registration => "REGISTRATION",
            WindowStatus::Idle => "IDLE",
            WindowStatus::Claim => "CLAIM",
        }
    }
}

impl std::fmt::Display for WindowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numbered vesting window with registration and claim sub-periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirdropWindow {
    pub airdrop_window_id: u32,
    pub airdrop_window_order: u32,
    #[serde(default)]
    pub airdrop_window_name: Option<String>,
    pub airdrop_window_status: WindowStatus,
    pub airdrop_window_registration_start_period: DateTime<Utc>,
    pub airdrop_window_registration_end_period: DateTime<Utc>,
    pub airdrop_window_claim_start_period: DateTime<Utc>,
    pub airdrop_window_claim_end_period: DateTime<Utc>,
    #[serde(default)]
    pub airdrop_window_total_tokens: Option<u64>,
}

impl AirdropWindow {
    pub fn is_registration_active(&self, now: DateTime<Utc>) -> bool {
        check_date_is_between(
            self.airdrop_window_registration_start_period,
            self.airdrop_window_registration_end_period,
            now,
        )
    }

    pub fn is_claim_active(&self, now: DateTime<Utc>) -> bool {
        check_date_is_between(
            self.airdrop_window_claim_start_period,
            self.airdrop_window_claim_end_period,
            now,
        )
    }

    /// Checks interval ordering: each period starts before it ends and
    /// registration opens no later than claiming.
    pub fn validate(&self) -> Result<(), PortalError> {
        let window_id = self.airdrop_window_id;
        if self.airdrop_window_registration_end_period < self.airdrop_window_registration_start_period {
            return Err(PortalError::InvertedInterval {
                window_id,
                interval: "registration",
            });
        }
        if self.airdrop_window_claim_end_period < self.airdrop_window_claim_start_period {
            return Err(PortalError::InvertedInterval {
                window_id,
                interval: "claim",
            });
        }
        if self.airdrop_window_claim_start_period < self.airdrop_window_registration_start_period {
            return Err(PortalError::ClaimBeforeRegistration { window_id });
        }
        Ok(())
    }

    /// Name shown in the schedule, falling back to the window order.
    pub fn display_name(&self) -> String {
        self.airdrop_window_name
            .clone()
            .unwrap_or_else(|| format!("Window {}", self.airdrop_window_order))
    }
}
