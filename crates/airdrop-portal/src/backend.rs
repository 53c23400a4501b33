//! Backend the portal forwards user actions to.
//!
//! The real system talks to a wallet and the airdrop contract; the portal
//! ships a simulated backend with configurable latency and failure so the
//! screen's loading and alert paths can be exercised end to end.

use std::cell::RefCell;
use std::collections::HashSet;
use std::time::Duration;

use airdrop_core::{ActionError, AirdropWindow, StakeInfo};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// What a successful action changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Registered {
        window_id: u32,
        at: DateTime<Utc>,
    },
    Claimed {
        window_id: u32,
        amount: u64,
    },
    Staked {
        window_id: u32,
        staked: u64,
        token: String,
        to_wallet: u64,
    },
}

/// Actions the registration screen can trigger.
#[async_trait(?Send)]
pub trait PortalBackend {
    async fn register(&self, window: &AirdropWindow, now: DateTime<Utc>) -> Result<ActionOutcome, ActionError>;

    async fn claim(&self, window: &AirdropWindow, amount: u64) -> Result<ActionOutcome, ActionError>;

    async fn auto_stake(&self, window: &AirdropWindow, stake_info: &StakeInfo) -> Result<ActionOutcome, ActionError>;
}

/// In-process backend that sleeps to mimic confirmation time.
#[derive(Debug, Default)]
pub struct SimulatedBackend {
    latency: Duration,
    fail_actions: bool,
    registered: RefCell<HashSet<u32>>,
}

impl SimulatedBackend {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            ..Default::default()
        }
    }

    /// Makes every action fail after the latency elapses.
    pub fn with_failures(mut self, fail_actions: bool) -> Self {
        self.fail_actions = fail_actions;
        self
    }

    /// Seeds windows the account is already registered for.
    pub fn with_registered(self, window_ids: impl IntoIterator<Item = u32>) -> Self {
        self.seed_registered(window_ids);
        self
    }

    /// Records registrations known from a snapshot loaded after construction.
    pub fn seed_registered(&self, window_ids: impl IntoIterator<Item = u32>) {
        self.registered.borrow_mut().extend(window_ids);
    }

    async fn settle(&self, action: &str) -> Result<(), ActionError> {
        tracing::debug!(action, latency_ms = self.latency.as_millis() as u64, "awaiting confirmation");
        tokio::time::sleep(self.latency).await;
        if self.fail_actions {
            return Err(ActionError::Backend(format!("{action} transaction was not confirmed")));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl PortalBackend for SimulatedBackend {
    async fn register(&self, window: &AirdropWindow, now: DateTime<Utc>) -> Result<ActionOutcome, ActionError> {
        let window_id = window.airdrop_window_id;
        if self.registered.borrow().contains(&window_id) {
            return Err(ActionError::Rejected("Already registered for this window".to_string()));
        }
        if !window.is_registration_active(now) {
            return Err(ActionError::Rejected("Registration is not open".to_string()));
        }
        self.settle("registration").await?;
        self.registered.borrow_mut().insert(window_id);
        Ok(ActionOutcome::Registered { window_id, at: now })
    }

    async fn claim(&self, window: &AirdropWindow, amount: u64) -> Result<ActionOutcome, ActionError> {
        if amount == 0 {
            return Err(ActionError::Rejected("No tokens available to claim".to_string()));
        }
        self.settle("claim").await?;
        Ok(ActionOutcome::Claimed {
            window_id: window.airdrop_window_id,
            amount,
        })
    }

    async fn auto_stake(&self, window: &AirdropWindow, stake_info: &StakeInfo) -> Result<ActionOutcome, ActionError> {
        if !stake_info.is_stakable {
            return Err(ActionError::Rejected("Rewards for this window cannot be staked".to_string()));
        }
        self.settle("stake").await?;
        Ok(ActionOutcome::Staked {
            window_id: window.airdrop_window_id,
            staked: stake_info.stakable_tokens,
            token: stake_info.stakable_token_name.clone(),
            to_wallet: stake_info.claimable_tokens_to_wallet,
        })
    }
}
