//! Stake snapshot for the claim surface and the stake-selection modal.

use serde::{Deserialize, Serialize};

use crate::units::{format_token_amount, raw_amount};

/// Claimable and stakable amounts for the connected account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeInfo {
    #[serde(deserialize_with = "raw_amount::deserialize")]
    pub claimable_tokens_to_wallet: u64,
    pub is_stakable: bool,
    pub stakable_token_name: String,
    #[serde(deserialize_with = "raw_amount::deserialize")]
    pub stakable_tokens: u64,
    #[serde(default)]
    pub is_loading: bool,
}

impl StakeInfo {
    /// Amount routed to the stake pool, e.g. `5 AGIX`.
    pub fn stakable_display(&self) -> String {
        format!("{} {}", format_token_amount(self.stakable_tokens), self.stakable_token_name)
    }

    /// Amount paid out to the wallet, without a unit.
    pub fn claimable_display(&self) -> String {
        format_token_amount(self.claimable_tokens_to_wallet)
    }
}
