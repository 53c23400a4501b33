//! Desktop airdrop portal
//!
//! Hosts the airdrop registration screen: loads the window schedule from a
//! JSON snapshot, keeps the clock ticking, and forwards register, claim and
//! stake actions to a backend.

pub mod backend;
pub mod clock;
pub mod components;
pub mod snapshot;
pub mod state;
