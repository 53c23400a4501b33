//! State management for the airdrop portal.

pub mod portal_state;

pub use portal_state::*;
